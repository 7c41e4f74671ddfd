// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod notice;
pub mod page;

pub mod csv;
pub mod file;
pub mod gui;
pub mod runner;
pub mod scrape;
pub mod store;
pub mod sync;
