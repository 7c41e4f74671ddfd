// src/error.rs
use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
