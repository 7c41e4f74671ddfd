// src/file.rs

use std::{
    fs,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::config::consts::EXPORT_FILE_PREFIX;
use crate::csv::to_snapshot;
use crate::error::Result;
use crate::model::ScoutRecord;

/// `hattrick_scouts_2024-03-01.csv`
pub fn export_file_name(day: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.csv", day.format("%Y-%m-%d"))
}

/// Write the snapshot of `records` into `dir` under today's export name.
/// Returns the path written to. An existing file for the same day is replaced.
pub fn write_export(dir: &Path, records: &[ScoutRecord], day: NaiveDate) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(export_file_name(day));
    fs::write(&path, to_snapshot(records))?;
    Ok(path)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let msg = format!("Path exists but is not a directory: {}", dir.display());
        return Err(Error::new(ErrorKind::AlreadyExists, msg).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
