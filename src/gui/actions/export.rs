// src/gui/actions/export.rs
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::{gui::app::App, runner};

pub fn export(app: &mut App) {
    let dir = app.state.options.export_dir.clone();
    logf!("Export: Begin rows={} dir={}", app.rows.len(), dir.display());

    let notice = runner::export(&app.store, &dir, Utc::now().date_naive());
    app.status(notice);
}

/// Open the export folder (or its nearest existing parent) in the system file explorer.
pub fn open_export_folder(app: &mut App) {
    let folder = find_nearest_existing_parent(&app.state.options.export_dir);

    let absolute_folder = match std::fs::canonicalize(&folder) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            loge!("Cannot resolve folder path: {}", e);
            app.status(notice!(Error, "Cannot resolve folder path: {e}"));
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {}", e);
        app.status(notice!(Error, "Failed to open folder: {e}"));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(program)
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn {program}: {e}"))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}
