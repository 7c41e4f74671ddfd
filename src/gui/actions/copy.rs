// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.rows.is_empty() {
        logd!("Copy: Clicked, but there's nothing to copy");
        app.status(notice!(Warning, "No data to copy"));
        return;
    }

    let txt = csv::rows_to_string(&app.rows);
    logf!("Copy: rows={}, bytes={}", app.rows.len(), txt.len());

    ui_ctx.copy_text(txt);
    app.status(notice!(Success, "Copied {} records to clipboard", app.rows.len()));
}
