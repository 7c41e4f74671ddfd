// src/gui/actions/capture.rs
use std::path::PathBuf;

use crate::{file::normalize_separators, gui::app::App, runner};

pub fn capture(app: &mut App) {
    let text = app.state.gui.page_path_text.trim();
    if text.is_empty() {
        app.status(notice!(Warning, "Enter the path of a saved scouting page"));
        return;
    }
    let path = PathBuf::from(normalize_separators(text));

    logf!("Capture: Begin page={}", path.display());
    let notice = runner::capture_page(&mut app.store, &path);
    logf!("Capture: Done → {notice}");

    app.reload();
    app.status(notice);
}
