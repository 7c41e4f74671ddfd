// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{capture,copy,export,sync,clear}.

mod capture; // src/gui/actions/capture.rs
mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod sync;    // src/gui/actions/sync.rs

pub use capture::capture;
pub use copy::copy;
pub use export::{export, open_export_folder};
pub use sync::sync;

use crate::{gui::app::App, runner};

pub fn clear(app: &mut App) {
    if !app.state.gui.confirm_clear {
        app.status(notice!(Warning, "Tick \"confirm\" to clear all data"));
        return;
    }
    let notice = runner::clear(&mut app.store);
    app.state.gui.confirm_clear = false;
    app.reload();
    app.status(notice);
}
