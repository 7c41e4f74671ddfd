// src/gui/actions/sync.rs
use std::{sync::mpsc, thread};

use crate::{gui::app::App, runner};

/// Run one sync on a worker thread. The result comes back over a channel
/// that `App` polls each frame; while it is open the Sync button stays off.
pub fn sync(app: &mut App) {
    if app.syncing() {
        logd!("Sync: Clicked while a sync is in flight, ignored");
        return;
    }

    let cfg = app.state.options.sync.clone();
    let store = app.store.clone();
    let (tx, rx) = mpsc::channel();

    logf!("Sync: Begin → {}", cfg.redacted_url());
    let spawned = thread::Builder::new()
        .name(s!("ht-scout-sync"))
        .spawn(move || {
            let notice = runner::sync(&cfg, &store);
            let _ = tx.send(notice);
        });

    match spawned {
        Ok(_) => {
            app.sync_rx = Some(rx);
            app.status(notice!(Info, "Syncing…"));
        }
        Err(e) => {
            loge!("Sync: cannot start worker: {e}");
            app.status(notice!(Error, "Sync failed: {e}"));
        }
    }
}
