// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::mpsc::{Receiver, TryRecvError},
};

use eframe::egui;

use crate::{
    config::{consts::CONFIG_FILE, options::AppOptions, state::AppState},
    csv::{self, CsvRow},
    notice::Notice,
    runner::Stats,
    store::{load_collection, FileStore},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let app_options = match AppOptions::load(&PathBuf::from(CONFIG_FILE)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config: {e} (using defaults)");
            AppOptions::default()
        }
    };
    crate::log::init(&app_options.store_dir);

    let state = AppState { options: app_options, ..AppState::default() };
    eframe::run_native(
        "HT Scout",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub store: FileStore,

    // table view of the persisted collection, ids 1..=N
    pub rows: Vec<CsvRow>,
    pub stats: Stats,

    // in-flight sync; the worker sends exactly one notice back
    pub sync_rx: Option<Receiver<Notice>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let store = FileStore::new(&state.options.store_dir);
        logf!(
            "Init: store={}, export={}, sync={} ({})",
            state.options.store_dir.display(),
            state.options.export_dir.display(),
            state.options.sync.enabled,
            state.options.sync.redacted_url()
        );

        let mut app = Self {
            state,
            store,
            rows: Vec::new(),
            stats: Stats::default(),
            sync_rx: None,
        };
        app.reload();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status(&mut self, notice: Notice) {
        logd!("UI: status → {notice}");
        self.state.gui.status = notice;
    }

    #[inline]
    pub fn syncing(&self) -> bool {
        self.sync_rx.is_some()
    }

    /// Re-read the collection from disk into the table and stats header.
    pub fn reload(&mut self) {
        match load_collection(&self.store) {
            Ok(records) => {
                self.rows = csv::to_rows(&records);
                self.stats = Stats {
                    count: records.len(),
                    last_update: records.last().map(|r| r.timestamp),
                };
            }
            Err(e) => {
                loge!("Cache: cannot load collection: {e}");
                self.rows.clear();
                self.stats = Stats::default();
                self.status(notice!(Error, "Cannot read stored data"));
            }
        }
    }

    /// Pick up the sync worker's result, if it has arrived.
    fn poll_sync(&mut self) {
        let polled = self.sync_rx.as_ref().map(|rx| rx.try_recv());
        match polled {
            Some(Ok(notice)) => {
                self.sync_rx = None;
                self.status(notice);
            }
            Some(Err(TryRecvError::Disconnected)) => {
                self.sync_rx = None;
                loge!("Sync: worker exited without reporting");
                self.status(notice!(Error, "Sync failed: worker stopped"));
            }
            Some(Err(TryRecvError::Empty)) | None => {}
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_sync();
        if self.syncing() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("stats").show(ctx, |ui| {
            crate::gui::components::stats_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::action_buttons::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
