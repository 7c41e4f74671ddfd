// src/gui/components/stats_bar.rs
use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Players saved:").strong());
        ui.label(app.stats.count.to_string());

        ui.separator();

        ui.label(RichText::new("Last update:").strong());
        ui.label(app.stats.last_update_display());

        ui.separator();

        let sync = &app.state.options.sync;
        let sync_text = if sync.enabled { sync.redacted_url() } else { s!("off") };
        ui.label(RichText::new("Cloud sync:").strong());
        ui.label(sync_text);
    });
}
