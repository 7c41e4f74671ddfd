// src/gui/components/action_buttons.rs

use eframe::egui::{self, Checkbox, Color32, RichText, widgets::Spinner};
use crate::{gui::app::App, notice::Level};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    use crate::gui::actions;

    // --- Page path + Save ---
    ui.horizontal(|ui| {
        ui.label("Scouting page:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.page_path_text)
                .hint_text("saved youth-scouts page (.html)")
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let green = Color32::from_rgb(76, 175, 80);
        let button_save = ui.add(
            egui::Button::new(RichText::new("Save scouts").color(Color32::WHITE).strong())
                .fill(green),
        );
        if button_save.clicked() || enter {
            actions::capture(app);
        }
    });

    // Actions: Export / Copy / Sync / Clear
    ui.horizontal(|ui| {
        if ui.button("Export CSV").clicked() {
            actions::export(app);
        }
        if ui.button("📁").on_hover_text("Open export folder").clicked() {
            actions::open_export_folder(app);
        }

        if ui.button("Copy CSV").clicked() {
            actions::copy(app, ui.ctx());
        }

        let can_sync = app.state.options.sync.enabled && !app.syncing();
        let button_sync = ui
            .add_enabled(can_sync, egui::Button::new("Sync to cloud"))
            .on_disabled_hover_text(if app.syncing() { "Sync in progress" } else { "Cloud sync is disabled" });
        if button_sync.clicked() {
            actions::sync(app);
        }
        if app.syncing() {
            ui.add(Spinner::new().size(16.0));
        }

        ui.separator();

        ui.add(Checkbox::new(&mut app.state.gui.confirm_clear, "confirm"));
        let red = Color32::from_rgb(220, 30, 30);
        let button_clear = ui.add_enabled(
            app.state.gui.confirm_clear,
            egui::Button::new(RichText::new("Clear").color(Color32::BLACK).strong()).fill(red),
        );
        if button_clear.clicked() {
            actions::clear(app);
        }
    });

    // Status line
    let status = &app.state.gui.status;
    let color = match status.level {
        Level::Success => Color32::from_rgb(0x4C, 0xAF, 0x50),
        Level::Warning => Color32::from_rgb(0xFF, 0x98, 0x00),
        Level::Error => Color32::from_rgb(0xF4, 0x43, 0x36),
        Level::Info => ui.visuals().text_color(),
    };
    ui.label(RichText::new(&status.message).color(color));
}
