// src/gui/components/data_table.rs
//
// Draws the stored collection as a table, one row per record, columns in
// export order. Purely a view over `app.rows`.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::UNKNOWN;
use crate::csv::HEADERS;
use crate::gui::app::App;

/// Free-text columns get left alignment and more room.
const TEXT_COLUMNS: [usize; 8] = [1, 3, 5, 14, 15, 16, 17, 18];

/// Sentinel cells are drawn dimmed.
const SENTINEL_GRAY: Color32 = Color32::from_gray(120);

fn initial_width(ci: usize) -> f32 {
    match ci {
        0 => 36.0,
        1 => 180.0,
        3 | 14 => 150.0,
        16 | 17 | 18 => 120.0,
        5 => 100.0,
        _ => 56.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.rows.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No players saved yet").italics());
        });
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| inner_table(ui, app));
}

fn inner_table(ui: &mut egui::Ui, app: &App) {
    let cols = HEADERS.len();
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .stick_to_bottom(true);
    for ci in 0..cols {
        table = table.column(Column::initial(initial_width(ci)).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for (ci, name) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = egui::Label::new(RichText::new(*name).strong()).selectable(false);
                    if TEXT_COLUMNS.contains(&ci) {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                    } else {
                        ui.centered_and_justified(|ui| { ui.add(label); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.rows.len(), |mut row| {
                let Some(data) = app.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let cell = data.fields.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if cell == UNKNOWN || (ci == 4 && cell == "0") {
                            rt = rt.color(SENTINEL_GRAY);
                        } else if ci == 13 && cell == "true" {
                            rt = rt.color(Color32::from_rgb(0x4C, 0xAF, 0x50)).strong();
                        }
                        if TEXT_COLUMNS.contains(&ci) {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                        } else {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        }
                    });
                }
            });
        });
}
