// src/config/state.rs
use super::options::AppOptions;
use crate::notice::Notice;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Saved youth-scouts page to capture from
    pub page_path_text: String,

    /// Clear needs this ticked first
    pub confirm_clear: bool,

    pub window_w: f32,
    pub window_h: f32,

    /// Latest notice shown in the status line
    pub status: Notice,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            page_path_text: s!(),
            confirm_clear: false,
            window_w: 1100.0,
            window_h: 700.0,
            status: Notice::idle(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
