// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Company or leader typed into the search box
    pub search_text: String,

    /// Text fields; applied to options/loaded on button press
    pub data_dir_text: String,
    pub current_path_text: String,
    pub previous_path_text: String,
    pub out_dir_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 800,
            search_text: s!(),
            data_dir_text: s!(crate::config::consts::DATA_DIR),
            current_path_text: s!(),
            previous_path_text: s!(),
            out_dir_text: s!(crate::config::consts::DEFAULT_OUT_DIR),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
