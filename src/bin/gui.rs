// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use ranking_compare::{config::state::GuiState, gui, log};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/ranking.png"
    )))
    .ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    if let Err(e) = log::init() {
        eprintln!("Log disabled: {}", e);
    }

    let size = GuiState::default();
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([size.window_w as f32, size.window_h as f32])
        .with_drag_and_drop(true);
    if let Some(icon) = app_icon() {
        // eframe 0.32: icon set via viewport builder
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
