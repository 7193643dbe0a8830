// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(report) = app.report.clone() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's no report");
        return;
    };

    logf!("Copy: {} bytes", report.len());
    ui_ctx.copy_text(report);
    app.status("Copied to clipboard");
}
