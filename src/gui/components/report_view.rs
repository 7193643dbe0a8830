// src/gui/components/report_view.rs
//
// Generated Markdown, read-only, with copy/export buttons.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("📄 Report");

    let Some(report) = app.report.as_deref() else {
        ui.label("👈 Load data, then search for a company to build the report");
        return;
    };

    let mut copy = false;
    let mut export = false;

    ui.horizontal(|ui| {
        copy = ui.button("📋 Copy").clicked();
        export = ui.button("💾 Export .md").clicked();
        ui.label("to");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text).desired_width(180.0));
    });

    egui::ScrollArea::vertical()
        .id_salt("report_scroll")
        .max_height(360.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            let mut text = report;
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });

    if copy {
        let ctx = ui.ctx().clone();
        actions::copy(app, &ctx);
    }
    if export {
        actions::export_report(app);
    }
}
