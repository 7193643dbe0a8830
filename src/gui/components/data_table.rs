// src/gui/components/data_table.rs
//
// Parsed snapshots as tables, one collapsible section per year, plus the
// CSV/TSV export controls for them.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::options::ExportFormat,
    data::Snapshot,
    file::SNAPSHOT_HEADERS,
    gui::{
        actions::{self, Year},
        app::App,
    },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.current.is_none() && app.previous.is_none() {
        return;
    }

    ui.heading("📋 Data");

    {
        let export = &mut app.state.options.export;
        let before_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            ui.checkbox(&mut export.include_headers, "Include headers");
        });
        if export.format != before_fmt {
            logf!("UI: Export format → {:?}", export.format);
        }
    }

    let years = [
        (Year::Current, app.state.options.report.current_year, app.current.as_ref()),
        (Year::Previous, app.state.options.report.previous_year, app.previous.as_ref()),
    ];
    let mut export_which: Option<Year> = None;

    egui::ScrollArea::vertical()
        .id_salt("data_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (which, year, snapshot) in years {
                let Some(snapshot) = snapshot else { continue };
                egui::CollapsingHeader::new(format!("{year} ({} entries)", snapshot.len()))
                    .id_salt(("data", which))
                    .show(ui, |ui| {
                        if ui.button("💾 Export").clicked() {
                            export_which = Some(which);
                        }
                        table(ui, which, snapshot);
                    });
            }
        });

    if let Some(which) = export_which {
        actions::export_data(app, which);
    }
}

fn table(ui: &mut egui::Ui, which: Year, snapshot: &Snapshot) {
    TableBuilder::new(ui)
        .id_salt(("table", which))
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(50.0))
        .column(Column::initial(200.0).resizable(true).clip(true))
        .column(Column::initial(240.0).resizable(true).clip(true))
        .column(Column::exact(60.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for h in SNAPSHOT_HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            let entries = snapshot.entries();
            body.rows(20.0, entries.len(), |mut row| {
                let e = &entries[row.index()];
                row.col(|ui| { ui.label(e.rank.to_string()); });
                row.col(|ui| { ui.label(&e.leader_name); });
                row.col(|ui| { ui.label(&e.company_name); });
                row.col(|ui| { ui.label(e.score.to_string()); });
                row.col(|ui| {
                    match e.previous_rank {
                        Some(p) => { ui.label(p.to_string()); }
                        None => { ui.label(RichText::new("new").italics()); }
                    }
                });
            });
        });
}
