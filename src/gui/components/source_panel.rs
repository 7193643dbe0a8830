// src/gui/components/source_panel.rs
//
// Left panel: ranking kind, years, where the pages come from, and a short
// summary of what got parsed.

use eframe::egui::{self, RichText};

use crate::{
    config::options::{DataSource, RankingKind},
    data::Snapshot,
    gui::{actions, app::App},
    store,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("⚙️ Settings");
    ui.add_space(4.0);

    // --- Ranking kind ---
    let before_kind = app.state.options.kind;
    egui::ComboBox::from_label("Ranking")
        .selected_text(before_kind.label())
        .show_ui(ui, |ui| {
            for k in RankingKind::ALL {
                ui.selectable_value(&mut app.state.options.kind, k, k.label());
            }
        });
    if app.state.options.kind != before_kind {
        logf!("UI: Ranking kind → {:?}", app.state.options.kind);
        app.clear_data();
        app.status(format!("{} selected; load its data", app.state.options.kind));
    }

    // --- Years ---
    let before_years = (
        app.state.options.report.current_year,
        app.state.options.report.previous_year,
    );
    ui.horizontal(|ui| {
        ui.label("Year:");
        ui.add(egui::DragValue::new(&mut app.state.options.report.current_year).range(1990..=2100));
        ui.label("vs");
        ui.add(egui::DragValue::new(&mut app.state.options.report.previous_year).range(1990..=2100));
    });
    let after_years = (
        app.state.options.report.current_year,
        app.state.options.report.previous_year,
    );
    if after_years != before_years {
        logf!("UI: Years → {} vs {}", after_years.0, after_years.1);
        app.clear_data();
    }

    ui.horizontal(|ui| {
        ui.label("Top rows:");
        ui.add(egui::DragValue::new(&mut app.state.options.report.top_n).range(1..=100));
    });

    ui.separator();

    // --- Source ---
    ui.label(RichText::new("📁 Data source").strong());
    let before_source = app.state.options.source;
    ui.radio_value(&mut app.state.options.source, DataSource::DataDir, "Data folder");
    ui.radio_value(&mut app.state.options.source, DataSource::Manual, "Pick files");
    if app.state.options.source != before_source {
        logf!("UI: Source → {:?}", app.state.options.source);
    }

    let kind = app.state.options.kind;
    let cur_year = app.state.options.report.current_year;
    let prev_year = app.state.options.report.previous_year;

    match app.state.options.source {
        DataSource::DataDir => {
            ui.horizontal(|ui| {
                ui.label("Folder:");
                ui.text_edit_singleline(&mut app.state.gui.data_dir_text);
            });
            ui.small(format!(
                "Expects {} and {}",
                store::snapshot_file_name(kind, cur_year),
                store::snapshot_file_name(kind, prev_year)
            ));
            if ui.button("🔄 Load").clicked() {
                actions::load_data_dir(app);
            }
        }
        DataSource::Manual => {
            ui.label(format!("{cur_year} page"));
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.current_path_text)
                    .hint_text("path/to/page.txt"),
            );
            ui.label(format!("{prev_year} page (optional)"));
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.previous_path_text)
                    .hint_text("path/to/page.txt"),
            );
            ui.small("Or drop .txt files onto the window");
            if ui.button("🔄 Load files").clicked() {
                actions::load_files(app);
            }
        }
    }

    ui.separator();

    // --- Stats ---
    ui.label(RichText::new("📈 Statistics").strong());
    stat_line(ui, cur_year, app.current.as_ref());
    stat_line(ui, prev_year, app.previous.as_ref());
}

fn stat_line(ui: &mut egui::Ui, year: u16, snapshot: Option<&Snapshot>) {
    match snapshot {
        Some(s) => {
            let new = s.iter().filter(|e| e.is_new()).count();
            ui.label(format!("{year}: {} entries ({} new)", s.len(), new));
        }
        None => {
            ui.label(format!("{year}: not loaded"));
        }
    }
}
