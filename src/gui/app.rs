// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::{
        options::DataSource,
        state::AppState,
    },
    data::Snapshot,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Merco Ranking Comparison",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for options + text fields
    pub state: AppState,

    // parsed snapshots for the selected ranking kind
    pub current: Option<Snapshot>,
    pub previous: Option<Snapshot>,

    // last generated report and the search text it was built from
    pub report: Option<String>,
    pub report_token: String,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!(
            "Init: kind={:?} source={:?} years={}/{}",
            state.options.kind,
            state.options.source,
            state.options.report.previous_year,
            state.options.report.current_year
        );
        Self {
            state,
            current: None,
            previous: None,
            report: None,
            report_token: s!(),
            status: s!("Idle"),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Snapshots belong to one ranking kind and year pair; drop them when either changes.
    pub fn clear_data(&mut self) {
        self.current = None;
        self.previous = None;
        self.report = None;
        self.report_token.clear();
    }

    /// Mirror the output-folder text field → export options.
    pub fn sync_out_dir(&mut self) {
        let text = self.state.gui.out_dir_text.trim();
        if !text.is_empty() {
            self.state.options.export.dir = PathBuf::from(text);
        }
    }

    /// Files dropped on the window: a name containing the previous year goes
    /// to the previous slot, anything else to the current slot.
    fn accept_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect()
        });
        if dropped.is_empty() {
            return;
        }

        let prev_year = self.state.options.report.previous_year.to_string();
        for path in dropped {
            let is_prev = path
                .file_name()
                .map(|n| n.to_string_lossy().contains(&prev_year))
                .unwrap_or(false);
            let text = path.to_string_lossy().into_owned();
            logd!("UI: Dropped {} (previous={})", text, is_prev);
            if is_prev {
                self.state.gui.previous_path_text = text;
            } else {
                self.state.gui.current_path_text = text;
            }
        }

        self.state.options.source = DataSource::Manual;
        actions::load_files(self);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.accept_dropped_files(ctx);

        egui::SidePanel::left("sources")
            .resizable(false)
            .min_width(260.0)
            .show(ctx, |ui| {
                components::source_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::search_bar::draw(ui, self);

            ui.separator();

            components::report_view::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
