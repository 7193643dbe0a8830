// src/gui/actions/load.rs
use std::path::{Path, PathBuf};

use crate::{config::options::ReportOptions, data::Snapshot, gui::app::App, store};

pub fn load_data_dir(app: &mut App) {
    let dir = PathBuf::from(app.state.gui.data_dir_text.trim());
    app.state.options.data_dir = dir.clone();

    let kind = app.state.options.kind;
    let years = app.state.options.report.clone();
    logf!("Load: Begin dir={} kind={:?}", dir.display(), kind);

    match store::load_pair(&dir, kind, &years) {
        Ok(pair) => {
            let msg = summary(&years, pair.current.as_ref(), pair.previous.as_ref());
            app.current = pair.current;
            app.previous = pair.previous;
            app.report = None;
            app.status(msg);
        }
        Err(e) => {
            loge!("Load: {}", e);
            app.status(format!("Load error: {e}"));
        }
    }
}

pub fn load_files(app: &mut App) {
    let years = app.state.options.report.clone();
    let cur_text = app.state.gui.current_path_text.trim().to_string();
    let prev_text = app.state.gui.previous_path_text.trim().to_string();

    if cur_text.is_empty() {
        app.status(format!("Pick a {} page first", years.current_year));
        logd!("Load: Clicked without a current file");
        return;
    }

    let current = match store::load_file(Path::new(&cur_text)) {
        Ok(s) => s,
        Err(e) => {
            loge!("Load: {}", e);
            app.status(format!("Load error: {e}"));
            return;
        }
    };

    let previous = if prev_text.is_empty() {
        None
    } else {
        match store::load_file(Path::new(&prev_text)) {
            Ok(s) => Some(s),
            Err(e) => {
                loge!("Load: {}", e);
                app.status(format!("Load error: {e}"));
                return;
            }
        }
    };

    let msg = summary(&years, Some(&current), previous.as_ref());
    app.current = Some(current);
    app.previous = previous;
    app.report = None;
    app.status(msg);
}

fn summary(years: &ReportOptions, current: Option<&Snapshot>, previous: Option<&Snapshot>) -> String {
    fn part(year: u16, s: Option<&Snapshot>) -> String {
        match s {
            Some(s) if s.is_empty() => format!("{year}: no entries recognized"),
            Some(s) => format!("{year}: {} entries", s.len()),
            None => format!("{year}: no data"),
        }
    }
    format!(
        "Loaded · {} · {}",
        part(years.current_year, current),
        part(years.previous_year, previous)
    )
}
