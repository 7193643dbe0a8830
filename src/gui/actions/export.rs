// src/gui/actions/export.rs
use crate::{file, gui::app::App};

use super::Year;

pub fn export_report(app: &mut App) {
    app.sync_out_dir();
    let Some(report) = app.report.as_deref() else {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's no report");
        return;
    };

    let opts = &app.state.options;
    let name = file::default_report_name(&app.report_token, opts.kind, &opts.report);
    let path = opts.export.path_for(&name);

    let msg = match file::write_report(&path, report) {
        Ok(p) => {
            logf!("Export: report → {}", p.display());
            format!("Exported {}", p.display())
        }
        Err(e) => {
            loge!("Export: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}

pub fn export_data(app: &mut App, which: Year) {
    app.sync_out_dir();

    let opts = &app.state.options;
    let (snapshot, year) = match which {
        Year::Current => (app.current.as_ref(), opts.report.current_year),
        Year::Previous => (app.previous.as_ref(), opts.report.previous_year),
    };

    let msg = match snapshot {
        None => s!("Nothing to export"),
        Some(s) => match file::write_snapshot(
            &opts.export.dir,
            opts.kind,
            year,
            s,
            opts.export.format,
            opts.export.include_headers,
        ) {
            Ok(p) => {
                logf!("Export: {} rows → {}", s.len(), p.display());
                format!("Exported {}", p.display())
            }
            Err(e) => {
                loge!("Export: {}", e);
                format!("Export error: {e}")
            }
        },
    };
    app.status(msg);
}
