// src/gui/actions/generate.rs
use crate::{gui::app::App, matcher, report};

pub fn generate(app: &mut App) {
    let Some(current) = app.current.as_ref().filter(|c| !c.is_empty()) else {
        let year = app.state.options.report.current_year;
        app.status(format!("Load a {year} ranking with at least one entry first"));
        logd!("Generate: Clicked without current data");
        return;
    };

    let opts = &app.state.options;
    let token = s!(app.state.gui.search_text.trim());
    let found = matcher::find(&token, current).map(|e| e.company_name.clone());
    let text = report::generate_with(
        &opts.report,
        &token,
        opts.kind.label(),
        current,
        app.previous.as_ref(),
    );
    logf!(
        "Generate: kind={:?} token={:?} match={:?} bytes={}",
        opts.kind, token, found, text.len()
    );

    let msg = match found {
        Some(name) => format!("Report for {name}"),
        None if token.is_empty() => format!("Top {} listing", opts.report.top_n),
        None => format!("No match for \"{token}\"; showing the top {} listing", opts.report.top_n),
    };

    app.report = Some(text);
    app.report_token = token;
    app.status(msg);
}
