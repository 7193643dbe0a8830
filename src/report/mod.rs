// src/report/mod.rs
//
// Year-over-year report composition.
//
// Two shapes share one preamble and one closing:
// - Mode A: the search token names an entry of the current snapshot →
//   narrative about that entry (rank, movement, score delta).
// - Mode B: no match → top-N listing of the current snapshot, each row with
//   its movement against last year.
//
// `generate` is a pure function of its arguments.

pub mod text;

use crate::config::options::ReportOptions;
use crate::data::{Entry, Snapshot};
use crate::matcher;

/// Rank change between last year and this year. Lower rank is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Improved(u32),
    Declined(u32),
    Held,
}

impl Movement {
    pub fn between(current_rank: u32, prior_rank: u32) -> Self {
        if current_rank < prior_rank {
            Movement::Improved(prior_rank - current_rank)
        } else if current_rank > prior_rank {
            Movement::Declined(current_rank - prior_rank)
        } else {
            Movement::Held
        }
    }
}

/// Best-known standing of an entry last year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prior {
    pub rank: u32,
    /// Only known when the entry was found in last year's snapshot.
    pub score: Option<u32>,
}

/// Previous snapshot first (rank + score), then the entry's own
/// `previous_rank` (rank only), else unknown.
pub fn resolve_prior(entry: &Entry, previous: Option<&Snapshot>) -> Option<Prior> {
    if let Some(found) = previous.and_then(|p| matcher::align(entry, p)) {
        return Some(Prior { rank: found.rank, score: Some(found.score) });
    }
    entry.previous_rank.map(|rank| Prior { rank, score: None })
}

/// Report with the default years and listing size.
pub fn generate(
    search_token: &str,
    ranking_label: &str,
    current: &Snapshot,
    previous: Option<&Snapshot>,
) -> String {
    generate_with(&ReportOptions::default(), search_token, ranking_label, current, previous)
}

pub fn generate_with(
    opts: &ReportOptions,
    search_token: &str,
    ranking_label: &str,
    current: &Snapshot,
    previous: Option<&Snapshot>,
) -> String {
    let body = match matcher::find(search_token, current) {
        Some(entry) => entity_body(opts, ranking_label, entry, previous),
        None => listing_body(opts, ranking_label, current, previous),
    };
    join!(text::PREAMBLE, &body, text::CLOSING)
}

/* ---------- Mode A ---------- */

fn entity_body(
    opts: &ReportOptions,
    label: &str,
    entry: &Entry,
    previous: Option<&Snapshot>,
) -> String {
    let mut out = text::headline(&entry.company_name, entry.rank, label, opts.current_year);

    match resolve_prior(entry, previous) {
        Some(prior) => {
            let m = Movement::between(entry.rank, prior.rank);
            out.push_str(&text::prior_line(opts.previous_year, prior.rank, m));
            let score = match prior.score {
                Some(ps) => text::score_delta_line(opts.current_year, entry.score, opts.previous_year, ps),
                None => text::score_line(opts.current_year, entry.score),
            };
            out.push_str(&score);
        }
        None => out.push_str(&text::new_entrant_line(opts.current_year, entry.score)),
    }
    out
}

/* ---------- Mode B ---------- */

fn listing_body(
    opts: &ReportOptions,
    label: &str,
    current: &Snapshot,
    previous: Option<&Snapshot>,
) -> String {
    let mut out = text::listing_heading(opts.top_n, label, opts.previous_year, opts.current_year);

    for e in current.top(opts.top_n) {
        out.push_str(&text::listing_row(e.rank, &e.leader_name, &e.company_name, e.score));
        match resolve_prior(e, previous) {
            Some(prior) => {
                let m = Movement::between(e.rank, prior.rank);
                out.push_str(&text::listing_prior(opts.previous_year, prior.rank, m));
            }
            None => out.push_str(text::NEW_MARKER),
        }
    }
    out
}
