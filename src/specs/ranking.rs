// src/specs/ranking.rs
//
// Ranking table rows copied from a Merco results page, one cell per line:
//
// ```text
// <td><span class="badge-pos-1">1</span></td>                      rank
// <td>Jane Doe <em>Acme Co</em></td>                               leader + company
// <td class="f-monospace">950</td>                                 score
// <td title="Posición 2024"><span class="badge-pos-2">3</span></td>  previous year → ends record
// <td><span class="evol-eq">=</span></td>                          no change     → ends record
// <td title=""></td>                                               new entrant   → ends record
// ```
//
// Everything else (row tags, headers, scripts, blank lines) is skipped.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::html::visible_text;
use crate::data::{Entry, Snapshot};

static RANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">(\d+)</span>").expect("rank pattern"));
static NAMES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<td>(.*?)<em>(.*?)</em></td>").expect("names pattern"));
static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">(\d+)</td>").expect("score pattern"));
static PREV_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"title="Posici(?:ó|&oacute;)n \d{4}""#).expect("year pattern"));
static PREV_RANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"badge-pos-2.*?>(\d+)</span>").expect("previous rank pattern"));

/// What a line was recognized as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Rank,
    Names,
    Score,
    /// Terminator carrying last year's position (or nothing → new entrant).
    PreviousYear,
    /// Terminator: kept the same position.
    Unchanged,
    /// Terminator: no prior position.
    NewEntrant,
}

impl LineKind {
    pub fn is_terminator(&self) -> bool {
        matches!(self, LineKind::PreviousYear | LineKind::Unchanged | LineKind::NewEntrant)
    }
}

/// One row of the transition table.
struct Rule {
    kind: LineKind,
    /// Only considered once a rank line has opened the record.
    needs_rank: bool,
    marker: fn(&str) -> bool,
    apply: fn(&mut Extractor, &str),
}

/// First match wins; a marker hit consumes the line even if its capture fails.
static RULES: &[Rule] = &[
    Rule { kind: LineKind::Rank,         needs_rank: false, marker: is_rank_line,      apply: Extractor::on_rank },
    Rule { kind: LineKind::Names,        needs_rank: false, marker: is_names_line,     apply: Extractor::on_names },
    Rule { kind: LineKind::Score,        needs_rank: true,  marker: is_score_line,     apply: Extractor::on_score },
    Rule { kind: LineKind::PreviousYear, needs_rank: false, marker: is_prev_year_line, apply: Extractor::on_previous_year },
    Rule { kind: LineKind::Unchanged,    needs_rank: true,  marker: is_unchanged_line, apply: Extractor::on_unchanged },
    Rule { kind: LineKind::NewEntrant,   needs_rank: true,  marker: is_new_line,       apply: Extractor::on_new_entrant },
];

fn is_rank_line(line: &str) -> bool {
    line.contains(r#"<td><span class="badge-pos-1"#)
}

fn is_names_line(line: &str) -> bool {
    line.contains("<td>") && line.contains("<em>") && line.contains("</em></td>")
}

fn is_score_line(line: &str) -> bool {
    line.contains("f-monospace")
}

fn is_prev_year_line(line: &str) -> bool {
    PREV_YEAR_RE.is_match(line)
}

fn is_unchanged_line(line: &str) -> bool {
    line.contains("evol-eq")
}

fn is_new_line(line: &str) -> bool {
    line.contains(r#"title="""#) && line.contains("</td>")
}

/// First capture group as a positive integer.
fn capture_positive(re: &Regex, line: &str) -> Option<u32> {
    re.captures(line)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|&v| v > 0)
}

/// Line-driven record builder.
///
/// Holds the fields of the record being read; a terminator line flushes them
/// into an [`Entry`] when all four are present and resets them either way.
#[derive(Debug, Default)]
pub struct Extractor {
    rank: Option<u32>,
    leader: Option<String>,
    company: Option<String>,
    score: Option<u32>,
    entries: Vec<Entry>,
    dropped: usize,
}

impl Extractor {
    pub fn new() -> Self { Self::default() }

    /// Classify one line and apply its transition.
    /// Returns `None` for lines no rule claims.
    pub fn feed(&mut self, line: &str) -> Option<LineKind> {
        let has_rank = self.rank.is_some();
        let rule = RULES
            .iter()
            .find(|r| (!r.needs_rank || has_rank) && (r.marker)(line))?;
        (rule.apply)(self, line);
        Some(rule.kind)
    }

    /// Entries flushed so far.
    pub fn entries(&self) -> &[Entry] { &self.entries }

    /// Records that reached a terminator with a field missing.
    pub fn dropped(&self) -> usize { self.dropped }

    /// True while some working field is set.
    pub fn has_open_record(&self) -> bool {
        self.rank.is_some() || self.leader.is_some() || self.company.is_some() || self.score.is_some()
    }

    /// Close the parse. A record still open here never saw a terminator and is discarded.
    pub fn finish(self) -> Snapshot {
        if self.has_open_record() {
            logd!("Extract: unterminated record at end of input (rank={:?})", self.rank);
        }
        if self.dropped > 0 {
            logd!("Extract: dropped {} incomplete record(s)", self.dropped);
        }
        Snapshot::from_entries(self.entries)
    }

    /* ---------- transitions ---------- */

    fn on_rank(&mut self, line: &str) {
        if let Some(rank) = capture_positive(&RANK_RE, line) {
            self.rank = Some(rank);
        }
    }

    fn on_names(&mut self, line: &str) {
        if let Some(caps) = NAMES_RE.captures(line) {
            self.leader = caps.get(1).and_then(|m| visible_text(m.as_str()));
            self.company = caps.get(2).and_then(|m| visible_text(m.as_str()));
        }
    }

    fn on_score(&mut self, line: &str) {
        if let Some(score) = SCORE_RE
            .captures(line)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
        {
            self.score = Some(score);
        }
    }

    fn on_previous_year(&mut self, line: &str) {
        // No usable number: same as a new entrant.
        let previous = capture_positive(&PREV_RANK_RE, line);
        self.flush(previous);
    }

    fn on_unchanged(&mut self, _line: &str) {
        let previous = self.rank;
        self.flush(previous);
    }

    fn on_new_entrant(&mut self, _line: &str) {
        self.flush(None);
    }

    fn flush(&mut self, previous_rank: Option<u32>) {
        let fields = (self.rank.take(), self.leader.take(), self.company.take(), self.score.take());
        match fields {
            (Some(rank), Some(leader_name), Some(company_name), Some(score)) => {
                self.entries.push(Entry { rank, leader_name, company_name, score, previous_rank });
            }
            (None, None, None, None) => {}
            (rank, leader, company, score) => {
                self.dropped += 1;
                logd!(
                    "Extract: incomplete record dropped rank={:?} leader={:?} company={:?} score={:?}",
                    rank, leader, company, score
                );
            }
        }
    }
}

/// Parse a whole page (or any line-oriented fragment of one).
pub fn extract(text: &str) -> Snapshot {
    let mut ex = Extractor::new();
    for line in text.lines() {
        ex.feed(line);
    }
    ex.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANK: &str = r#"<td><span class="badge-pos-1">7</span></td>"#;
    const NAMES: &str = "<td>  Jane Doe <em> Acme Co </em></td>";
    const SCORE: &str = r#"<td class="f-monospace">950</td>"#;
    const PREV: &str = r#"<td title="Posición 2024"><span class="badge-pos-2 small">12</span></td>"#;
    const SAME: &str = r#"<td><span class="evol-eq">=</span></td>"#;
    const NEW: &str = r#"<td title=""></td>"#;

    fn opened() -> Extractor {
        let mut ex = Extractor::new();
        for l in [RANK, NAMES, SCORE] { ex.feed(l); }
        ex
    }

    #[test]
    fn rank_line_sets_and_overwrites_rank() {
        let mut ex = Extractor::new();
        assert_eq!(ex.feed(RANK), Some(LineKind::Rank));
        assert_eq!(ex.rank, Some(7));
        ex.feed(r#"<td><span class="badge-pos-1 big">8</span></td>"#);
        assert_eq!(ex.rank, Some(8));
    }

    #[test]
    fn rank_marker_without_number_is_consumed_but_sets_nothing() {
        let mut ex = Extractor::new();
        assert_eq!(ex.feed(r#"<td><span class="badge-pos-1">-</span></td>"#), Some(LineKind::Rank));
        assert_eq!(ex.rank, None);
    }

    #[test]
    fn names_are_trimmed() {
        let mut ex = Extractor::new();
        assert_eq!(ex.feed(NAMES), Some(LineKind::Names));
        assert_eq!(ex.leader.as_deref(), Some("Jane Doe"));
        assert_eq!(ex.company.as_deref(), Some("Acme Co"));
    }

    #[test]
    fn names_decode_entities() {
        let mut ex = Extractor::new();
        ex.feed("<td>Ana Mar&iacute;a <em>Procter &amp; Gamble</em></td>");
        assert_eq!(ex.leader.as_deref(), Some("Ana María"));
        assert_eq!(ex.company.as_deref(), Some("Procter & Gamble"));
    }

    #[test]
    fn score_needs_an_open_rank() {
        let mut ex = Extractor::new();
        assert_eq!(ex.feed(SCORE), None);
        assert_eq!(ex.score, None);
        ex.feed(RANK);
        assert_eq!(ex.feed(SCORE), Some(LineKind::Score));
        assert_eq!(ex.score, Some(950));
    }

    #[test]
    fn zero_score_is_a_real_score() {
        let mut ex = Extractor::new();
        ex.feed(RANK);
        ex.feed(NAMES);
        ex.feed(r#"<td class="f-monospace">0</td>"#);
        ex.feed(NEW);
        assert_eq!(ex.entries()[0].score, 0);
    }

    #[test]
    fn previous_year_terminator_takes_value() {
        let mut ex = opened();
        assert_eq!(ex.feed(PREV), Some(LineKind::PreviousYear));
        assert_eq!(ex.entries()[0].previous_rank, Some(12));
        assert!(!ex.has_open_record());
    }

    #[test]
    fn previous_year_terminator_without_value_means_new() {
        let mut ex = opened();
        ex.feed(r#"<td title="Posición 2023"></td>"#);
        assert_eq!(ex.entries()[0].previous_rank, None);
    }

    #[test]
    fn previous_year_marker_accepts_entity_and_other_years() {
        let mut ex = opened();
        let line = r#"<td title="Posici&oacute;n 2019"><span class="badge-pos-2">4</span></td>"#;
        assert_eq!(ex.feed(line), Some(LineKind::PreviousYear));
        assert_eq!(ex.entries()[0].previous_rank, Some(4));
    }

    #[test]
    fn unchanged_terminator_copies_rank() {
        let mut ex = opened();
        assert_eq!(ex.feed(SAME), Some(LineKind::Unchanged));
        assert_eq!(ex.entries()[0].previous_rank, Some(7));
    }

    #[test]
    fn new_entrant_terminator_clears_previous() {
        let mut ex = opened();
        assert_eq!(ex.feed(NEW), Some(LineKind::NewEntrant));
        assert!(ex.entries()[0].is_new());
    }

    #[test]
    fn guarded_terminators_ignored_before_rank() {
        let mut ex = Extractor::new();
        ex.feed(NAMES);
        assert_eq!(ex.feed(SAME), None);
        assert_eq!(ex.feed(NEW), None);
        // names survive until a real terminator
        assert_eq!(ex.company.as_deref(), Some("Acme Co"));
    }

    #[test]
    fn incomplete_record_is_dropped_and_state_reset() {
        let mut ex = Extractor::new();
        ex.feed(RANK);
        ex.feed(SCORE);
        ex.feed(NEW);
        assert!(ex.entries().is_empty());
        assert_eq!(ex.dropped(), 1);
        assert!(!ex.has_open_record());
    }

    #[test]
    fn repeated_terminators_do_not_compound() {
        let mut ex = opened();
        ex.feed(PREV);
        ex.feed(PREV);
        assert_eq!(ex.entries().len(), 1);
    }

    #[test]
    fn unknown_lines_are_ignored() {
        let mut ex = opened();
        assert_eq!(ex.feed("<tr>"), None);
        assert_eq!(ex.feed("<script>var x = 1;</script>"), None);
        assert_eq!(ex.feed(""), None);
        ex.feed(SAME);
        assert_eq!(ex.entries().len(), 1);
    }

    #[test]
    fn extract_empty_is_empty() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn extract_without_terminator_yields_nothing() {
        let text = [RANK, NAMES, SCORE].join("\n");
        assert!(extract(&text).is_empty());
    }

    #[test]
    fn extract_handles_crlf() {
        let text = [RANK, NAMES, SCORE, PREV].join("\r\n");
        let snap = extract(&text);
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.entries()[0].company_name, "Acme Co");
    }
}
