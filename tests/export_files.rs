// tests/export_files.rs
use std::fs;
use std::path::PathBuf;

use ranking_compare::config::options::{ExportFormat, RankingKind, ReportOptions};
use ranking_compare::file::{default_report_name, write_report, write_snapshot};
use ranking_compare::{generate, Entry, Snapshot};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ranking_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn snapshot() -> Snapshot {
    Snapshot::from_entries(vec![
        Entry {
            rank: 1,
            leader_name: "Jane Doe".into(),
            company_name: "Acme, Inc.".into(),
            score: 950,
            previous_rank: Some(2),
        },
        Entry {
            rank: 2,
            leader_name: "John Roe".into(),
            company_name: "Globex".into(),
            score: 940,
            previous_rank: None,
        },
    ])
}

#[test]
fn report_is_written_verbatim() {
    let dir = tmp_dir("report");
    let report = generate("acme", "Leaders", &snapshot(), None);
    let name = default_report_name("acme", RankingKind::Leaders, &ReportOptions::default());
    assert_eq!(name, "report_merco_acme_lideres_2024_2025.md");

    let written = write_report(&dir.join("nested").join(&name), &report).unwrap();
    assert_eq!(fs::read_to_string(written).unwrap(), report);
}

#[test]
fn csv_dump_quotes_and_blanks() {
    let dir = tmp_dir("csv");
    let path = write_snapshot(&dir, RankingKind::Leaders, 2025, &snapshot(), ExportFormat::Csv, true).unwrap();
    assert!(path.ends_with("merco_lideres_2025.csv"));

    let text = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Rank,Leader,Company,Score,Previous");
    assert_eq!(lines[1], "1,Jane Doe,\"Acme, Inc.\",950,2");
    assert_eq!(lines[2], "2,John Roe,Globex,940,");
}

#[test]
fn tsv_dump_without_headers() {
    let dir = tmp_dir("tsv");
    let path = write_snapshot(&dir, RankingKind::Talent, 2024, &snapshot(), ExportFormat::Tsv, false).unwrap();
    assert!(path.ends_with("merco_talento_2024.tsv"));

    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text.lines().next(), Some("1\tJane Doe\tAcme, Inc.\t950\t2"));
    assert_eq!(text.lines().count(), 2);
}
