// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{REPORT_EXT, REPORT_PREFIX};
use crate::config::options::{ExportFormat, RankingKind, ReportOptions};
use crate::core::sanitize::sanitize_filename;
use crate::csv::to_export_string;
use crate::data::Snapshot;

pub const SNAPSHOT_HEADERS: [&str; 5] = ["Rank", "Leader", "Company", "Score", "Previous"];

/// `report_merco_<token>_<slug>_<prev>_<cur>.md`
pub fn default_report_name(token: &str, kind: RankingKind, opts: &ReportOptions) -> String {
    let token = sanitize_filename(token, "top");
    format!(
        "{}_{}_{}_{}_{}.{}",
        REPORT_PREFIX, token, kind.slug(), opts.previous_year, opts.current_year, REPORT_EXT
    )
}

/// Write the generated report verbatim. Returns the path written to.
pub fn write_report(path: &Path, report: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, report)?;
    Ok(path.to_path_buf())
}

/// One row per entry; new entrants get an empty Previous cell.
pub fn snapshot_rows(snapshot: &Snapshot) -> Vec<Vec<String>> {
    snapshot
        .iter()
        .map(|e| {
            vec![
                e.rank.to_string(),
                e.leader_name.clone(),
                e.company_name.clone(),
                e.score.to_string(),
                e.previous_rank.map(|p| p.to_string()).unwrap_or_default(),
            ]
        })
        .collect()
}

pub fn snapshot_to_string(snapshot: &Snapshot, format: ExportFormat, include_headers: bool) -> String {
    let headers: Vec<String> = SNAPSHOT_HEADERS.iter().map(|h| s!(*h)).collect();
    let headers = if include_headers { Some(headers.as_slice()) } else { None };
    to_export_string(headers, &snapshot_rows(snapshot), format.delim())
}

/// `merco_<slug>_<year>.<csv|tsv>` inside `dir`.
pub fn write_snapshot(
    dir: &Path,
    kind: RankingKind,
    year: u16,
    snapshot: &Snapshot,
    format: ExportFormat,
    include_headers: bool,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    ensure_directory(dir)?;
    let stem = crate::store::snapshot_file_name(kind, year);
    let stem = stem.rsplit_once('.').map(|(s, _)| s).unwrap_or(&stem);
    let path = dir.join(format!("{stem}.{}", format.ext()));
    fs::write(&path, snapshot_to_string(snapshot, format, include_headers))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Entry;

    #[test]
    fn report_name_is_sanitized() {
        let name = default_report_name("Grupo Éxito S.A.", RankingKind::Companies, &ReportOptions::default());
        assert_eq!(name, "report_merco_Grupo_xito_SA_empresas_2024_2025.md");
    }

    #[test]
    fn blank_token_names_top_listing() {
        let name = default_report_name("  ", RankingKind::Leaders, &ReportOptions::default());
        assert_eq!(name, "report_merco_top_lideres_2024_2025.md");
    }

    #[test]
    fn rows_leave_previous_blank_for_new() {
        let snap = Snapshot::from_entries(vec![Entry {
            rank: 2,
            leader_name: s!("Jane"),
            company_name: s!("Acme"),
            score: 900,
            previous_rank: None,
        }]);
        assert_eq!(snapshot_rows(&snap), vec![vec![s!("2"), s!("Jane"), s!("Acme"), s!("900"), s!()]]);
    }
}
