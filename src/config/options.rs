// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub kind: RankingKind,
    pub source: DataSource,
    pub data_dir: PathBuf,
    pub report: ReportOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            kind: RankingKind::Leaders,
            source: DataSource::DataDir,
            data_dir: PathBuf::from(DATA_DIR),
            report: ReportOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Which published ranking a snapshot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RankingKind {
    Leaders,
    Companies,
    Talent,
    Sectors,
}

impl RankingKind {
    pub const ALL: [RankingKind; 4] = [
        RankingKind::Leaders,
        RankingKind::Companies,
        RankingKind::Talent,
        RankingKind::Sectors,
    ];

    /// Name used inside the report ("Merco Leaders 2025").
    pub fn label(&self) -> &'static str {
        match self {
            RankingKind::Leaders => "Leaders",
            RankingKind::Companies => "Companies",
            RankingKind::Talent => "Talent",
            RankingKind::Sectors => "Sectors",
        }
    }

    /// File-name slug, matching the published page names.
    pub fn slug(&self) -> &'static str {
        match self {
            RankingKind::Leaders => "lideres",
            RankingKind::Companies => "empresas",
            RankingKind::Talent => "talento",
            RankingKind::Sectors => "sectores",
        }
    }
}

impl fmt::Display for RankingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RankingKind {
    type Err = String;

    /// Accepts the English label or the file slug, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        RankingKind::ALL
            .into_iter()
            .find(|k| k.label().to_lowercase() == wanted || k.slug() == wanted)
            .ok_or_else(|| format!("Unknown ranking kind: {}", s.trim()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// `<data_dir>/merco_<slug>_<year>.txt`
    DataDir,
    /// Paths typed or dropped by the user.
    Manual,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub current_year: u16,
    pub previous_year: u16,
    /// Rows in the comparative listing when the search finds nothing.
    pub top_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            current_year: CURRENT_YEAR,
            previous_year: PREVIOUS_YEAR,
            top_n: TOP_N,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub dir: PathBuf,
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<file_name>`
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_label_or_slug() {
        assert_eq!("leaders".parse::<RankingKind>(), Ok(RankingKind::Leaders));
        assert_eq!(" EMPRESAS ".parse::<RankingKind>(), Ok(RankingKind::Companies));
        assert!("nope".parse::<RankingKind>().is_err());
    }

    #[test]
    fn defaults_compare_last_two_years() {
        let r = ReportOptions::default();
        assert_eq!((r.previous_year, r.current_year, r.top_n), (2024, 2025, 10));
    }
}
