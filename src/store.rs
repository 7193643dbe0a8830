// src/store.rs
//
// Locating and reading ranking page dumps on disk.
// Layout: <data_dir>/merco_<slug>_<year>.txt, e.g. data/merco_lideres_2025.txt

use std::{error::Error, fs, io, path::{Path, PathBuf}};

use crate::config::consts::{DATA_EXT, FILE_PREFIX};
use crate::config::options::{RankingKind, ReportOptions};
use crate::data::Snapshot;
use crate::specs::ranking;

pub fn snapshot_file_name(kind: RankingKind, year: u16) -> String {
    format!("{}_{}_{}.{}", FILE_PREFIX, kind.slug(), year, DATA_EXT)
}

pub fn snapshot_path(dir: &Path, kind: RankingKind, year: u16) -> PathBuf {
    dir.join(snapshot_file_name(kind, year))
}

/// Read and parse one page dump.
pub fn load_file(path: &Path) -> Result<Snapshot, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    // Editors on Windows like to prepend a BOM.
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let snap = ranking::extract(text);
    logf!("Load: {} → {} entries", path.display(), snap.len());
    Ok(snap)
}

/// `Ok(None)` when the year's file simply isn't there.
pub fn load_snapshot(dir: &Path, kind: RankingKind, year: u16) -> Result<Option<Snapshot>, Box<dyn Error>> {
    let path = snapshot_path(dir, kind, year);
    match fs::metadata(&path) {
        Ok(m) if m.is_file() => load_file(&path).map(Some),
        Ok(_) => Err(format!("Not a file: {}", path.display()).into()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logd!("Load: missing {}", path.display());
            Ok(None)
        }
        Err(e) => Err(format!("Cannot open {}: {}", path.display(), e).into()),
    }
}

/// Current and previous year of one ranking kind.
#[derive(Clone, Debug, Default)]
pub struct SnapshotPair {
    pub current: Option<Snapshot>,
    pub previous: Option<Snapshot>,
}

pub fn load_pair(dir: &Path, kind: RankingKind, opts: &ReportOptions) -> Result<SnapshotPair, Box<dyn Error>> {
    Ok(SnapshotPair {
        current: load_snapshot(dir, kind, opts.current_year)?,
        previous: load_snapshot(dir, kind, opts.previous_year)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_layout() {
        assert_eq!(snapshot_file_name(RankingKind::Leaders, 2025), "merco_lideres_2025.txt");
        let p = snapshot_path(Path::new("data"), RankingKind::Talent, 2024);
        assert_eq!(p, Path::new("data").join("merco_talento_2024.txt"));
    }
}
