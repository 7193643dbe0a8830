// src/cli.rs
use std::{error::Error, path::PathBuf};

use crate::config::consts::DATA_DIR;
use crate::config::options::{ExportFormat, RankingKind, ReportOptions};
use crate::data::Snapshot;
use crate::{file, report, store};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub kind: RankingKind,
    pub data_dir: PathBuf,
    pub current: Option<PathBuf>,   // explicit files win over data_dir
    pub previous: Option<PathBuf>,
    pub report: ReportOptions,
    pub search: String,             // empty → top listing
    pub out: Option<PathBuf>,
    pub dump: Option<ExportFormat>,
    pub stats: bool,
    pub help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            kind: RankingKind::Leaders,
            data_dir: PathBuf::from(DATA_DIR),
            current: None,
            previous: None,
            report: ReportOptions::default(),
            search: s!(),
            out: None,
            dump: None,
            stats: false,
            help: false,
        }
    }
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "-k" | "--kind" => params.kind = value(&a)?.parse()?,
            "--data-dir" => params.data_dir = PathBuf::from(value(&a)?),
            "--current" => params.current = Some(PathBuf::from(value(&a)?)),
            "--previous" => params.previous = Some(PathBuf::from(value(&a)?)),
            "-s" | "--search" => params.search = value(&a)?,
            "--year" => params.report.current_year = parse_year(&value(&a)?)?,
            "--prev-year" => params.report.previous_year = parse_year(&value(&a)?)?,
            "--top" => {
                let n: usize = value(&a)?.parse()?;
                if n == 0 { return Err("--top must be at least 1".into()); }
                params.report.top_n = n;
            }
            "-o" | "--out" => params.out = Some(PathBuf::from(value(&a)?)),
            "--dump" => params.dump = Some(value(&a)?.parse()?),
            "--stats" => params.stats = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.previous.is_some() && params.current.is_none() {
        return Err("--previous needs --current".into());
    }
    Ok(params)
}

fn parse_year(s: &str) -> Result<u16, Box<dyn Error>> {
    let y: u16 = s.trim().parse()?;
    if !(1900..=9999).contains(&y) {
        return Err(format!("Year out of range: {}", y).into());
    }
    Ok(y)
}

/// Both snapshots per `params`: explicit files if given, else the data dir.
pub fn load(params: &Params) -> Result<(Snapshot, Option<Snapshot>), Box<dyn Error>> {
    let (current, previous) = match &params.current {
        Some(path) => {
            let previous = params.previous.as_deref().map(store::load_file).transpose()?;
            (store::load_file(path)?, previous)
        }
        None => {
            let pair = store::load_pair(&params.data_dir, params.kind, &params.report)?;
            let current = pair.current.ok_or_else(|| {
                format!(
                    "No {} file: {}",
                    params.report.current_year,
                    store::snapshot_path(&params.data_dir, params.kind, params.report.current_year).display()
                )
            })?;
            (current, pair.previous)
        }
    };

    if current.is_empty() {
        return Err(format!("No entries parsed for {}", params.report.current_year).into());
    }
    Ok((current, previous))
}

pub fn run(params: &Params) -> Result<(), Box<dyn Error>> {
    let (current, previous) = load(params)?;

    if params.stats {
        println!("{}: {} entries", params.report.current_year, current.len());
        match &previous {
            Some(p) => println!("{}: {} entries", params.report.previous_year, p.len()),
            None => println!("{}: no data", params.report.previous_year),
        }
    }

    let output = if let Some(fmt) = params.dump {
        file::snapshot_to_string(&current, fmt, true)
    } else {
        logf!("Report: kind={:?} search={:?}", params.kind, params.search);
        report::generate_with(&params.report, &params.search, params.kind.label(), &current, previous.as_ref())
    };

    match &params.out {
        Some(path) => {
            let written = file::write_report(path, &output)?;
            logf!("Export: OK {}", written.display());
            eprintln!("Wrote {}", written.display());
        }
        None if params.stats && params.dump.is_none() && params.search.is_empty() => {}
        None => print!("{output}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_args() {
        let p = parse_args(args(&[])).unwrap();
        assert_eq!(p, Params::default());
    }

    #[test]
    fn parses_full_command_line() {
        let p = parse_args(args(&[
            "--kind", "empresas", "--current", "a.txt", "--previous", "b.txt",
            "-s", "Acme Co", "--year", "2026", "--prev-year", "2025", "--top", "5",
            "-o", "out/r.md",
        ]))
        .unwrap();
        assert_eq!(p.kind, RankingKind::Companies);
        assert_eq!(p.current, Some(PathBuf::from("a.txt")));
        assert_eq!(p.previous, Some(PathBuf::from("b.txt")));
        assert_eq!(p.search, "Acme Co");
        assert_eq!(p.report, ReportOptions { current_year: 2026, previous_year: 2025, top_n: 5 });
        assert_eq!(p.out, Some(PathBuf::from("out/r.md")));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["--kind"])).is_err());
        assert!(parse_args(args(&["--top", "0"])).is_err());
        assert!(parse_args(args(&["--previous", "b.txt"])).is_err());
        assert!(parse_args(args(&["--dump", "xml"])).is_err());
    }
}
