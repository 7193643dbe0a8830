// src/config/consts.rs

// Data files: <DATA_DIR>/<FILE_PREFIX>_<slug>_<year>.txt
pub const DATA_DIR: &str = "data";
pub const FILE_PREFIX: &str = "merco";
pub const DATA_EXT: &str = "txt";

// Log
pub const LOG_DIR: &str = ".ranking";
pub const LOG_FILE: &str = "debug.log";

// Report
pub const CURRENT_YEAR: u16 = 2025;
pub const PREVIOUS_YEAR: u16 = 2024;
pub const TOP_N: usize = 10;
pub const REPORT_PREFIX: &str = "report_merco";
pub const REPORT_EXT: &str = "md";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
