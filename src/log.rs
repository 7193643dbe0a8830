// src/log.rs
//
// Append-only debug log shared by the GUI and CLI front ends.
// Lines look like `[00:00:01.234][INFO] Load: current=2025 entries=100`.
// Use the `logf!` / `logd!` / `loge!` macros rather than calling `write_log`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_DIR, LOG_FILE};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn log_path() -> PathBuf {
    Path::new(LOG_DIR).join(LOG_FILE)
}

/// Create the log directory and pin the elapsed-time origin.
/// Until this runs, log lines are dropped silently.
pub fn init() -> io::Result<PathBuf> {
    fs::create_dir_all(LOG_DIR)?;
    start();
    Ok(log_path())
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Internal logging function
pub fn write_log(level: &str, msg: &str) {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = format!("[{elapsed}][{level}] {msg}\n");

    if let Ok(_guard) = LOG_LOCK.lock() {
        // No create_dir here: a missing directory means logging is off.
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path())
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}
