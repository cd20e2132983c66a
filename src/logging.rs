//! Log setup
//!
//! The TUI owns the terminal, so log output goes to `penny.log` in the base
//! directory instead of stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{PennyPaths, Settings};
use crate::error::{PennyError, PennyResult};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "PENNY_LOG";

/// Build the filter from `PENNY_LOG`, falling back to the configured level
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global subscriber, appending to the log file
pub fn init(paths: &PennyPaths, settings: &Settings) -> PennyResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| PennyError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| PennyError::Config(format!("Failed to initialize logging: {}", e)))
}
