//! Append-only cycle log files.
//!
//! # Files
//! - health log: one INFO line per cycle
//! - failure log: one WARN line per failing cycle
//!
//! # Line Format
//! ```text
//! 2026-10-15 09:30:00.123 - INFO - 10.0.0.7 - Ping: true - Feed: true - Latency: 14 ms - Operational
//! 2026-10-15 09:30:05.456 - WARN - 10.0.0.7 - FAILURE - Ping: false - Feed: false - Latency: n/a - Power failure or disconnected
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::config::LoggingConfig;
use crate::monitor::CycleReport;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Errors raised by a cycle log sink.
#[derive(Debug, Error)]
pub enum CycleLogError {
    #[error("Cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Write failed: {0}")]
    Io(#[from] io::Error),
}

/// Sink receiving every cycle's report.
pub trait CycleLog {
    fn record(&mut self, report: &CycleReport) -> Result<(), CycleLogError>;
}

/// Health and failure log files.
#[derive(Debug)]
pub struct FileCycleLog {
    health: File,
    failure: File,
}

impl FileCycleLog {
    /// Open both files in append mode, creating them and their directory
    /// when missing.
    pub fn open(config: &LoggingConfig) -> Result<Self, CycleLogError> {
        fs::create_dir_all(&config.directory).map_err(|source| CycleLogError::Open {
            path: config.directory.clone(),
            source,
        })?;

        Ok(Self {
            health: open_append(&config.health_log_path())?,
            failure: open_append(&config.failure_log_path())?,
        })
    }
}

fn open_append(path: &Path) -> Result<File, CycleLogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| CycleLogError::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub fn health_line(timestamp: &str, report: &CycleReport) -> String {
    format!("{} - INFO - {}", timestamp, report)
}

pub fn failure_line(timestamp: &str, report: &CycleReport) -> String {
    format!(
        "{} - WARN - {} - FAILURE - Ping: {} - Feed: {} - Latency: {} - {}",
        timestamp,
        report.address,
        report.probe.reachable,
        report.probe.feed_ok,
        report.latency_display(),
        report.status
    )
}

impl CycleLog for FileCycleLog {
    fn record(&mut self, report: &CycleReport) -> Result<(), CycleLogError> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        writeln!(self.health, "{}", health_line(&timestamp, report))?;

        if report.failed {
            writeln!(self.failure, "{}", failure_line(&timestamp, report))?;
        }

        Ok(())
    }
}
