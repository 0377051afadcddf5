//! Startup orchestration.
//!
//! # Responsibilities
//! - Build probes, notifier and cycle log from validated configuration
//! - Assemble the monitor
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Cycle log files are opened here, so an unwritable log directory stops
//!   the process before the first probe

use thiserror::Error;

use crate::alert::{AlertNotifier, NotifyError};
use crate::config::MonitorConfig;
use crate::monitor::Monitor;
use crate::observability::{CycleLogError, FileCycleLog};
use crate::probe::CameraProber;

/// Errors that stop the monitor from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to configure email alerts: {0}")]
    Notify(#[from] NotifyError),

    #[error("Failed to open cycle log: {0}")]
    CycleLog(#[from] CycleLogError),
}

/// The monitor as wired for production.
pub type CameraMonitor = Monitor<CameraProber, AlertNotifier, FileCycleLog>;

/// Build the production monitor from configuration.
pub fn build_monitor(config: &MonitorConfig) -> Result<CameraMonitor, StartupError> {
    let prober = CameraProber::from_config(config)?;
    let notifier = AlertNotifier::from_config(config)?;
    let log = FileCycleLog::open(&config.logging)?;

    tracing::info!(
        health_log = %config.logging.health_log_path().display(),
        failure_log = %config.logging.failure_log_path().display(),
        email = config.notify.enabled,
        "Monitor components initialized"
    );

    Ok(Monitor::new(config, prober, notifier, log))
}
