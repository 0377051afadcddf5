//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the camera monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Camera being watched.
    pub target: TargetConfig,

    /// Probe timeouts and thresholds.
    pub probe: ProbeConfig,

    /// Cycle count and pacing.
    pub schedule: ScheduleConfig,

    /// Sliding window settings.
    pub history: HistoryConfig,

    /// Alert escalation settings.
    pub escalation: EscalationConfig,

    /// Cycle log files and diagnostic level.
    pub logging: LoggingConfig,

    /// Email alert settings.
    pub notify: NotifyConfig,
}

/// Target camera configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Host name or IP address of the camera.
    pub address: String,

    /// Port serving the snapshot endpoint.
    pub feed_port: u16,

    /// Path of the snapshot endpoint (e.g., "/shot.jpg").
    pub feed_path: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            address: "192.168.192.65".to_string(),
            feed_port: 8080,
            feed_path: "/shot.jpg".to_string(),
        }
    }
}

/// Probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// How long a single ping may wait for a reply, in seconds.
    pub ping_timeout_secs: u64,

    /// Feed request timeout in seconds (at most 5).
    pub feed_timeout_secs: u64,

    /// Latency above this value counts as a failure.
    pub latency_threshold_ms: u32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ping_timeout_secs: 2,
            feed_timeout_secs: 5,
            latency_threshold_ms: 200,
        }
    }
}

impl ProbeConfig {
    pub fn ping_timeout(&self) -> Duration {
        Duration::from_secs(self.ping_timeout_secs)
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_secs)
    }
}

/// Schedule configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Number of cycles to run. `None` or 0 runs until interrupted.
    pub iterations: Option<u32>,

    /// Delay between the end of one cycle and the next probe, in seconds.
    pub interval_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            iterations: Some(10),
            interval_secs: 5,
        }
    }
}

impl ScheduleConfig {
    /// Cycle limit, with 0 normalized to "unbounded".
    pub fn cycle_limit(&self) -> Option<u64> {
        self.iterations.filter(|n| *n > 0).map(u64::from)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// History window configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of recent samples retained.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: 3 }
    }
}

/// Escalation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EscalationConfig {
    /// Failing cycles required before an alert is sent.
    pub threshold: u32,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self { threshold: 5 }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory holding both cycle log files.
    pub directory: PathBuf,

    /// File receiving one line per cycle.
    pub health_log: String,

    /// File receiving one line per failing cycle.
    pub failure_log: String,

    /// Diagnostic log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            health_log: "camera_health_log.txt".to_string(),
            failure_log: "camera_failure_log.txt".to_string(),
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn health_log_path(&self) -> PathBuf {
        self.directory.join(&self.health_log)
    }

    pub fn failure_log_path(&self) -> PathBuf {
        self.directory.join(&self.failure_log)
    }
}

/// Email alert configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Send alerts by email. When false, alerts are only logged.
    pub enabled: bool,

    /// SMTP relay host (STARTTLS).
    pub smtp_host: String,

    /// SMTP relay port.
    pub smtp_port: u16,

    /// SMTP login. Empty disables authentication.
    pub username: String,

    /// SMTP password. Overridden by `CAMERA_WATCH_SMTP_PASSWORD`.
    pub password: String,

    /// Sender mailbox.
    pub from: String,

    /// Recipient mailbox.
    pub to: String,

    /// Upper bound on a single send, in seconds.
    pub timeout_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from: String::new(),
            to: String::new(),
            timeout_secs: 30,
        }
    }
}
