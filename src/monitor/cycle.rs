//! Per-cycle report.

use std::fmt;

use crate::health::Status;
use crate::probe::ProbeResult;

/// Everything known about one completed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// 1-based cycle number.
    pub check: u64,
    pub address: String,
    pub probe: ProbeResult,
    pub status: Status,
    /// Whether this cycle counts toward escalation.
    pub failed: bool,
    /// Whether this cycle triggered an alert.
    pub alert_due: bool,
}

impl CycleReport {
    /// Latency as displayed in logs.
    pub fn latency_display(&self) -> String {
        match self.probe.latency_ms {
            Some(ms) => format!("{} ms", ms),
            None => "n/a".to_string(),
        }
    }
}

/// `{address} - Ping: .. - Feed: .. - Latency: .. - {status}`
impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Ping: {} - Feed: {} - Latency: {} - {}",
            self.address,
            self.probe.reachable,
            self.probe.feed_ok,
            self.latency_display(),
            self.status
        )
    }
}
