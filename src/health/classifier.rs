//! Rule-based camera status classification.
//!
//! # Rules (first match wins)
//! ```text
//! 1. not reachable                          → PowerFailure
//! 2. feed not ok                            → NotStreaming
//! 3. latest latency > threshold             → HighLatency
//! 4. last 3 latencies present, < threshold  → Operational
//! 5. anything else                          → Intermittent
//! ```
//!
//! Rule order is severity order: connectivity, feed, network quality,
//! stability.

use std::fmt;

/// Latency samples consulted by the stability rule.
pub const STABILITY_SAMPLES: usize = 3;

/// Coarse camera health status, recomputed every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    PowerFailure,
    NotStreaming,
    HighLatency,
    Operational,
    Intermittent,
}

impl Status {
    /// Human-readable label used in logs and alerts.
    pub fn label(&self) -> &'static str {
        match self {
            Status::PowerFailure => "Power failure or disconnected",
            Status::NotStreaming => "Camera reachable but not streaming",
            Status::HighLatency => "High latency / network congestion",
            Status::Operational => "Operational",
            Status::Intermittent => "Intermittent or unclear issue",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs to one classification.
#[derive(Debug, Clone, Copy)]
pub struct Signals<'a> {
    pub reachable: bool,
    pub feed_ok: bool,
    /// Chronological latency history, most recent last.
    pub latencies: &'a [Option<u32>],
}

type Predicate = fn(&Signals<'_>, u32) -> bool;

const RULES: [(Predicate, Status); 4] = [
    (unreachable, Status::PowerFailure),
    (feed_down, Status::NotStreaming),
    (latest_exceeds, Status::HighLatency),
    (recent_all_below, Status::Operational),
];

fn unreachable(signals: &Signals<'_>, _threshold_ms: u32) -> bool {
    !signals.reachable
}

fn feed_down(signals: &Signals<'_>, _threshold_ms: u32) -> bool {
    !signals.feed_ok
}

fn latest_exceeds(signals: &Signals<'_>, threshold_ms: u32) -> bool {
    matches!(signals.latencies.last(), Some(Some(ms)) if *ms > threshold_ms)
}

fn recent_all_below(signals: &Signals<'_>, threshold_ms: u32) -> bool {
    let skip = signals.latencies.len().saturating_sub(STABILITY_SAMPLES);
    signals.latencies[skip..]
        .iter()
        .all(|lat| lat.is_some_and(|ms| ms < threshold_ms))
}

/// Stateless classifier parameterized by the latency threshold.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    latency_threshold_ms: u32,
}

impl Classifier {
    pub fn new(latency_threshold_ms: u32) -> Self {
        Self { latency_threshold_ms }
    }

    pub fn latency_threshold_ms(&self) -> u32 {
        self.latency_threshold_ms
    }

    pub fn classify(&self, signals: &Signals<'_>) -> Status {
        RULES
            .iter()
            .find(|(rule, _)| rule(signals, self.latency_threshold_ms))
            .map(|(_, status)| *status)
            .unwrap_or(Status::Intermittent)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(200)
    }
}
