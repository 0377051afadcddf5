//! Camera probing subsystem.
//!
//! # Data Flow
//! ```text
//! Each cycle:
//!     ping.rs (one ICMP echo)        → reachable?
//!       if reachable:
//!         feed.rs (GET snapshot)     → feed_ok
//!         ping.rs + latency.rs       → latency_ms
//!     → ProbeResult (normalized, immutable)
//! ```
//!
//! # Design Decisions
//! - Every probe is total: errors become `false` / `None`
//! - Feed and latency are skipped when the host is unreachable
//! - Error detail is logged here and never reaches the classifier

pub mod feed;
pub mod latency;
pub mod ping;

use std::future::Future;

use crate::config::MonitorConfig;
use feed::FeedProbe;
use ping::PingProbe;

/// Normalized result of one probe cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    pub reachable: bool,
    pub feed_ok: bool,
    pub latency_ms: Option<u32>,
}

impl ProbeResult {
    /// Result for a host that did not answer.
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            feed_ok: false,
            latency_ms: None,
        }
    }

    pub fn reachable(feed_ok: bool, latency_ms: Option<u32>) -> Self {
        Self {
            reachable: true,
            feed_ok,
            latency_ms,
        }
    }

    /// A cycle fails when the camera is down, not streaming, or its latency
    /// exceeds the threshold.
    pub fn is_failure(&self, latency_threshold_ms: u32) -> bool {
        !self.reachable
            || !self.feed_ok
            || self.latency_ms.is_some_and(|ms| ms > latency_threshold_ms)
    }
}

/// The three checks run against the camera each cycle.
pub trait Prober {
    fn check_reachable(&self, address: &str) -> impl Future<Output = bool> + Send;

    fn check_feed(&self, address: &str) -> impl Future<Output = bool> + Send;

    fn measure_latency(&self, address: &str) -> impl Future<Output = Option<u32>> + Send;
}

/// Run one probe cycle, skipping feed and latency when unreachable.
pub async fn probe<P: Prober>(prober: &P, address: &str) -> ProbeResult {
    if !prober.check_reachable(address).await {
        return ProbeResult::unreachable();
    }

    let feed_ok = prober.check_feed(address).await;
    let latency_ms = prober.measure_latency(address).await;

    ProbeResult::reachable(feed_ok, latency_ms)
}

/// Production prober: system `ping` plus an HTTP snapshot fetch.
#[derive(Debug, Clone)]
pub struct CameraProber {
    ping: PingProbe,
    feed: FeedProbe,
}

impl CameraProber {
    pub fn new(ping: PingProbe, feed: FeedProbe) -> Self {
        Self { ping, feed }
    }

    pub fn from_config(config: &MonitorConfig) -> Result<Self, reqwest::Error> {
        let ping = PingProbe::new(config.probe.ping_timeout());
        let feed = FeedProbe::new(
            config.target.feed_port,
            config.target.feed_path.clone(),
            config.probe.feed_timeout(),
        )?;
        Ok(Self::new(ping, feed))
    }
}

impl Prober for CameraProber {
    async fn check_reachable(&self, address: &str) -> bool {
        self.ping
            .run(address)
            .await
            .is_some_and(|reply| reply.success)
    }

    async fn check_feed(&self, address: &str) -> bool {
        self.feed.check(address).await
    }

    async fn measure_latency(&self, address: &str) -> Option<u32> {
        let latency = self.ping.run(address).await?.latency_ms();
        if latency.is_none() {
            tracing::debug!(address = %address, "No round-trip time in ping output");
        }
        latency
    }
}
