//! The monitoring loop.
//!
//! # Responsibilities
//! - Run probe cycles sequentially with a fixed delay between them
//! - Feed history, classifier and escalation from each result
//! - Record every cycle and dispatch alerts without aborting on failure

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::alert::{Alert, Notifier};
use crate::config::MonitorConfig;
use crate::health::{Classifier, EscalationTracker, ProbeHistory, Signals, Status};
use crate::monitor::CycleReport;
use crate::observability::CycleLog;
use crate::probe::{self, Prober};

/// Latency samples handed to the classifier.
const CLASSIFIER_WINDOW: usize = 3;

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorSummary {
    pub cycles: u64,
    pub failing_cycles: u64,
    pub alerts_sent: u64,
    pub alerts_failed: u64,
    pub log_errors: u64,
    pub last_status: Option<Status>,
    /// Reachability over the most recent cycles, oldest first.
    pub recent_reachability: Vec<bool>,
}

/// Owns all per-process monitoring state for one camera.
#[derive(Debug)]
pub struct Monitor<P, N, L> {
    address: String,
    cycle_limit: Option<u64>,
    interval: Duration,
    prober: P,
    notifier: N,
    log: L,
    history: ProbeHistory,
    classifier: Classifier,
    escalation: EscalationTracker,
    summary: MonitorSummary,
}

impl<P, N, L> Monitor<P, N, L>
where
    P: Prober,
    N: Notifier,
    L: CycleLog,
{
    pub fn new(config: &MonitorConfig, prober: P, notifier: N, log: L) -> Self {
        Self {
            address: config.target.address.clone(),
            cycle_limit: config.schedule.cycle_limit(),
            interval: config.schedule.interval(),
            prober,
            notifier,
            log,
            history: ProbeHistory::new(config.history.capacity),
            classifier: Classifier::new(config.probe.latency_threshold_ms),
            escalation: EscalationTracker::new(config.escalation.threshold),
            summary: MonitorSummary::default(),
        }
    }

    pub fn history(&self) -> &ProbeHistory {
        &self.history
    }

    pub fn escalation(&self) -> &EscalationTracker {
        &self.escalation
    }

    pub fn summary(&self) -> &MonitorSummary {
        &self.summary
    }

    /// Probe, classify, record and escalate once.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let result = probe::probe(&self.prober, &self.address).await;
        self.history.record(&result);

        let latencies: Vec<Option<u32>> = self
            .history
            .latency()
            .tail(CLASSIFIER_WINDOW)
            .copied()
            .collect();
        let status = self.classifier.classify(&Signals {
            reachable: result.reachable,
            feed_ok: result.feed_ok,
            latencies: &latencies,
        });

        let failed = result.is_failure(self.classifier.latency_threshold_ms());
        let alert_due = self.escalation.observe(failed);

        self.summary.cycles += 1;
        let report = CycleReport {
            check: self.summary.cycles,
            address: self.address.clone(),
            probe: result,
            status,
            failed,
            alert_due,
        };

        tracing::info!(
            check = report.check,
            reachable = result.reachable,
            feed_ok = result.feed_ok,
            latency = %report.latency_display(),
            status = %status,
            "Cycle complete"
        );

        if let Err(e) = self.log.record(&report) {
            self.summary.log_errors += 1;
            tracing::error!(check = report.check, error = %e, "Failed to write cycle log");
        }

        if failed {
            self.summary.failing_cycles += 1;
            tracing::warn!(
                address = %self.address,
                status = %status,
                pending = self.escalation.consecutive_failures(),
                "Camera check failed"
            );
        }

        if alert_due {
            self.send_alert().await;
        }

        self.summary.last_status = Some(status);
        report
    }

    async fn send_alert(&mut self) {
        let alert = Alert::repeated_failure(&self.address, self.escalation.threshold());
        match self.notifier.notify(&alert).await {
            Ok(()) => {
                self.summary.alerts_sent += 1;
                tracing::info!(address = %self.address, "Failure alert dispatched");
            }
            Err(e) => {
                self.summary.alerts_failed += 1;
                tracing::error!(address = %self.address, error = %e, "Failed to send failure alert");
            }
        }
    }

    /// Run cycles until the limit is reached or shutdown is signalled.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> MonitorSummary {
        tracing::info!(
            address = %self.address,
            interval_secs = self.interval.as_secs(),
            cycles = ?self.cycle_limit,
            threshold = self.escalation.threshold(),
            "Camera monitor starting"
        );

        loop {
            if shutdown_requested(&mut shutdown) {
                tracing::info!("Monitor received shutdown signal, exiting loop");
                break;
            }

            self.run_cycle().await;

            if self.cycle_limit.is_some_and(|limit| self.summary.cycles >= limit) {
                break;
            }

            tokio::select! {
                _ = time::sleep(self.interval) => {}
                _ = shutdown.recv() => {
                    tracing::info!("Monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }

        self.summary.recent_reachability = self.history.reachability().to_vec();
        self.summary
    }
}

/// Cycles are never interrupted; shutdown is checked between them.
fn shutdown_requested(shutdown: &mut broadcast::Receiver<()>) -> bool {
    !matches!(shutdown.try_recv(), Err(broadcast::error::TryRecvError::Empty))
}
