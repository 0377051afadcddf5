//! camera-watch
//!
//! Periodically checks one network camera and alerts after repeated failures.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────── MONITOR LOOP ─────────────────────────────┐
//!   │                                                                       │
//!   │  ┌─────────┐   ┌─────────┐   ┌────────────┐   ┌────────────────────┐  │
//!   │  │  probe  │──▶│ history │──▶│ classifier │──▶│ cycle log (2 files)│  │
//!   │  │ping/feed│   │ window  │   │   rules    │   └────────────────────┘  │
//!   │  └─────────┘   └─────────┘   └─────┬──────┘                           │
//!   │                                    ▼                                  │
//!   │                             ┌────────────┐    ┌──────────┐            │
//!   │                             │ escalation │───▶│  alert   │──▶ SMTP    │
//!   │                             └────────────┘    └──────────┘            │
//!   │                                                                       │
//!   │        sleep(interval) ─── or ─── shutdown (Ctrl-C / SIGTERM)         │
//!   └───────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use camera_watch::config::{load_or_default, validate_config, ConfigError, MonitorConfig};
use camera_watch::lifecycle::{build_monitor, signals, Shutdown};
use camera_watch::observability::logging;

#[derive(Parser)]
#[command(name = "camera-watch")]
#[command(about = "Monitor a network camera's reachability, feed and latency", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Camera host or IP address
    #[arg(short, long)]
    address: Option<String>,

    /// Number of cycles to run (0 runs until interrupted)
    #[arg(short = 'n', long)]
    iterations: Option<u32>,

    /// Seconds between cycles
    #[arg(short, long)]
    interval: Option<u64>,

    /// Run a single cycle
    #[arg(long, conflicts_with = "iterations")]
    once: bool,
}

impl Cli {
    fn apply(&self, config: &mut MonitorConfig) {
        if let Some(address) = &self.address {
            config.target.address = address.clone();
        }
        if let Some(iterations) = self.iterations {
            config.schedule.iterations = Some(iterations);
        }
        if self.once {
            config.schedule.iterations = Some(1);
        }
        if let Some(interval) = self.interval {
            config.schedule.interval_secs = interval;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_tracing(&config.logging.level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %config.target.address,
        "camera-watch starting"
    );

    let monitor = build_monitor(&config)?;

    let shutdown = Shutdown::new();
    let monitor_shutdown = shutdown.subscribe();
    let _signals = signals::spawn_signal_listener(shutdown.clone());

    let summary = monitor.run(monitor_shutdown).await;

    tracing::info!(
        cycles = summary.cycles,
        failing_cycles = summary.failing_cycles,
        alerts_sent = summary.alerts_sent,
        alerts_failed = summary.alerts_failed,
        log_errors = summary.log_errors,
        last_status = %summary.last_status.map(|s| s.label()).unwrap_or("none"),
        recent_reachability = ?summary.recent_reachability,
        "Monitoring finished"
    );

    Ok(())
}
