//! Monitoring loop for a single camera.
//!
//! # Data Flow
//! ```text
//! per cycle:
//!     probe → history → classifier → cycle log
//!                                  → escalation → notifier (when due)
//!     sleep(interval) or shutdown
//! ```
//!
//! # Design Decisions
//! - Strictly sequential; one task owns all state, no locking
//! - Log and alert failures are counted and logged, never fatal
//! - Shutdown is honoured between cycles, never mid-cycle

pub mod cycle;
pub mod runner;

pub use cycle::CycleReport;
pub use runner::{Monitor, MonitorSummary};
