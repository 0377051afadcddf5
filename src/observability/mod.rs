//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor cycle produces:
//!     → logging.rs (structured diagnostics on stderr/stdout via tracing)
//!     → cycle_log.rs (health log line, failure log line when failing)
//! ```
//!
//! # Design Decisions
//! - Cycle log files are append-only and survive restarts
//! - Opening the files is fatal at startup; write errors are not
//! - Structured fields (address, status, latency) on every diagnostic

pub mod cycle_log;
pub mod logging;

pub use cycle_log::{CycleLog, CycleLogError, FileCycleLog};
