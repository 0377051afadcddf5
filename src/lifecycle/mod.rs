//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build probes, notifier, cycle log → Monitor
//!
//! Shutdown (shutdown.rs):
//!     Signal received → loop exits after current cycle → summary logged
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{build_monitor, CameraMonitor, StartupError};
