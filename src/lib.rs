//! Single-camera health monitor library.

pub mod alert;
pub mod config;
pub mod health;
pub mod lifecycle;
pub mod monitor;
pub mod observability;
pub mod probe;

pub use config::MonitorConfig;
pub use health::Status;
pub use lifecycle::Shutdown;
pub use monitor::{CycleReport, Monitor, MonitorSummary};
