//! Camera health evaluation.
//!
//! # Data Flow
//! ```text
//! ProbeResult
//!     → history.rs (latency + reachability windows, capacity 3)
//!     → classifier.rs (ordered rules → Status)
//!     → escalation.rs (failing-cycle counter → alert?)
//! ```
//!
//! # Design Decisions
//! - Classification is a pure function of the current result and history
//! - Escalation is the only state that outlives a cycle besides history
//! - No I/O in this module

pub mod classifier;
pub mod escalation;
pub mod history;

pub use classifier::{Classifier, Signals, Status};
pub use escalation::EscalationTracker;
pub use history::{HistoryWindow, ProbeHistory};
