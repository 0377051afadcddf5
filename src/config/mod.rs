//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → CLI flags patch target/schedule before startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the monitor starts
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{
    EscalationConfig, HistoryConfig, LoggingConfig, MonitorConfig, NotifyConfig, ProbeConfig,
    ScheduleConfig, TargetConfig,
};
pub use validation::{validate_config, ValidationError};
