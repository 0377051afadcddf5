//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, thresholds > 0)
//! - Check alert mailboxes when email is enabled
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use lettre::message::Mailbox;
use thiserror::Error;

use crate::config::schema::MonitorConfig;

/// Longest feed request the probe is allowed to make.
pub const MAX_FEED_TIMEOUT_SECS: u64 = 5;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.target.address.trim().is_empty() {
        errors.push(ValidationError::new("target.address", "must not be empty"));
    }
    if !config.target.feed_path.starts_with('/') {
        errors.push(ValidationError::new("target.feed_path", "must start with '/'"));
    }

    if config.probe.ping_timeout_secs == 0 {
        errors.push(ValidationError::new("probe.ping_timeout_secs", "must be greater than 0"));
    }
    if config.probe.feed_timeout_secs == 0 || config.probe.feed_timeout_secs > MAX_FEED_TIMEOUT_SECS {
        errors.push(ValidationError::new(
            "probe.feed_timeout_secs",
            format!("must be between 1 and {}", MAX_FEED_TIMEOUT_SECS),
        ));
    }

    if config.history.capacity == 0 {
        errors.push(ValidationError::new("history.capacity", "must be greater than 0"));
    }
    if config.escalation.threshold == 0 {
        errors.push(ValidationError::new("escalation.threshold", "must be greater than 0"));
    }

    if config.logging.health_log.is_empty() {
        errors.push(ValidationError::new("logging.health_log", "must not be empty"));
    }
    if config.logging.failure_log.is_empty() {
        errors.push(ValidationError::new("logging.failure_log", "must not be empty"));
    }

    if config.notify.enabled {
        let notify = &config.notify;
        if notify.smtp_host.trim().is_empty() {
            errors.push(ValidationError::new("notify.smtp_host", "must not be empty"));
        }
        for (field, value) in [("notify.from", &notify.from), ("notify.to", &notify.to)] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(field, "must not be empty"));
            } else if let Err(e) = value.parse::<Mailbox>() {
                errors.push(ValidationError::new(field, format!("invalid mailbox: {}", e)));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&MonitorConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = MonitorConfig::default();
        config.target.address = "  ".into();
        config.probe.feed_timeout_secs = 30;
        config.escalation.threshold = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["target.address", "probe.feed_timeout_secs", "escalation.threshold"]
        );
    }

    #[test]
    fn test_mailboxes_checked_only_when_enabled() {
        let mut config = MonitorConfig::default();
        config.notify.to = "not a mailbox".into();
        assert!(validate_config(&config).is_ok());

        config.notify.enabled = true;
        config.notify.from = "watch@example.com".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "notify.to");
    }
}
