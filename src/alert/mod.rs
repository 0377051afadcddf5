//! Alert delivery.
//!
//! # Data Flow
//! ```text
//! EscalationTracker fires
//!     → Alert (subject + plain-text body)
//!     → Notifier::notify
//!         smtp.rs  (email via STARTTLS relay)
//!         LogNotifier (WARN diagnostic when email is disabled)
//!     → error logged by the monitor, never propagated
//! ```

pub mod smtp;

use std::future::Future;

use thiserror::Error;

use crate::config::MonitorConfig;
pub use smtp::SmtpNotifier;

/// Errors that can occur while sending an alert.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Sender or recipient is not a valid mailbox.
    #[error("Invalid mailbox: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The email could not be assembled.
    #[error("Message error: {0}")]
    Message(#[from] lettre::error::Error),

    /// Relay connection, TLS, authentication or delivery failed.
    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The send did not complete in time.
    #[error("Send timed out after {0} seconds")]
    Timeout(u64),
}

/// A notification ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub subject: String,
    pub body: String,
}

impl Alert {
    /// Alert raised after `threshold` failing checks of `address`.
    pub fn repeated_failure(address: &str, threshold: u32) -> Self {
        Self {
            subject: format!("Camera {} - Failure Alert", address),
            body: format!(
                "Your camera at {} has failed to respond to {} consecutive checks. Please check the device.",
                address, threshold
            ),
        }
    }
}

/// Sends alerts through some external transport.
pub trait Notifier {
    fn notify(&self, alert: &Alert) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Emits alerts as diagnostics only.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        tracing::warn!(subject = %alert.subject, body = %alert.body, "Alert raised (email disabled)");
        Ok(())
    }
}

/// Notifier chosen at startup from configuration.
#[derive(Debug)]
pub enum AlertNotifier {
    Email(SmtpNotifier),
    Log(LogNotifier),
}

impl AlertNotifier {
    pub fn from_config(config: &MonitorConfig) -> Result<Self, NotifyError> {
        if config.notify.enabled {
            Ok(Self::Email(SmtpNotifier::from_config(&config.notify)?))
        } else {
            Ok(Self::Log(LogNotifier))
        }
    }
}

impl Notifier for AlertNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        match self {
            Self::Email(smtp) => smtp.notify(alert).await,
            Self::Log(log) => log.notify(alert).await,
        }
    }
}
