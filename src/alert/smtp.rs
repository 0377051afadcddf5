//! Email alerts over an SMTP relay.

use std::fmt;
use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tokio::time;

use crate::alert::{Alert, Notifier, NotifyError};
use crate::config::NotifyConfig;

/// Sends alerts to a single recipient through a STARTTLS relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
    timeout: Duration,
}

impl SmtpNotifier {
    pub fn from_config(config: &NotifyConfig) -> Result<Self, NotifyError> {
        let from: Mailbox = config.from.parse()?;
        let to: Mailbox = config.to.parse()?;
        let timeout = Duration::from_secs(config.timeout_secs.max(1));

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .timeout(Some(timeout));

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            from,
            to,
            timeout,
        })
    }

    pub fn build_message(&self, alert: &Alert) -> Result<Message, NotifyError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(alert.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(alert.body.clone())?;
        Ok(message)
    }
}

impl fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpNotifier")
            .field("from", &self.from.to_string())
            .field("to", &self.to.to_string())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Notifier for SmtpNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        let message = self.build_message(alert)?;

        match time::timeout(self.timeout, self.transport.send(message)).await {
            Ok(Ok(response)) => {
                tracing::info!(to = %self.to, code = %response.code(), "Alert email sent");
                Ok(())
            }
            Ok(Err(e)) => Err(NotifyError::Transport(e)),
            Err(_) => Err(NotifyError::Timeout(self.timeout.as_secs())),
        }
    }
}
