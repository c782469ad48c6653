//! Outbound email delivery for applicant notifications.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

pub const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("email request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("email provider returned {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sink for outbound email.
pub trait Notifier: Send + Sync {
    fn send(&self, message: &EmailMessage) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Delivers email through the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendNotifier {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl ResendNotifier {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: RESEND_EMAILS_URL.to_string(),
        })
    }

    /// Point the notifier at another Resend-compatible endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Notifier for ResendNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            recipients = message.to.len(),
            subject = %message.subject,
            "email accepted by provider"
        );
        Ok(())
    }
}

/// Records messages in the log instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        info!(
            from = %message.from,
            to = ?message.to,
            subject = %message.subject,
            "email delivery disabled; message logged only"
        );
        Ok(())
    }
}

/// Notifier chosen at startup from configuration.
#[derive(Debug, Clone)]
pub enum MailTransport {
    Resend(ResendNotifier),
    Log(LogNotifier),
}

impl MailTransport {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resend(_) => "resend",
            Self::Log(_) => "log",
        }
    }
}

impl Notifier for MailTransport {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        match self {
            Self::Resend(notifier) => notifier.send(message).await,
            Self::Log(notifier) => notifier.send(message).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> EmailMessage {
        EmailMessage {
            from: "Alusive <noreply@example.org>".to_string(),
            to: vec!["amina@example.com".to_string()],
            subject: "Status of your Uploaded Document".to_string(),
            html: "Dear Amina".to_string(),
        }
    }

    #[test]
    fn message_serializes_with_provider_field_names() {
        let value = serde_json::to_value(message()).expect("serializes");
        assert_eq!(value["from"], "Alusive <noreply@example.org>");
        assert_eq!(value["to"][0], "amina@example.com");
        assert_eq!(value["html"], "Dear Amina");
    }

    #[tokio::test]
    async fn log_transport_always_succeeds() {
        let transport = MailTransport::Log(LogNotifier);
        assert_eq!(transport.name(), "log");
        transport.send(&message()).await.expect("logged");
    }

    #[test]
    fn resend_notifier_defaults_to_public_endpoint() {
        let notifier =
            ResendNotifier::new("re_test", Duration::from_secs(5)).expect("client builds");
        assert_eq!(notifier.endpoint(), RESEND_EMAILS_URL);

        let custom = notifier.with_endpoint("http://127.0.0.1:9/emails");
        assert_eq!(custom.endpoint(), "http://127.0.0.1:9/emails");
    }
}
