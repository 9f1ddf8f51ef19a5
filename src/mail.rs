use std::future::Future;
use std::sync::OnceLock;

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::contact::ContactMessage;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

static MAIL_CONFIG: OnceLock<MailConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl MailConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn from_build_env() -> Option<Self> {
        let config = Self::new(
            option_env!("PORTFOLIO_EMAIL_SERVICE_ID")?,
            option_env!("PORTFOLIO_EMAIL_TEMPLATE_ID")?,
            option_env!("PORTFOLIO_EMAIL_PUBLIC_KEY")?,
        );
        Some(match option_env!("PORTFOLIO_EMAIL_ENDPOINT") {
            Some(endpoint) => config.with_endpoint(endpoint),
            None => config,
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    #[error("mail delivery is already configured")]
    AlreadyInitialized,
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("mail delivery is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("delivery rejected with {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

pub trait Delivery {
    fn deliver(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), DeliveryError>>;
}

// Only the first call wins.
pub fn init(config: MailConfig) -> Result<(), MailError> {
    let service = config.service_id.clone();
    MAIL_CONFIG
        .set(config)
        .map_err(|_| MailError::AlreadyInitialized)?;
    log::info!("mail delivery configured for service {service}");
    Ok(())
}

pub fn config() -> Option<&'static MailConfig> {
    MAIL_CONFIG.get()
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

#[derive(Debug, Clone)]
pub struct EmailJs {
    client: reqwest::Client,
    config: MailConfig,
}

impl EmailJs {
    pub fn new(config: MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn request<'a>(&'a self, message: &'a ContactMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        }
    }
}

impl Delivery for EmailJs {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected { status, body });
        }
        log::debug!("contact message from {} delivered", message.from_email);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredMailer;

impl Delivery for ConfiguredMailer {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let config = config().ok_or(DeliveryError::NotConfigured)?;
        EmailJs::new(config.clone()).deliver(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_request_payload_shape() {
        let mailer = EmailJs::new(MailConfig::new("svc", "tmpl", "pk"));
        let message = message();
        let json = serde_json::to_value(mailer.request(&message)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tmpl",
                "user_id": "pk",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello there",
                }
            })
        );
    }

    #[test]
    fn test_config_endpoint_override() {
        let config = MailConfig::new("svc", "tmpl", "pk");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        let config = config.with_endpoint("http://localhost:9000/send");
        assert_eq!(config.endpoint, "http://localhost:9000/send");
    }

    #[test]
    fn test_init_only_once() {
        // the global is shared by every test in this binary; only this test sets it
        assert_eq!(init(MailConfig::new("svc", "tmpl", "pk")), Ok(()));
        assert_eq!(
            init(MailConfig::new("other", "tmpl", "pk")),
            Err(MailError::AlreadyInitialized)
        );
        assert_eq!(config().map(|c| c.service_id.as_str()), Some("svc"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let mailer =
            EmailJs::new(MailConfig::new("svc", "tmpl", "pk").with_endpoint("http://127.0.0.1:1/"));
        let res = mailer.deliver(&message()).await;
        assert!(matches!(res, Err(DeliveryError::Request(_))));
    }
}
