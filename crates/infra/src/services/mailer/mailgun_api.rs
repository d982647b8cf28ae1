use super::{Email, IMailer};
use crate::config::ValidCredentials;
use anyhow::anyhow;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct MailgunResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Sends emails through the Mailgun messages API
/// https://documentation.mailgun.com/en/latest/api-sending.html
pub struct MailgunMailer {
    client: Client,
    base_url: String,
    api_key: String,
    domain: String,
}

impl MailgunMailer {
    pub fn new(base_url: &str, credentials: &ValidCredentials) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: credentials.mail_api_key.clone(),
            domain: credentials.mail_domain.clone(),
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v3/{}/messages", self.base_url, self.domain)
    }
}

#[async_trait::async_trait]
impl IMailer for MailgunMailer {
    async fn send(&self, email: &Email) -> anyhow::Result<()> {
        let form = [
            ("from", email.from.as_str()),
            ("to", email.to.as_str()),
            ("subject", email.subject.as_str()),
            ("text", email.text.as_str()),
            ("html", email.html.as_str()),
        ];
        let res = match self
            .client
            .post(&self.messages_url())
            .basic_auth("api", Some(&self.api_key))
            .form(&form)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => {
                error!("[Network Error] Mailgun API POST error. Error message: {:?}", e);
                return Err(anyhow::Error::new(e));
            }
        };

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let body = res.text().await.unwrap_or_default();
        let reason = serde_json::from_str::<MailgunResponse>(&body)
            .ok()
            .and_then(|r| r.message)
            .unwrap_or(body);
        error!(
            "[Unexpected Response] Mailgun API POST error. Status: {}. Error message: {}",
            status, reason
        );
        Err(anyhow!("Mailgun responded with {}: {}", status, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> ValidCredentials {
        ValidCredentials {
            event_store_url: "postgres://localhost/notifier".into(),
            event_store_service_key: "service-key".into(),
            mail_api_key: "key-123".into(),
            mail_domain: "mg.example.com".into(),
            mail_from: "reminders@mg.example.com".into(),
        }
    }

    #[test]
    fn it_builds_messages_url_for_domain() {
        let mailer = MailgunMailer::new("https://api.eu.mailgun.net/", &credentials()).unwrap();
        assert_eq!(
            mailer.messages_url(),
            "https://api.eu.mailgun.net/v3/mg.example.com/messages"
        );
    }

    #[tokio::test]
    async fn unreachable_provider_is_reported_as_error() {
        let mailer = MailgunMailer::new("http://127.0.0.1:1", &credentials()).unwrap();
        let email = Email {
            from: "reminders@mg.example.com".into(),
            to: "ada@example.com".into(),
            subject: "Hi".into(),
            text: "Hi".into(),
            html: "<p>Hi</p>".into(),
        };
        assert!(mailer.send(&email).await.is_err());
    }
}
