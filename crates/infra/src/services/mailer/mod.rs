mod inmemory;
mod mailgun_api;

pub use inmemory::InMemoryMailer;
pub use mailgun_api::MailgunMailer;

#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Transactional email sender
#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    /// Errors carry the provider's explanation of why the email was rejected
    async fn send(&self, email: &Email) -> anyhow::Result<()>;
}
