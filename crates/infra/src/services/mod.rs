mod mailer;

pub use mailer::{Email, IMailer, InMemoryMailer, MailgunMailer};
