use super::{Email, IMailer};
use std::sync::{Mutex, MutexGuard};

/// Keeps every email instead of delivering it
pub struct InMemoryMailer {
    outbox: Mutex<Vec<Email>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self {
            outbox: Mutex::new(Vec::new()),
        }
    }

    fn outbox(&self) -> MutexGuard<'_, Vec<Email>> {
        self.outbox.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn sent(&self) -> Vec<Email> {
        self.outbox().clone()
    }
}

#[async_trait::async_trait]
impl IMailer for InMemoryMailer {
    async fn send(&self, email: &Email) -> anyhow::Result<()> {
        self.outbox().push(email.clone());
        Ok(())
    }
}
