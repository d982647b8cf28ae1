use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use event_notifier_domain::{Event, NotificationWindow};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Seeds the store, events are otherwise written by the main application
    pub fn insert(&self, e: &Event) {
        insert(e, &self.events);
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn find_by_start_time(&self, window: &NotificationWindow) -> anyhow::Result<Vec<Event>> {
        Ok(find_by(&self.events, |e| window.contains(e.start_ts)))
    }

    async fn find_by_end_time(&self, window: &NotificationWindow) -> anyhow::Result<Vec<Event>> {
        Ok(find_by(&self.events, |e| window.contains(e.end_ts)))
    }
}
