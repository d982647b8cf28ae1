mod inmemory;
mod postgres;

use event_notifier_domain::{Event, NotificationWindow};
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    /// `Event`s with `start_ts` inside of the inclusive `window`
    async fn find_by_start_time(&self, window: &NotificationWindow) -> anyhow::Result<Vec<Event>>;
    /// `Event`s with `end_ts` inside of the inclusive `window`
    async fn find_by_end_time(&self, window: &NotificationWindow) -> anyhow::Result<Vec<Event>>;
}
