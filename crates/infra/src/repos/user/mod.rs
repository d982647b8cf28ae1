mod inmemory;
mod postgres;

use event_notifier_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    /// Lookup failures are reported as a missing `User`
    async fn find(&self, user_id: &ID) -> Option<User>;
}
