mod event;
mod shared;
mod user;

use crate::config::ValidCredentials;
pub use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::{str::FromStr, sync::Arc, time::Duration};
pub use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    /// Connections are opened on first use, so this never blocks startup
    pub fn create_postgres(credentials: &ValidCredentials) -> anyhow::Result<Self> {
        let pool = create_pool(credentials)?;
        Ok(Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
        }
    }
}

fn create_pool(credentials: &ValidCredentials) -> anyhow::Result<PgPool> {
    // The service key is the password of the role the notifier connects as
    let options = PgConnectOptions::from_str(&credentials.event_store_url)?
        .password(&credentials.event_store_service_key);

    Ok(PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy_with(options))
}
