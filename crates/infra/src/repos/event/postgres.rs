use super::IEventRepo;
use crate::repos::shared::timestamp::{from_datetime, to_datetime};
use chrono::{DateTime, Utc};
use event_notifier_domain::{Event, NotificationWindow};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    user_uid: Uuid,
    title: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    description: Option<String>,
    location: Option<String>,
}

impl From<EventRaw> for Event {
    fn from(e: EventRaw) -> Self {
        Self {
            id: e.event_uid.into(),
            user_id: e.user_uid.into(),
            title: e.title,
            start_ts: from_datetime(&e.start_time),
            end_ts: from_datetime(&e.end_time),
            description: e.description,
            location: e.location,
        }
    }
}

impl PostgresEventRepo {
    /// `column` is one of the two fixed time columns, never user input
    async fn find_by_time_column(
        &self,
        column: &str,
        window: &NotificationWindow,
    ) -> anyhow::Result<Vec<Event>> {
        let query = format!(
            r#"
            SELECT * FROM events AS e
            WHERE e.{column} >= $1 AND e.{column} <= $2
            ORDER BY e.{column}, e.event_uid
            "#,
            column = column
        );
        let events = sqlx::query_as::<_, EventRaw>(&query)
            .bind(to_datetime(window.start())?)
            .bind(to_datetime(window.end())?)
            .fetch_all(&self.pool)
            .await?;
        Ok(events.into_iter().map(Event::from).collect())
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn find_by_start_time(&self, window: &NotificationWindow) -> anyhow::Result<Vec<Event>> {
        self.find_by_time_column("start_time", window).await
    }

    async fn find_by_end_time(&self, window: &NotificationWindow) -> anyhow::Result<Vec<Event>> {
        self.find_by_time_column("end_time", window).await
    }
}
