use crate::shared::entity::{Entity, ID};

/// A scheduled `Event` owned by a `User`.
///
/// Timestamps are UTC millis. `Event`s are created and updated by the
/// surrounding application, this service only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: ID,
    pub user_id: ID,
    pub title: String,
    pub start_ts: i64,
    pub end_ts: i64,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl Event {
    pub fn new(user_id: ID, title: impl Into<String>, start_ts: i64, end_ts: i64) -> Self {
        Self {
            id: Default::default(),
            user_id,
            title: title.into(),
            start_ts,
            end_ts,
            description: None,
            location: None,
        }
    }
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}
