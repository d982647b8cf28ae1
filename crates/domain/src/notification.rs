use crate::{event::Event, notification_window::NotificationWindow, shared::entity::ID};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Which boundary of an `Event` triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventEdge {
    Start,
    End,
}

impl EventEdge {
    pub fn timestamp(&self, event: &Event) -> i64 {
        match self {
            Self::Start => event.start_ts,
            Self::End => event.end_ts,
        }
    }

    /// Verb used when telling the owner what is about to happen
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Start => "starting",
            Self::End => "ending",
        }
    }
}

impl Display for EventEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// An `Event` whose `edge` falls inside the current `NotificationWindow`
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationTask {
    pub event: Event,
    pub edge: EventEdge,
}

/// Builds the ordered list of `NotificationTask`s for a run.
///
/// All start tasks come first, then all end tasks, each group in the order the
/// store returned them. Events whose boundary is outside of the `window` are dropped.
pub fn create_notification_tasks(
    window: &NotificationWindow,
    starting: Vec<Event>,
    ending: Vec<Event>,
) -> Vec<NotificationTask> {
    let tag = |events: Vec<Event>, edge: EventEdge| {
        events
            .into_iter()
            .filter(move |e| window.contains(edge.timestamp(e)))
            .map(move |event| NotificationTask { event, edge })
    };

    tag(starting, EventEdge::Start)
        .chain(tag(ending, EventEdge::End))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    Sent,
    Failed,
}

/// Outcome of a single attempted `NotificationTask`
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResult {
    pub event_id: ID,
    pub status: DispatchStatus,
    pub recipient_email: Option<String>,
    pub edge: EventEdge,
    pub error: Option<String>,
}

impl DispatchResult {
    pub fn sent(task: &NotificationTask, recipient_email: &str) -> Self {
        Self {
            event_id: task.event.id.clone(),
            status: DispatchStatus::Sent,
            recipient_email: Some(recipient_email.to_string()),
            edge: task.edge,
            error: None,
        }
    }

    pub fn failed(task: &NotificationTask, recipient_email: &str, error: String) -> Self {
        Self {
            event_id: task.event.id.clone(),
            status: DispatchStatus::Failed,
            recipient_email: Some(recipient_email.to_string()),
            edge: task.edge,
            error: Some(error),
        }
    }
}
