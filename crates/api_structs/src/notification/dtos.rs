use event_notifier_domain::{DispatchResult, DispatchStatus, EventEdge, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResultDTO {
    pub event_id: ID,
    pub status: DispatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
    pub edge: EventEdge,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DispatchResultDTO {
    pub fn new(result: DispatchResult) -> Self {
        Self {
            event_id: result.event_id,
            status: result.status,
            recipient_email: result.recipient_email,
            edge: result.edge,
            error: result.error,
        }
    }
}
