mod base;
mod notification;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use notification::NotificationClient;
pub use notification::PreflightOutput;
use status::StatusClient;
use std::sync::Arc;

pub use event_notifier_api_structs::dtos::DispatchResultDTO as DispatchResult;
pub use event_notifier_domain::{DispatchStatus, EventEdge, ID};

/// Event Notifier Server SDK
///
/// The SDK contains methods for interacting with the Event Notifier server
/// API.
#[derive(Clone)]
pub struct NotifierSDK {
    pub notification: NotificationClient,
    pub status: StatusClient,
}

impl NotifierSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let notification = NotificationClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            notification,
            status,
        }
    }
}
