use crate::dtos::DispatchResultDTO;
use event_notifier_domain::DispatchResult;
use serde::{Deserialize, Serialize};

pub mod dispatch_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub processed: Vec<DispatchResultDTO>,
    }

    impl APIResponse {
        pub fn new(processed: Vec<DispatchResult>) -> Self {
            Self {
                success: true,
                processed: processed.into_iter().map(DispatchResultDTO::new).collect(),
            }
        }
    }
}
