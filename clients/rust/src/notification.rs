use crate::{APIResponse, BaseClient};
use event_notifier_api_structs::*;
use reqwest::{header::HeaderMap, StatusCode};
use std::sync::Arc;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

/// CORS headers returned for a preflight request
#[derive(Debug, Clone)]
pub struct PreflightOutput {
    pub allow_origin: Option<String>,
    pub allow_headers: Option<String>,
}

impl PreflightOutput {
    fn new(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };
        Self {
            allow_origin: header("access-control-allow-origin"),
            allow_headers: header("access-control-allow-headers"),
        }
    }
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Triggers a reminder run right away
    pub async fn dispatch(&self) -> APIResponse<dispatch_reminders::APIResponse> {
        self.base
            .post("notifications/dispatch", StatusCode::OK)
            .await
    }

    pub async fn preflight(&self) -> APIResponse<PreflightOutput> {
        self.base
            .options("notifications/dispatch", StatusCode::OK)
            .await
            .map(|headers| PreflightOutput::new(&headers))
    }
}
