use serde::{Deserialize, Serialize};

/// Body of every unsuccessful response
#[derive(Debug, Deserialize, Serialize)]
pub struct APIErrorResponse {
    pub error: String,
}

impl APIErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
