use actix_web::{http::StatusCode, HttpResponse};
use event_notifier_api_structs::APIErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Internal server error. Error message: `{0}`")]
    InternalError(String),
    #[error("The service is not configured correctly. Error message: `{0}`")]
    Misconfigured(String),
}

impl actix_web::error::ResponseError for NotifierError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Misconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(APIErrorResponse::new(self.to_string()))
    }
}
