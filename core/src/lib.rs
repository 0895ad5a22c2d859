pub mod database;
pub mod error;
pub mod executor;
pub mod handler;
pub mod model;
pub mod score;
pub mod types;

use crate::error::{ErrorKind, JudgeError};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JudgeApiError {
    #[error("Invalid request body: {0}")]
    JsonPayload(String),

    #[error(transparent)]
    JudgeError(#[from] JudgeError),
}

impl actix_web::error::ResponseError for JudgeApiError {
    fn error_response(&self) -> HttpResponse {
        tracing::error!("API error: {:?}", self);
        let json_error = json!({
            "error": self.to_string(),
        });

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(json_error)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            JudgeApiError::JsonPayload(_) => StatusCode::BAD_REQUEST,
            JudgeApiError::JudgeError(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
                ErrorKind::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
                ErrorKind::NoValidScore | ErrorKind::Internal => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}
