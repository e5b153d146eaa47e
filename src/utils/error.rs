use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("{0}")]
    BadRequestError(String),

    #[error("{0}")]
    NotFoundError(String),

    #[error("Method not allowed")]
    MethodNotAllowedError,

    #[error("Failed to create post")]
    CreateFailedError,

    #[error("{message}")]
    DatabaseError { message: String, detail: String },
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::MethodNotAllowedError => StatusCode::METHOD_NOT_ALLOWED,
            CustomError::CreateFailedError => StatusCode::BAD_REQUEST,
            CustomError::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            // Storage failures carry the raw error text in the body; the
            // detail is also logged where the error is caught.
            CustomError::DatabaseError { message, detail } => json!({
                "message": message,
                "error": detail,
            }),
            CustomError::CreateFailedError => json!({
                "error": self.to_string(),
            }),
            _ => json!({
                "message": self.to_string(),
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
