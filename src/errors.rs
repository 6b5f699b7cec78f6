use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use derive_more::Display;
use serde_json::json;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Invalid address: {}", _0)]
    InvalidAddress(String),

    #[display(fmt = "Missing input: {}", _0)]
    MissingInput(String),

    #[display(fmt = "Upstream error: {}", _0)]
    Upstream(String),

    #[display(fmt = "Internal server error: {}", _0)]
    Internal(String),
}

impl ApiError {
    /// Message sent back to the client, without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            ApiError::InvalidAddress(ref message)
            | ApiError::MissingInput(ref message)
            | ApiError::Upstream(ref message)
            | ApiError::Internal(ref message) => message,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidAddress(_) | ApiError::MissingInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.message()
        }))
    }
}
