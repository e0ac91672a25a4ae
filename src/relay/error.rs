use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

pub const INVALID_ID_BODY: &str = "Invalid ID";
pub const BAD_REQUEST_BODY: &str = "Bad Request";

#[derive(Debug)]
pub enum RelayError {
    /// Length check failed.
    InvalidId,
    /// The POST body could not be parsed.
    BadRequest(String),
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        RelayError::BadRequest(e.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::InvalidId => (StatusCode::BAD_REQUEST, INVALID_ID_BODY).into_response(),
            RelayError::BadRequest(detail) => {
                warn!("Error: {}", detail);
                (StatusCode::BAD_REQUEST, BAD_REQUEST_BODY).into_response()
            }
        }
    }
}
