use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::lookup::LookupError;

/// JSON error body returned by the API routes.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// An API error paired with the status code it is sent with.
#[derive(Debug)]
pub struct ApiErrorType {
    pub status: StatusCode,
    pub body: ApiError,
}

impl From<(StatusCode, &str, Option<String>)> for ApiErrorType {
    fn from((status, error, context): (StatusCode, &str, Option<String>)) -> Self {
        Self {
            status,
            body: ApiError {
                error: error.to_string(),
                kind: None,
                context,
            },
        }
    }
}

impl From<&LookupError> for ApiErrorType {
    fn from(err: &LookupError) -> Self {
        Self {
            status: status_for(err),
            body: ApiError {
                error: err.to_string(),
                kind: Some(err.kind()),
                context: None,
            },
        }
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// HTTP status used for each lookup failure.
pub fn status_for(err: &LookupError) -> StatusCode {
    match err {
        LookupError::InvalidInput => StatusCode::BAD_REQUEST,
        LookupError::NotFound { .. } => StatusCode::NOT_FOUND,
        LookupError::DataUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    }
}
