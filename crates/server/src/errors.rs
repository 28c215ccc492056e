use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::reservation::errors::ReservationError;
use thiserror::Error;
use tracing::error;

/// JSON error response: `{"error": ..., "code": ..., "detail": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub code: Option<u16>,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, error: error.into(), code: None, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({ "error": self.error });
        if let Some(code) = self.code {
            body["code"] = code.into();
        }
        if let Some(detail) = self.detail {
            body["detail"] = detail.into();
        }
        (self.status, Json(body)).into_response()
    }
}

pub fn status_for(e: &ReservationError) -> StatusCode {
    match e {
        ReservationError::MissingField(_)
        | ReservationError::ClassNotFound
        | ReservationError::ProfessorNotFound
        | ReservationError::InvalidDate
        | ReservationError::InvalidStartTime
        | ReservationError::InvalidEndTime
        | ReservationError::InvalidTimeOrder
        | ReservationError::Validation(_) => StatusCode::BAD_REQUEST,
        ReservationError::Conflict { .. } => StatusCode::CONFLICT,
        ReservationError::NotFound => StatusCode::NOT_FOUND,
        ReservationError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ReservationError> for JsonApiError {
    fn from(e: ReservationError) -> Self {
        let status = status_for(&e);
        if status.is_server_error() {
            error!(code = e.code(), err = %e, "reservation storage failure");
            // storage details stay in the logs
            return Self { status, error: "internal server error".into(), code: Some(e.code()), detail: None };
        }
        Self { status, error: e.to_string(), code: Some(e.code()), detail: None }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid JSON body", Some(rejection.body_text()))
    }
}

/// Ids that are not a valid `i32` cannot name a stored reservation.
impl From<PathRejection> for JsonApiError {
    fn from(_: PathRejection) -> Self {
        ReservationError::NotFound.into()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
