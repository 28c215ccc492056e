use thiserror::Error;

use models::errors::ModelError;

/// Business errors for reservation workflows
#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("class not found or class registry unavailable")]
    ClassNotFound,
    #[error("professor not found or professor registry unavailable")]
    ProfessorNotFound,
    #[error("invalid date format, use YYYY-MM-DD")]
    InvalidDate,
    #[error("invalid start_time format, use HH:MM")]
    InvalidStartTime,
    #[error("invalid end_time format, use HH:MM")]
    InvalidEndTime,
    #[error("start_time must be before end_time")]
    InvalidTimeOrder,
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("schedule conflict: room {room} is already reserved during this period")]
    Conflict { room: String, conflicting_id: i32 },
    #[error("reservation not found")]
    NotFound,
    #[error("repository error: {0}")]
    Repository(String),
}

impl ReservationError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ReservationError::MissingField(_) => 2001,
            ReservationError::ClassNotFound => 2002,
            ReservationError::ProfessorNotFound => 2003,
            ReservationError::InvalidDate => 2004,
            ReservationError::InvalidStartTime => 2005,
            ReservationError::InvalidEndTime => 2006,
            ReservationError::InvalidTimeOrder => 2007,
            ReservationError::Validation(_) => 2008,
            ReservationError::Conflict { .. } => 2009,
            ReservationError::NotFound => 2010,
            ReservationError::Repository(_) => 2100,
        }
    }
}

impl From<ModelError> for ReservationError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ReservationError::Validation(msg),
            ModelError::Db(msg) => ReservationError::Repository(msg),
        }
    }
}
