//! Error types for the schedule engine.

use thiserror::Error;

/// Errors that can occur during schedule operations.
///
/// All variants are local and recoverable: a failed mutation leaves the store
/// unchanged and reports the kind to the caller.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A lookup or swap target does not exist
    #[error("not found: {what}")]
    NotFound { what: String },

    /// The destination slot is already occupied
    #[error("conflict: {what}")]
    Conflict { what: String },

    /// Out-of-range ordinal, unknown day/section/slot, or malformed input
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A persisted timetable could not be parsed
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Reading or writing a timetable file failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        ScheduleError::NotFound { what: what.into() }
    }

    pub(crate) fn conflict(what: impl Into<String>) -> Self {
        ScheduleError::Conflict { what: what.into() }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        ScheduleError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns true if the target of the operation was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScheduleError::NotFound { .. })
    }

    /// Returns true if the operation would have double-booked a slot.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ScheduleError::Conflict { .. })
    }
}
