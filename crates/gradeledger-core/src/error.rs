//! Ledger error types.
//!
//! Every failure in this crate is a synchronous, non-retryable validation
//! failure raised before any state mutation. The external caller decides
//! whether to retry with corrected input; there is no retry layer here.

use thiserror::Error;

use crate::model::{ActorId, StudentId};

/// Errors produced by the record store, authorization registry, and query
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The caller may not perform mutating operations.
    #[error("caller '{0}' is not authorized")]
    Unauthorized(ActorId),

    /// The owner's authorization cannot be granted or revoked.
    #[error("cannot modify the owner's authorization")]
    CannotModifyOwner,

    /// The target identity is already in the authorized set.
    #[error("'{0}' is already authorized")]
    AlreadyAuthorized(ActorId),

    /// The target identity is not in the authorized set.
    #[error("'{0}' is not in the authorized set")]
    NotAuthorized(ActorId),

    /// The target identity is the null identity.
    #[error("authorization target must not be the null identity")]
    InvalidTarget,

    /// No active record exists for this id.
    #[error("student {0} not found")]
    NotFound(StudentId),

    /// An active record with this id already exists.
    #[error("student {0} is already registered")]
    AlreadyExists(StudentId),

    /// Student ids must be strictly positive.
    #[error("student id must be positive")]
    InvalidId,

    /// Names must be 1–100 characters.
    #[error("name must be between 1 and 100 characters")]
    InvalidName,

    /// Attendance percentage out of range.
    #[error("attendance percentage {0} exceeds 100")]
    InvalidPercentage(u8),

    /// Weekly study hours out of range.
    #[error("study hours {0} exceed 168")]
    InvalidStudyHours(u8),

    /// A grade was outside [0,100].
    #[error("grade {0} is out of range 0-100")]
    InvalidGrade(u8),

    /// A bulk grade append was empty or larger than 50 entries.
    #[error("grade batch must contain 1-50 entries, got {0}")]
    InvalidBatchSize(usize),

    /// A listing limit outside [1,100].
    #[error("limit must be between 1 and 100, got {0}")]
    InvalidLimit(usize),

    /// A listing offset past the end of the enumeration sequence.
    #[error("offset {offset} is out of bounds for {total} registered ids")]
    OffsetOutOfBounds { offset: usize, total: usize },

    /// Prediction requested for a student with no grade history.
    #[error("student {0} has no grades to predict from")]
    NoGradesAvailable(StudentId),
}

impl LedgerError {
    /// Returns `true` if this is an authorization failure.
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            LedgerError::Unauthorized(_)
                | LedgerError::CannotModifyOwner
                | LedgerError::AlreadyAuthorized(_)
                | LedgerError::NotAuthorized(_)
                | LedgerError::InvalidTarget
        )
    }

    /// Returns `true` if this is an existence failure.
    pub fn is_existence(&self) -> bool {
        matches!(self, LedgerError::NotFound(_) | LedgerError::AlreadyExists(_))
    }
}
