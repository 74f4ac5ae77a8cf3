//! Roster validation errors.
//!
//! These are recoverable: the operation is abandoned, the roster is left
//! untouched, and the message is shown to the user.

use thiserror::Error;

/// Errors returned by roster mutations and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No identifier was given.
    #[error("NIS must not be empty.")]
    EmptyIdentifier,

    /// The identifier is already taken.
    #[error("NIS {0} already exists. Student not added.")]
    DuplicateIdentifier(String),

    /// No name was given.
    #[error("Name must not be empty.")]
    EmptyName,

    /// No student has this identifier.
    #[error("NIS {0} not found.")]
    NotFound(String),

    /// The score input is not a whole number.
    #[error("Invalid input '{0}'. Please enter a whole number for the score.")]
    NotAnInteger(String),

    /// The score is outside 0..=100.
    #[error("Score {0} is out of range. Scores must be between 0 and 100.")]
    ScoreOutOfRange(String),
}

impl RosterError {
    /// Returns `true` if a lookup failed because no record could be selected.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RosterError::EmptyIdentifier | RosterError::NotFound(_)
        )
    }
}
