//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

/// Errors that occur while orchestrating a submit or reset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The form view's shared state is unusable (lock poisoned).
    #[error("form view state is unavailable")]
    ViewUnavailable,

    /// The roster table's shared state is unusable (lock poisoned).
    #[error("roster table state is unavailable")]
    RosterUnavailable,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ViewUnavailable => vec![
                "The form state could not be accessed".into(),
                "Restart the session and try again".into(),
            ],
            Self::RosterUnavailable => vec![
                "The roster could not be accessed".into(),
                "Restart the session and try again".into(),
            ],
        }
    }
}
