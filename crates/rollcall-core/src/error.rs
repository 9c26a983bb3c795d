//! Unified error type for the core crate.
//!
//! Wraps domain and application errors so callers can handle both through
//! one type, with user-facing suggestions and a coarse category for exit
//! code mapping at the edges.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Convenience alias used throughout the core and the adapters.
pub type RollcallResult<T> = Result<T, RollcallError>;

/// Top-level error for core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RollcallError {
    /// A field failed validation.
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),

    /// Orchestration failed outside the domain rules.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Something unexpected happened.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Coarse classification used to pick exit codes and log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input was at fault; the caller can fix it and retry.
    Validation,
    /// The program was at fault.
    Internal,
}

impl RollcallError {
    /// Get user-actionable suggestions for resolving this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This is likely a bug".into(),
                "Please report it with the steps that led here".into(),
            ],
        }
    }

    /// Classify the error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(_) | Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_validation_category() {
        let err = RollcallError::from(DomainError::EmailInvalid);
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "Validation error: Invalid email address");
    }

    #[test]
    fn application_errors_are_internal_category() {
        let err = RollcallError::from(ApplicationError::RosterUnavailable);
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn internal_error_displays_its_message() {
        let err = RollcallError::Internal {
            message: "stamp formatting failed".into(),
        };
        assert_eq!(err.to_string(), "Internal error: stamp formatting failed");
    }
}
