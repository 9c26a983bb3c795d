//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `rollcall-adapters` crate provides implementations.

use chrono::NaiveDateTime;

use crate::domain::{Field, Submission};
use crate::error::RollcallResult;

/// Port for the form surface the controller drives.
///
/// Implemented by:
/// - `rollcall_adapters::form::MemoryForm` (CLI one-shot, sessions, testing)
///
/// ## Design Notes
///
/// - Reads are infallible: a missing field simply reads as empty, the same
///   way an untouched input does.
/// - `set_error` records the message only; invalid marking is a separate
///   call because the terms checkbox shows a message without being marked.
/// - `clear_errors` wipes both messages and markings and is idempotent.
#[cfg_attr(test, mockall::automock)]
pub trait FormView: Send + Sync {
    /// Current raw value of a text field.
    fn field_value(&self, field: Field) -> String;

    /// Whether the terms checkbox is ticked.
    fn terms_accepted(&self) -> bool;

    /// Display an error message next to a field.
    fn set_error(&self, field: Field, message: &str) -> RollcallResult<()>;

    /// Add invalid marking to a field.
    fn mark_invalid(&self, field: Field) -> RollcallResult<()>;

    /// Clear every error message and every invalid marking.
    fn clear_errors(&self) -> RollcallResult<()>;

    /// Move focus to a field.
    fn focus(&self, field: Field) -> RollcallResult<()>;

    /// Clear all inputs, the terms checkbox, and the stamped timestamp.
    fn reset(&self) -> RollcallResult<()>;

    /// Record the timestamp stamped for an accepted submission.
    fn set_timestamp(&self, stamp: &str) -> RollcallResult<()>;
}

/// Port for the append-only roster of accepted registrations.
///
/// Implemented by:
/// - `rollcall_adapters::roster::MemoryRoster`
///
/// Rows are never edited or removed; the port deliberately offers no way to.
#[cfg_attr(test, mockall::automock)]
pub trait RosterTable: Send + Sync {
    /// Append one accepted submission.
    fn append(&self, submission: &Submission) -> RollcallResult<()>;

    /// Number of rows appended so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Port for reading the current time.
///
/// Implemented by:
/// - `rollcall_adapters::clock::SystemClock` (production)
/// - `rollcall_adapters::clock::FixedClock` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current local date and time, without timezone.
    fn now(&self) -> NaiveDateTime;
}
