//! Application services - use case orchestration.

pub mod form_controller;

pub use form_controller::{DEFAULT_TIMESTAMP_FORMAT, FormController, SubmitOutcome};
