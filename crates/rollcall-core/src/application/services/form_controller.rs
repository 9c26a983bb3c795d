//! Form Controller - main application orchestrator.
//!
//! This service coordinates the entire submit workflow:
//! 1. Clear prior errors
//! 2. Read the attempt from the form view
//! 3. Run the validators
//! 4. On failure: render messages, mark fields, focus the first invalid one
//! 5. On success: stamp a timestamp, append the roster row, reset the form
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).
//! Each call is handled synchronously and atomically start-to-finish.

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{Clock, FormView, RosterTable},
    domain::{Field, RegistrationInput, Submission, ValidationReport, validators},
    error::RollcallResult,
};

/// Default timestamp format stamped onto accepted rows.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field validated; the row was appended and the form reset.
    Accepted(Submission),
    /// At least one field failed; messages were rendered to the view.
    Rejected(ValidationReport),
}

/// Orchestrates validation, error rendering, and roster appends over
/// injected adapters.
pub struct FormController {
    view: Box<dyn FormView>,
    roster: Box<dyn RosterTable>,
    clock: Box<dyn Clock>,
    timestamp_format: String,
}

impl FormController {
    /// Create a new controller with the given adapters.
    pub fn new(view: Box<dyn FormView>, roster: Box<dyn RosterTable>, clock: Box<dyn Clock>) -> Self {
        Self {
            view,
            roster,
            clock,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_owned(),
        }
    }

    /// Override the timestamp format (chrono `strftime` syntax).
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Handle one submit attempt.
    ///
    /// A row is appended if and only if every field passes validation and
    /// the terms checkbox is ticked.
    #[instrument(skip_all)]
    pub fn handle_submit(&self) -> RollcallResult<SubmitOutcome> {
        self.view.clear_errors()?;

        let input = RegistrationInput {
            name: self.view.field_value(Field::Name),
            email: self.view.field_value(Field::Email),
            phone: self.view.field_value(Field::Phone),
            birthdate: self.view.field_value(Field::Birthdate),
            terms_accepted: self.view.terms_accepted(),
        };

        let today = self.clock.now().date();
        let report = validators::validate_registration(&input, today);

        if !report.is_valid() {
            warn!(failures = report.len(), "submission rejected");
            for (field, error) in report.iter() {
                self.view.set_error(*field, &error.to_string())?;
                // The terms checkbox shows its message but never gets marked.
                if *field != Field::Terms {
                    self.view.mark_invalid(*field)?;
                }
            }
            if let Some(field) = report.first_invalid() {
                self.view.focus(field)?;
            }
            return Ok(SubmitOutcome::Rejected(report));
        }

        let stamp = self.clock.now().format(&self.timestamp_format).to_string();
        self.view.set_timestamp(&stamp)?;

        let submission = Submission::new(
            stamp,
            input.name.trim(),
            input.email.trim(),
            input.phone.trim(),
            input.birthdate.trim(),
            input.terms_accepted,
        );
        self.roster.append(&submission)?;

        self.view.reset()?;
        self.view.focus(Field::Name)?;

        info!(rows = self.roster.len(), "registration recorded");
        Ok(SubmitOutcome::Accepted(submission))
    }

    /// Handle a reset: clear every error display. Idempotent.
    pub fn handle_reset(&self) -> RollcallResult<()> {
        self.view.clear_errors()
    }

    /// Rows appended so far in this session.
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
