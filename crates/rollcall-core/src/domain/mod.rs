//! Core domain layer for Rollcall.
//!
//! This module contains pure business logic with no external dependencies
//! beyond `chrono` for date arithmetic and `serde` derives. All I/O and
//! rendering concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: validation is synchronous
//! - **No I/O**: no filesystem, terminal, or clock access
//! - **Immutable entities**: all domain objects are Clone + PartialEq
//! - **Deterministic**: `today` is an argument, never read from the system

// Public API - what the world sees
pub mod error;
pub mod field;
pub mod registration;
pub mod report;
pub mod validators;

// Re-exports for convenience
pub use error::DomainError;
pub use field::Field;
pub use registration::{RegistrationInput, Submission};
pub use report::ValidationReport;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use validators::validate_registration;

    // Cross-module checks: the report produced by the validators carries the
    // exact messages the view will display.

    #[test]
    fn report_messages_match_domain_error_display() {
        let input = RegistrationInput {
            name: "Anna".into(),
            email: "bad".into(),
            phone: "+358401234567".into(),
            birthdate: "1990-05-01".into(),
            terms_accepted: true,
        };
        let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let report = validate_registration(&input, today);

        assert_eq!(
            report.error_for(Field::Name).map(ToString::to_string),
            Some("Enter your full name".to_owned())
        );
        assert_eq!(
            report.error_for(Field::Email).map(ToString::to_string),
            Some("Invalid email address".to_owned())
        );
    }

    #[test]
    fn every_reported_error_belongs_to_its_field() {
        let input = RegistrationInput::default();
        let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let report = validate_registration(&input, today);

        for (field, error) in report.iter() {
            assert_eq!(error.field(), *field);
        }
    }
}
