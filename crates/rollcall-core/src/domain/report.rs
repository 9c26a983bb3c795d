//! Per-attempt validation result.

use crate::domain::{error::DomainError, field::Field};

/// The outcome of validating one submit attempt: a mapping from failing
/// fields to their errors, kept in canonical field order.
///
/// Rebuilt from scratch on every attempt; never persisted. An empty report
/// means the submission is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<(Field, DomainError)>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. Entries stay sorted by canonical field order no
    /// matter the call order.
    pub fn record(&mut self, field: Field, error: DomainError) {
        self.entries.push((field, error));
        self.entries.sort_by_key(|(f, _)| f.ordinal());
    }

    /// `true` when no field failed.
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The error recorded for a field, if any.
    pub fn error_for(&self, field: Field) -> Option<&DomainError> {
        self.entries.iter().find(|(f, _)| *f == field).map(|(_, e)| e)
    }

    /// The first field that receives invalid marking.
    ///
    /// Terms is excluded: its message is shown but the checkbox is never
    /// marked or focused.
    pub fn first_invalid(&self) -> Option<Field> {
        self.entries
            .iter()
            .map(|(f, _)| *f)
            .find(|f| *f != Field::Terms)
    }

    /// Failures in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = &(Field, DomainError)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.first_invalid().is_none());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn entries_sort_into_field_order() {
        let mut report = ValidationReport::new();
        report.record(Field::Terms, DomainError::TermsNotAccepted);
        report.record(Field::Phone, DomainError::PhoneInvalid);
        report.record(Field::Name, DomainError::FullNameRequired);

        let fields: Vec<Field> = report.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![Field::Name, Field::Phone, Field::Terms]);
    }

    #[test]
    fn first_invalid_skips_terms() {
        let mut report = ValidationReport::new();
        report.record(Field::Terms, DomainError::TermsNotAccepted);
        assert_eq!(report.first_invalid(), None);

        report.record(Field::Email, DomainError::EmailInvalid);
        assert_eq!(report.first_invalid(), Some(Field::Email));
    }

    #[test]
    fn error_for_finds_the_recorded_failure() {
        let mut report = ValidationReport::new();
        report.record(Field::Email, DomainError::EmailInvalid);
        assert_eq!(report.error_for(Field::Email), Some(&DomainError::EmailInvalid));
        assert_eq!(report.error_for(Field::Phone), None);
    }
}
