use thiserror::Error;

use crate::domain::field::Field;

/// Root domain error type: one variant per field failure mode.
///
/// The `Display` strings are the exact user-facing messages shown next to a
/// rejected field. All errors are:
/// - Cloneable (reports are passed around by value)
/// - Attributable (every failure belongs to exactly one [`Field`])
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ── Name ────────────────────────────────────────────────────────────────
    /// Fewer than two name parts after splitting on whitespace.
    #[error("Enter your full name")]
    FullNameRequired,

    /// Some name part is shorter than two characters.
    #[error("Each name part must be at least 2 letters")]
    NamePartTooShort,

    /// Character outside ASCII letters, Nordic letters, space, ' or -.
    #[error("Invalid characters in name")]
    NameInvalidCharacters,

    // ── Email ───────────────────────────────────────────────────────────────
    #[error("Invalid email address")]
    EmailInvalid,

    // ── Phone ───────────────────────────────────────────────────────────────
    #[error("Phone number must be 7–15 digits")]
    PhoneInvalid,

    // ── Birthdate ───────────────────────────────────────────────────────────
    #[error("Enter your birth date")]
    BirthdateMissing,

    #[error("Birth date cannot be in the future")]
    BirthdateInFuture,

    #[error("You must be at least 13 years old")]
    TooYoung,

    /// Unparseable date, or an age over 120 years.
    #[error("Invalid birth date")]
    BirthdateInvalid,

    // ── Terms ───────────────────────────────────────────────────────────────
    #[error("You must accept the terms")]
    TermsNotAccepted,
}

impl DomainError {
    /// The field this failure belongs to.
    pub const fn field(&self) -> Field {
        match self {
            Self::FullNameRequired | Self::NamePartTooShort | Self::NameInvalidCharacters => {
                Field::Name
            }
            Self::EmailInvalid => Field::Email,
            Self::PhoneInvalid => Field::Phone,
            Self::BirthdateMissing
            | Self::BirthdateInFuture
            | Self::TooYoung
            | Self::BirthdateInvalid => Field::Birthdate,
            Self::TermsNotAccepted => Field::Terms,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FullNameRequired => vec![
                "Provide both a first and a last name".into(),
                "Example: Anna-Liisa Virtanen".into(),
            ],
            Self::NamePartTooShort => {
                vec!["Every part of the name needs at least 2 letters".into()]
            }
            Self::NameInvalidCharacters => vec![
                "Allowed: letters (including ÄÖÅ äöå), spaces, apostrophes, hyphens".into(),
            ],
            Self::EmailInvalid => vec![
                "Use the form local@domain.tld".into(),
                "Example: anna@example.com".into(),
            ],
            Self::PhoneInvalid => vec![
                "Use digits only, with an optional leading '+'".into(),
                "Example: +358401234567".into(),
            ],
            Self::BirthdateMissing | Self::BirthdateInvalid => vec![
                "Enter the birth date as YYYY-MM-DD".into(),
                "Example: 1990-05-01".into(),
            ],
            Self::BirthdateInFuture => vec!["The birth date must be in the past".into()],
            Self::TooYoung => vec!["Registrants must be at least 13 years old".into()],
            Self::TermsNotAccepted => vec!["Pass --accept-terms to accept the terms".into()],
        }
    }
}
