//! Registration entities: the raw input and the accepted roster row.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use serde::{Deserialize, Serialize};

/// Raw field values read from the form for one submit attempt.
///
/// Ephemeral — it exists only while a single submission is being handled and
/// is never stored. Values are kept verbatim; trimming happens inside the
/// validators and when an accepted row is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birthdate: String,
    pub terms_accepted: bool,
}

/// One accepted registration, as appended to the roster.
///
/// Rows are immutable once created: the roster is append-only and never
/// edits or removes entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    timestamp: String,
    name: String,
    email: String,
    phone: String,
    birthdate: String,
    terms_accepted: bool,
}

impl Submission {
    /// Column headers matching [`Submission::cells`] order.
    pub const HEADERS: [&'static str; 6] =
        ["Timestamp", "Name", "Email", "Phone", "Birthdate", "Terms"];

    pub fn new(
        timestamp: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        birthdate: impl Into<String>,
        terms_accepted: bool,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            birthdate: birthdate.into(),
            terms_accepted,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn phone(&self) -> &str {
        &self.phone
    }
    pub fn birthdate(&self) -> &str {
        &self.birthdate
    }
    pub const fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// The six rendered cells, in roster column order:
    /// `[timestamp, name, email, phone, birth, terms]`.
    pub fn cells(&self) -> [String; 6] {
        [
            self.timestamp.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.birthdate.clone(),
            if self.terms_accepted { "Yes" } else { "No" }.to_owned(),
        ]
    }
}
