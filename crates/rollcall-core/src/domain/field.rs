//! The `Field` value object.
//!
//! # Design
//!
//! A pure value type — `Copy`, equality-by-value, no identity. It holds no
//! validation logic; all rules live in `validators.rs`. This file's only job
//! is to define the fields, their fixed order, and their string forms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named input of the registration form.
///
/// The declaration order is the canonical field order used for validation,
/// error reporting, and focus resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Birthdate,
    Terms,
}

impl Field {
    /// All fields in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Birthdate,
        Self::Terms,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Birthdate => "birthdate",
            Self::Terms => "terms",
        }
    }

    /// Human-readable label, used for prompts and headers.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Birthdate => "Birth date",
            Self::Terms => "Terms",
        }
    }

    /// Position in the canonical order.
    pub fn ordinal(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Field::Name.to_string(), "name");
        assert_eq!(Field::Birthdate.to_string(), "birthdate");
    }

    #[test]
    fn canonical_order_starts_with_name_and_ends_with_terms() {
        assert_eq!(Field::ALL[0], Field::Name);
        assert_eq!(Field::ALL[4], Field::Terms);
    }

    #[test]
    fn ordinal_follows_declaration_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.ordinal(), i);
        }
    }
}
