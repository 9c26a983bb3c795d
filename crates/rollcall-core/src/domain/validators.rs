//! Centralized domain validation.
//!
//! All field rules live here, not scattered across entities. Every function
//! is pure and deterministic: string in, verdict out. The only outside input
//! is `today`, which callers obtain from the `Clock` port so the birthdate
//! rules stay testable.

use chrono::{Datelike, NaiveDate};

use crate::domain::{
    error::DomainError,
    field::Field,
    registration::RegistrationInput,
    report::ValidationReport,
};

/// Date format accepted for birthdates.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum age for registrants.
pub const MIN_AGE: i32 = 13;

/// Maximum plausible age; older dates are treated as entry mistakes.
pub const MAX_AGE: i32 = 120;

/// Validate a full name: at least two whitespace-separated parts, each part
/// at least two characters, all characters from the allowed set.
pub fn validate_name(raw: &str) -> Result<(), DomainError> {
    let name = raw.trim();
    let parts: Vec<&str> = name.split_whitespace().collect();

    if parts.len() < 2 {
        return Err(DomainError::FullNameRequired);
    }
    if parts.iter().any(|p| p.chars().count() < 2) {
        return Err(DomainError::NamePartTooShort);
    }
    if !name.chars().all(is_allowed_name_char) {
        return Err(DomainError::NameInvalidCharacters);
    }
    Ok(())
}

/// ASCII letters, the Nordic letters ÄÖÅ in either case, whitespace,
/// apostrophe, hyphen.
fn is_allowed_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, 'Ä' | 'Ö' | 'Å' | 'ä' | 'ö' | 'å')
        || c.is_whitespace()
        || c == '\''
        || c == '-'
}

/// Validate an email address: exactly one `@`, non-empty whitespace-free
/// local and domain parts, and an interior dot in the domain.
pub fn validate_email(raw: &str) -> Result<(), DomainError> {
    let email = raw.trim();

    if email.chars().any(char::is_whitespace) {
        return Err(DomainError::EmailInvalid);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(DomainError::EmailInvalid);
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(DomainError::EmailInvalid);
    }
    // The dot must have at least one character on each side.
    let has_interior_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_interior_dot {
        return Err(DomainError::EmailInvalid);
    }
    Ok(())
}

/// Validate a phone number: optional leading `+`, then 7–15 ASCII digits and
/// nothing else.
pub fn validate_phone(raw: &str) -> Result<(), DomainError> {
    let phone = raw.trim();
    let digits = phone.strip_prefix('+').unwrap_or(phone);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::PhoneInvalid);
    }
    if !(7..=15).contains(&digits.len()) {
        return Err(DomainError::PhoneInvalid);
    }
    Ok(())
}

/// Validate a birthdate string against `today`.
///
/// The date must parse as `%Y-%m-%d`, lie strictly in the past, and give an
/// age between [`MIN_AGE`] and [`MAX_AGE`] inclusive.
pub fn validate_birthdate(raw: &str, today: NaiveDate) -> Result<(), DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::BirthdateMissing);
    }
    let birth = NaiveDate::parse_from_str(raw, BIRTHDATE_FORMAT)
        .map_err(|_| DomainError::BirthdateInvalid)?;

    if birth >= today {
        return Err(DomainError::BirthdateInFuture);
    }
    let age = age_on(birth, today);
    if age < MIN_AGE {
        return Err(DomainError::TooYoung);
    }
    if age > MAX_AGE {
        return Err(DomainError::BirthdateInvalid);
    }
    Ok(())
}

/// Completed years between `birth` and `today`: the year difference, minus
/// one when this year's birthday has not yet occurred.
fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Validate terms acceptance.
pub fn validate_terms(accepted: bool) -> Result<(), DomainError> {
    if accepted {
        Ok(())
    } else {
        Err(DomainError::TermsNotAccepted)
    }
}

/// Run every field validator over one submit attempt and collect the
/// failures into a [`ValidationReport`].
///
/// This is the pure "compute validation result" function: no side effects,
/// no I/O. Rendering the report is the application layer's job.
pub fn validate_registration(input: &RegistrationInput, today: NaiveDate) -> ValidationReport {
    let mut report = ValidationReport::new();

    if let Err(e) = validate_name(&input.name) {
        report.record(Field::Name, e);
    }
    if let Err(e) = validate_email(&input.email) {
        report.record(Field::Email, e);
    }
    if let Err(e) = validate_phone(&input.phone) {
        report.record(Field::Phone, e);
    }
    if let Err(e) = validate_birthdate(&input.birthdate, today) {
        report.record(Field::Birthdate, e);
    }
    if let Err(e) = validate_terms(input.terms_accepted) {
        report.record(Field::Terms, e);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    // ── name ──────────────────────────────────────────────────────────────

    #[test]
    fn name_accepts_nordic_hyphenated_name() {
        assert_eq!(validate_name("Anna-Liisa Virtanen"), Ok(()));
        assert_eq!(validate_name("Väinö Öhman"), Ok(()));
        assert_eq!(validate_name("O'Brien Åström"), Ok(()));
    }

    #[test]
    fn name_rejects_single_word() {
        assert_eq!(validate_name("Anna"), Err(DomainError::FullNameRequired));
        assert_eq!(validate_name("   Anna   "), Err(DomainError::FullNameRequired));
        assert_eq!(validate_name(""), Err(DomainError::FullNameRequired));
    }

    #[test]
    fn name_rejects_short_parts() {
        assert_eq!(validate_name("A Virtanen"), Err(DomainError::NamePartTooShort));
        assert_eq!(validate_name("Anna V"), Err(DomainError::NamePartTooShort));
    }

    #[test]
    fn name_rejects_digits_and_symbols() {
        assert_eq!(
            validate_name("Anna4 Virtanen"),
            Err(DomainError::NameInvalidCharacters)
        );
        assert_eq!(
            validate_name("Anna! Virtanen"),
            Err(DomainError::NameInvalidCharacters)
        );
    }

    #[test]
    fn name_too_few_parts_wins_over_charset() {
        // A single invalid token still reports the missing-parts failure first.
        assert_eq!(validate_name("Anna42"), Err(DomainError::FullNameRequired));
    }

    // ── email ─────────────────────────────────────────────────────────────

    #[test]
    fn email_accepts_minimal_address() {
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email("first.last@sub.example.org"), Ok(()));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in ["bad", "a@b", "@b.com", "a@", "a@@b.com", "a b@c.com", "a@.com", "a@b."] {
            assert_eq!(validate_email(bad), Err(DomainError::EmailInvalid), "case: {bad}");
        }
    }

    // ── phone ─────────────────────────────────────────────────────────────

    #[test]
    fn phone_accepts_plus_prefixed_digits() {
        assert_eq!(validate_phone("+358401234567"), Ok(()));
        assert_eq!(validate_phone("0401234567"), Ok(()));
        assert_eq!(validate_phone("1234567"), Ok(())); // 7 digits, lower bound
        assert_eq!(validate_phone("123456789012345"), Ok(())); // 15, upper bound
    }

    #[test]
    fn phone_rejects_out_of_range_or_non_digit() {
        assert_eq!(validate_phone("123"), Err(DomainError::PhoneInvalid));
        assert_eq!(validate_phone("1234567890123456"), Err(DomainError::PhoneInvalid));
        assert_eq!(validate_phone("+35840 123456"), Err(DomainError::PhoneInvalid));
        assert_eq!(validate_phone("phone123"), Err(DomainError::PhoneInvalid));
        assert_eq!(validate_phone("+"), Err(DomainError::PhoneInvalid));
        assert_eq!(validate_phone(""), Err(DomainError::PhoneInvalid));
    }

    // ── birthdate ─────────────────────────────────────────────────────────

    #[test]
    fn birthdate_is_required() {
        assert_eq!(validate_birthdate("", today()), Err(DomainError::BirthdateMissing));
        assert_eq!(validate_birthdate("   ", today()), Err(DomainError::BirthdateMissing));
    }

    #[test]
    fn birthdate_rejects_garbage() {
        assert_eq!(
            validate_birthdate("not-a-date", today()),
            Err(DomainError::BirthdateInvalid)
        );
        assert_eq!(
            validate_birthdate("1990-13-40", today()),
            Err(DomainError::BirthdateInvalid)
        );
    }

    #[test]
    fn birthdate_rejects_future_and_today() {
        assert_eq!(
            validate_birthdate("2027-01-01", today()),
            Err(DomainError::BirthdateInFuture)
        );
        // Strictly-in-the-past rule: today's date is not a valid birth date.
        assert_eq!(
            validate_birthdate("2026-08-27", today()),
            Err(DomainError::BirthdateInFuture)
        );
    }

    #[test]
    fn ten_years_old_is_too_young() {
        assert_eq!(
            validate_birthdate("2016-08-27", today()),
            Err(DomainError::TooYoung)
        );
    }

    #[test]
    fn thirteen_years_minus_one_day_is_still_too_young() {
        // Turns 13 tomorrow.
        assert_eq!(
            validate_birthdate("2013-08-28", today()),
            Err(DomainError::TooYoung)
        );
        // Turned 13 today: accepted.
        assert_eq!(validate_birthdate("2013-08-27", today()), Ok(()));
    }

    #[test]
    fn ages_over_max_are_invalid() {
        assert_eq!(
            validate_birthdate("1900-01-01", today()),
            Err(DomainError::BirthdateInvalid)
        );
        // 120 exactly is still plausible.
        assert_eq!(validate_birthdate("1906-08-27", today()), Ok(()));
    }

    #[test]
    fn age_adjusts_for_birthday_not_yet_reached() {
        let birth = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();
        assert_eq!(age_on(birth, today()), 25);
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(age_on(birth, today()), 26);
    }

    // ── terms ─────────────────────────────────────────────────────────────

    #[test]
    fn terms_must_be_accepted() {
        assert_eq!(validate_terms(true), Ok(()));
        assert_eq!(validate_terms(false), Err(DomainError::TermsNotAccepted));
    }

    // ── whole registration ────────────────────────────────────────────────

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            name: "Anna-Liisa Virtanen".into(),
            email: "anna@example.com".into(),
            phone: "+358401234567".into(),
            birthdate: "1990-05-01".into(),
            terms_accepted: true,
        }
    }

    #[test]
    fn fully_valid_input_produces_empty_report() {
        let report = validate_registration(&valid_input(), today());
        assert!(report.is_valid());
    }

    #[test]
    fn each_failing_field_is_reported_once_in_order() {
        let input = RegistrationInput {
            name: "Anna".into(),
            email: "bad".into(),
            phone: "123".into(),
            birthdate: "".into(),
            terms_accepted: false,
        };
        let report = validate_registration(&input, today());
        assert_eq!(report.len(), 5);
        let fields: Vec<Field> = report.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn terms_only_failure_reports_just_terms() {
        let mut input = valid_input();
        input.terms_accepted = false;
        let report = validate_registration(&input, today());
        assert_eq!(report.len(), 1);
        assert_eq!(report.error_for(Field::Terms), Some(&DomainError::TermsNotAccepted));
        assert_eq!(report.first_invalid(), None);
    }
}
