//! In-memory form surface.
//!
//! Plays the role a browser form would: it holds field values, the terms
//! checkbox, per-field error messages, invalid markings, focus, and the
//! timestamp stamped on acceptance. The CLI fills it from arguments or
//! prompts and hands a clone to the controller.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, RwLock},
};

use rollcall_core::application::ApplicationError;
use rollcall_core::application::ports::FormView;
use rollcall_core::domain::Field;
use rollcall_core::error::RollcallResult;

/// In-memory [`FormView`] implementation.
///
/// Cheap to clone: clones share state, so the caller can keep a handle to
/// inspect what the controller did to the form.
#[derive(Debug, Clone)]
pub struct MemoryForm {
    inner: Arc<RwLock<MemoryFormInner>>,
}

#[derive(Debug, Default)]
struct MemoryFormInner {
    values: HashMap<Field, String>,
    terms_accepted: bool,
    errors: HashMap<Field, String>,
    invalid: HashSet<Field>,
    focused: Option<Field>,
    timestamp: Option<String>,
}

impl MemoryForm {
    /// Create an empty form: blank inputs, terms unticked.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFormInner::default())),
        }
    }

    /// Set a text field's value.
    pub fn set_value(&self, field: Field, value: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.values.insert(field, value.into());
        }
    }

    /// Tick or untick the terms checkbox.
    pub fn set_terms(&self, accepted: bool) {
        if let Ok(mut inner) = self.inner.write() {
            inner.terms_accepted = accepted;
        }
    }

    /// Current error message for a field, if any.
    pub fn error_text(&self, field: Field) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.errors.get(&field).cloned()
    }

    /// Whether a field carries invalid marking.
    pub fn is_marked_invalid(&self, field: Field) -> bool {
        self.inner
            .read()
            .map(|inner| inner.invalid.contains(&field))
            .unwrap_or(false)
    }

    /// The field that currently holds focus, if any.
    pub fn focused(&self) -> Option<Field> {
        self.inner.read().ok().and_then(|inner| inner.focused)
    }

    /// The timestamp stamped by the last accepted submission, if any.
    pub fn timestamp(&self) -> Option<String> {
        self.inner.read().ok().and_then(|inner| inner.timestamp.clone())
    }
}

impl Default for MemoryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for MemoryForm {
    fn field_value(&self, field: Field) -> String {
        // An untouched or unreadable field reads as empty.
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.values.get(&field).cloned())
            .unwrap_or_default()
    }

    fn terms_accepted(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.terms_accepted)
            .unwrap_or(false)
    }

    fn set_error(&self, field: Field, message: &str) -> RollcallResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ViewUnavailable)?;
        inner.errors.insert(field, message.to_owned());
        Ok(())
    }

    fn mark_invalid(&self, field: Field) -> RollcallResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ViewUnavailable)?;
        inner.invalid.insert(field);
        Ok(())
    }

    fn clear_errors(&self) -> RollcallResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ViewUnavailable)?;
        inner.errors.clear();
        inner.invalid.clear();
        Ok(())
    }

    fn focus(&self, field: Field) -> RollcallResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ViewUnavailable)?;
        inner.focused = Some(field);
        Ok(())
    }

    fn reset(&self) -> RollcallResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ViewUnavailable)?;
        inner.values.clear();
        inner.terms_accepted = false;
        inner.timestamp = None;
        Ok(())
    }

    fn set_timestamp(&self, stamp: &str) -> RollcallResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ViewUnavailable)?;
        inner.timestamp = Some(stamp.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_fields_read_as_empty() {
        let form = MemoryForm::new();
        assert_eq!(form.field_value(Field::Name), "");
        assert!(!form.terms_accepted());
    }

    #[test]
    fn values_round_trip_through_the_port() {
        let form = MemoryForm::new();
        form.set_value(Field::Email, "anna@example.com");
        form.set_terms(true);
        assert_eq!(form.field_value(Field::Email), "anna@example.com");
        assert!(form.terms_accepted());
    }

    #[test]
    fn clear_errors_wipes_messages_and_markings() {
        let form = MemoryForm::new();
        form.set_error(Field::Phone, "Phone number must be 7–15 digits")
            .unwrap();
        form.mark_invalid(Field::Phone).unwrap();
        assert!(form.error_text(Field::Phone).is_some());
        assert!(form.is_marked_invalid(Field::Phone));

        form.clear_errors().unwrap();
        assert!(form.error_text(Field::Phone).is_none());
        assert!(!form.is_marked_invalid(Field::Phone));

        // Idempotent.
        form.clear_errors().unwrap();
    }

    #[test]
    fn reset_clears_inputs_terms_and_timestamp_but_not_focus() {
        let form = MemoryForm::new();
        form.set_value(Field::Name, "Anna Virtanen");
        form.set_terms(true);
        form.set_timestamp("2026-08-27 10:00:00").unwrap();
        form.focus(Field::Name).unwrap();

        form.reset().unwrap();
        assert_eq!(form.field_value(Field::Name), "");
        assert!(!form.terms_accepted());
        assert!(form.timestamp().is_none());
        assert_eq!(form.focused(), Some(Field::Name));
    }

    #[test]
    fn clones_share_state() {
        let form = MemoryForm::new();
        let handle = form.clone();
        form.set_value(Field::Phone, "+358401234567");
        assert_eq!(handle.field_value(Field::Phone), "+358401234567");
    }
}
