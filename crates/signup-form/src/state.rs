// File: src/state.rs
// Purpose: Mutable state of one registration attempt

use signup_core::{validate_services, ErrorKey, Field, PartnerSubmission, Validator};
use std::collections::{BTreeMap, BTreeSet};

/// Whether the sink has acknowledged this attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    NotSubmitted,
    Succeeded,
}

/// Values, errors and submission flags of one registration attempt
///
/// Never persisted; created empty when the flow starts and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: PartnerSubmission,
    errors: BTreeMap<ErrorKey, String>,
    valid_fields: BTreeSet<Field>,
    is_submitting: bool,
    outcome: SubmissionOutcome,
    /// Set once a services pass has run (checkbox blur or submit)
    services_checked: bool,
    postcode_suggestions: Vec<String>,
    show_postcode_suggestions: bool,
    disposed: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &PartnerSubmission {
        &self.values
    }

    pub fn errors(&self) -> &BTreeMap<ErrorKey, String> {
        &self.errors
    }

    pub fn error(&self, key: impl Into<ErrorKey>) -> Option<&str> {
        self.errors.get(&key.into()).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn valid_fields(&self) -> &BTreeSet<Field> {
        &self.valid_fields
    }

    pub fn is_valid_field(&self, field: Field) -> bool {
        self.valid_fields.contains(&field)
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome
    }

    pub fn postcode_suggestions(&self) -> &[String] {
        &self.postcode_suggestions
    }

    pub fn shows_postcode_suggestions(&self) -> bool {
        self.show_postcode_suggestions
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub(crate) fn values_mut(&mut self) -> &mut PartnerSubmission {
        &mut self.values
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.is_submitting = submitting;
    }

    pub(crate) fn set_outcome(&mut self, outcome: SubmissionOutcome) {
        self.outcome = outcome;
    }

    pub(crate) fn set_form_error(&mut self, message: Option<&str>) {
        match message {
            Some(message) => self.errors.insert(ErrorKey::Form, message.to_string()),
            None => self.errors.remove(&ErrorKey::Form),
        };
    }

    pub(crate) fn set_postcode_suggestions(&mut self, suggestions: Vec<String>) {
        self.show_postcode_suggestions = !suggestions.is_empty();
        self.postcode_suggestions = suggestions;
    }

    pub(crate) fn hide_postcode_suggestions(&mut self) {
        self.show_postcode_suggestions = false;
    }

    pub(crate) fn clear_postcode_suggestions(&mut self) {
        self.postcode_suggestions.clear();
        self.show_postcode_suggestions = false;
    }

    pub(crate) fn dispose(&mut self) {
        self.disposed = true;
    }

    pub(crate) fn services_checked(&self) -> bool {
        self.services_checked
    }

    /// Run one field's rule against its current value and merge the result
    pub(crate) fn check_field(&mut self, validator: &Validator, field: Field) -> bool {
        let value = self.values.get(field);
        match validator.validate(field, &value) {
            Ok(()) => {
                self.errors.remove(&ErrorKey::Field(field));
                if value.is_filled() {
                    self.valid_fields.insert(field);
                } else {
                    self.valid_fields.remove(&field);
                }
                true
            }
            Err(message) => {
                self.errors.insert(ErrorKey::Field(field), message);
                self.valid_fields.remove(&field);
                false
            }
        }
    }

    /// Run the services rule and arm it for later checkbox changes
    pub(crate) fn check_services(&mut self) -> bool {
        self.services_checked = true;
        match validate_services(&self.values) {
            Ok(()) => {
                self.errors.remove(&ErrorKey::Services);
                true
            }
            Err(message) => {
                self.errors.insert(ErrorKey::Services, message);
                false
            }
        }
    }

    /// Every field and the services rule; all failures are merged
    pub(crate) fn check_all(&mut self, validator: &Validator) -> bool {
        let mut valid = true;
        for field in Field::ALL {
            valid &= self.check_field(validator, field);
        }
        valid &= self.check_services();
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_core::FieldValue;

    #[test]
    fn test_new_state_is_empty() {
        let state = FormState::new();
        assert!(!state.has_errors());
        assert!(state.valid_fields().is_empty());
        assert!(!state.is_submitting());
        assert_eq!(state.outcome(), SubmissionOutcome::NotSubmitted);
    }

    #[test]
    fn test_check_field_merges_and_clears() {
        let validator = Validator::standard();
        let mut state = FormState::new();

        assert!(!state.check_field(&validator, Field::Name));
        assert_eq!(state.error(Field::Name), Some("Name is required"));

        state.values_mut().set(Field::Name, FieldValue::text("Test User")).unwrap();
        assert!(state.check_field(&validator, Field::Name));
        assert_eq!(state.error(Field::Name), None);
        assert!(state.is_valid_field(Field::Name));
    }

    #[test]
    fn test_unchecked_box_is_valid_but_not_affirmed() {
        let validator = Validator::standard();
        let mut state = FormState::new();
        assert!(state.check_field(&validator, Field::PayNow));
        assert!(!state.is_valid_field(Field::PayNow));
    }

    #[test]
    fn test_check_all_accumulates() {
        let validator = Validator::standard();
        let mut state = FormState::new();
        assert!(!state.check_all(&validator));
        assert_eq!(state.errors().len(), 6);
        assert!(state.services_checked());
    }
}
