//! Order form state

use super::field::{FieldName, FieldValue, InputKind, OwnedFieldValue};
use crate::state::catalog::is_known_topping;
use serde::{Deserialize, Serialize};

/// Values entered into the order form; also the JSON body of `POST /api/order`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    /// "" until a size is chosen, then "S", "M" or "L"
    pub size: String,
    /// Topping ids in the order they were checked
    pub toppings: Vec<String>,
}

impl FormValues {
    /// Borrow the value of one field
    pub fn field_value(&self, name: FieldName) -> FieldValue<'_> {
        match name {
            FieldName::FullName => FieldValue::Text(&self.full_name),
            FieldName::Size => FieldValue::Text(&self.size),
            FieldName::Toppings => FieldValue::List(&self.toppings),
        }
    }

    /// Snapshot of one field's value
    pub fn owned_field_value(&self, name: FieldName) -> OwnedFieldValue {
        match name {
            FieldName::FullName => OwnedFieldValue::Text(self.full_name.clone()),
            FieldName::Size => OwnedFieldValue::Text(self.size.clone()),
            FieldName::Toppings => OwnedFieldValue::List(self.toppings.clone()),
        }
    }

    pub fn has_topping(&self, id: &str) -> bool {
        self.toppings.iter().any(|t| t == id)
    }

    /// Add or remove a topping. Unknown ids are ignored; returns whether the set changed.
    pub fn set_topping(&mut self, id: &str, checked: bool) -> bool {
        if !is_known_topping(id) {
            tracing::warn!("Ignoring unknown topping id {id:?}");
            return false;
        }
        let present = self.has_topping(id);
        match (checked, present) {
            (true, false) => {
                self.toppings.push(id.to_string());
                true
            }
            (false, true) => {
                self.toppings.retain(|t| t != id);
                true
            }
            _ => false,
        }
    }

    /// Apply a raw input change to the named field
    pub fn apply(&mut self, name: FieldName, raw_value: &str, kind: InputKind) {
        match (name, kind) {
            (_, InputKind::Checkbox { checked }) => {
                if name != FieldName::Toppings {
                    tracing::warn!("Checkbox change for non-list field {name}");
                    return;
                }
                self.set_topping(raw_value, checked);
            }
            (FieldName::FullName, _) => self.full_name = raw_value.to_string(),
            (FieldName::Size, _) => self.size = raw_value.to_string(),
            (FieldName::Toppings, _) => {
                tracing::warn!("Scalar change for toppings ignored: {raw_value:?}");
            }
        }
    }
}

/// Current inline error message per field; empty means no error
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    full_name: String,
    size: String,
}

impl FieldErrors {
    pub fn get(&self, name: FieldName) -> &str {
        match name {
            FieldName::FullName => &self.full_name,
            FieldName::Size => &self.size,
            FieldName::Toppings => "",
        }
    }

    /// Set a field's message. Toppings never carry one.
    pub fn set(&mut self, name: FieldName, message: impl Into<String>) {
        match name {
            FieldName::FullName => self.full_name = message.into(),
            FieldName::Size => self.size = message.into(),
            FieldName::Toppings => {}
        }
    }

    pub fn clear(&mut self, name: FieldName) {
        self.set(name, String::new());
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.size.is_empty()
    }
}

/// Result banner of the last settled submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Failure(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Submission lifecycle of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Everything the order form shows
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    /// Latest settled whole-form validity
    pub enabled: bool,
    pub phase: SubmitPhase,
    pub outcome: Option<SubmissionOutcome>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Whether the submit control should accept input
    pub fn can_submit(&self) -> bool {
        self.enabled && !self.is_submitting()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.outcome
            .as_ref()
            .filter(|o| o.is_success())
            .map(SubmissionOutcome::message)
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.outcome
            .as_ref()
            .filter(|o| !o.is_success())
            .map(SubmissionOutcome::message)
    }

    /// Record a successful submission: clear the values, replace the banner
    pub fn record_success(&mut self, message: String) {
        self.values = FormValues::default();
        self.outcome = Some(SubmissionOutcome::Success(message));
        self.phase = SubmitPhase::Succeeded;
    }

    /// Record a failed submission; values stay as entered
    pub fn record_failure(&mut self, message: String) {
        self.outcome = Some(SubmissionOutcome::Failure(message));
        self.phase = SubmitPhase::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod form_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty() {
            let values = FormValues::default();
            assert_eq!(values.full_name, "");
            assert_eq!(values.size, "");
            assert!(values.toppings.is_empty());
        }

        #[test]
        fn test_serializes_with_camel_case_keys() {
            let values = FormValues {
                full_name: "Alice".to_string(),
                size: "S".to_string(),
                toppings: vec!["1".to_string(), "4".to_string()],
            };
            let json = serde_json::to_value(&values).unwrap();
            assert_eq!(
                json,
                serde_json::json!({"fullName": "Alice", "size": "S", "toppings": ["1", "4"]})
            );
        }

        #[test]
        fn test_check_then_uncheck_restores_toppings() {
            let mut values = FormValues::default();
            values.set_topping("2", true);
            let before = values.toppings.clone();

            values.apply(FieldName::Toppings, "5", InputKind::Checkbox { checked: true });
            values.apply(FieldName::Toppings, "5", InputKind::Checkbox { checked: false });

            assert_eq!(values.toppings, before);
        }

        #[test]
        fn test_checking_twice_does_not_duplicate() {
            let mut values = FormValues::default();
            assert!(values.set_topping("1", true));
            assert!(!values.set_topping("1", true));
            assert_eq!(values.toppings, vec!["1".to_string()]);
        }

        #[test]
        fn test_unchecking_absent_topping_is_noop() {
            let mut values = FormValues::default();
            assert!(!values.set_topping("3", false));
            assert!(values.toppings.is_empty());
        }

        #[test]
        fn test_unknown_topping_is_ignored() {
            let mut values = FormValues::default();
            values.apply(FieldName::Toppings, "42", InputKind::Checkbox { checked: true });
            assert!(values.toppings.is_empty());
        }

        #[test]
        fn test_toppings_keep_check_order() {
            let mut values = FormValues::default();
            values.set_topping("4", true);
            values.set_topping("1", true);
            values.set_topping("3", true);
            values.set_topping("1", false);
            assert_eq!(values.toppings, vec!["4".to_string(), "3".to_string()]);
        }

        #[test]
        fn test_scalar_changes_replace_value() {
            let mut values = FormValues::default();
            values.apply(FieldName::FullName, "Al", InputKind::Text);
            values.apply(FieldName::FullName, "Alice", InputKind::Text);
            values.apply(FieldName::Size, "L", InputKind::Select);
            assert_eq!(values.full_name, "Alice");
            assert_eq!(values.size, "L");
        }

        #[test]
        fn test_checkbox_on_scalar_field_is_ignored() {
            let mut values = FormValues::default();
            values.apply(FieldName::Size, "S", InputKind::Checkbox { checked: true });
            assert_eq!(values.size, "");
        }
    }

    mod field_errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_and_clear() {
            let mut errors = FieldErrors::default();
            errors.set(FieldName::FullName, "too short");
            assert_eq!(errors.get(FieldName::FullName), "too short");
            assert_eq!(errors.get(FieldName::Size), "");
            assert!(!errors.is_empty());

            errors.clear(FieldName::FullName);
            assert!(errors.is_empty());
        }

        #[test]
        fn test_toppings_never_carry_a_message() {
            let mut errors = FieldErrors::default();
            errors.set(FieldName::Toppings, "Toppings are required");
            assert_eq!(errors.get(FieldName::Toppings), "");
            assert!(errors.is_empty());
        }
    }

    mod form_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_editing_and_disabled() {
            let state = FormState::new();
            assert_eq!(state.phase, SubmitPhase::Editing);
            assert!(!state.enabled);
            assert!(!state.can_submit());
            assert!(state.outcome.is_none());
        }

        #[test]
        fn test_cannot_submit_while_submitting() {
            let mut state = FormState::new();
            state.enabled = true;
            assert!(state.can_submit());
            state.phase = SubmitPhase::Submitting;
            assert!(!state.can_submit());
        }

        #[test]
        fn test_success_resets_values_and_replaces_failure() {
            let mut state = FormState::new();
            state.values.full_name = "Alice".to_string();
            state.record_failure("kitchen closed".to_string());
            state.record_success("Thank you".to_string());

            assert_eq!(state.values, FormValues::default());
            assert_eq!(state.success_message(), Some("Thank you"));
            assert_eq!(state.failure_message(), None);
            assert_eq!(state.phase, SubmitPhase::Succeeded);
        }

        #[test]
        fn test_failure_keeps_values_and_replaces_success() {
            let mut state = FormState::new();
            state.record_success("Thank you".to_string());
            state.values.full_name = "Alice".to_string();
            state.record_failure("kitchen closed".to_string());

            assert_eq!(state.values.full_name, "Alice");
            assert_eq!(state.failure_message(), Some("kitchen closed"));
            assert_eq!(state.success_message(), None);
            assert_eq!(state.phase, SubmitPhase::Failed);
        }

        #[test]
        fn test_outcome_accessors() {
            let outcome = SubmissionOutcome::Failure("nope".to_string());
            assert_eq!(outcome.message(), "nope");
            assert!(!outcome.is_success());
        }
    }
}
