//! Order form validation rules

use super::field::{FieldName, FieldValue};
use super::form_state::FormValues;
use crate::state::catalog::{is_known_topping, PizzaSize};

/// Minimum trimmed length of the full name, in characters
pub const FULL_NAME_MIN: usize = 3;
/// Maximum trimmed length of the full name, in characters
pub const FULL_NAME_MAX: usize = 20;

/// A single field failing its constraint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldValidationError {
    #[error("full name must be at least 3 characters")]
    TooShort,
    #[error("full name must be at most 20 characters")]
    TooLong,
    #[error("size must be S or M or L")]
    InvalidSize,
    #[error("Toppings are required")]
    ToppingsRequired,
    #[error("unknown topping: {0}")]
    UnknownTopping(String),
}

/// Field constraints of the order form
///
/// Stateless, so it is `Copy` and can be moved into spawned tasks freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationSchema;

impl ValidationSchema {
    pub fn new() -> Self {
        Self
    }

    /// Validate one field in isolation, reporting the first rule it breaks
    pub fn validate_field(
        &self,
        name: FieldName,
        value: FieldValue<'_>,
    ) -> Result<(), FieldValidationError> {
        match name {
            FieldName::FullName => validate_full_name(value),
            FieldName::Size => validate_size(value),
            FieldName::Toppings => validate_toppings(value),
        }
    }

    /// Whole-form validity; true iff every field passes
    pub fn is_valid(&self, values: &FormValues) -> bool {
        FieldName::ALL
            .into_iter()
            .all(|name| self.validate_field(name, values.field_value(name)).is_ok())
    }

    /// Every failing field of `values`, in field order
    pub fn validate_all(&self, values: &FormValues) -> Vec<(FieldName, FieldValidationError)> {
        FieldName::ALL
            .into_iter()
            .filter_map(|name| {
                self.validate_field(name, values.field_value(name))
                    .err()
                    .map(|e| (name, e))
            })
            .collect()
    }
}

fn validate_full_name(value: FieldValue<'_>) -> Result<(), FieldValidationError> {
    let text = match value {
        FieldValue::Text(s) => s,
        FieldValue::List(_) | FieldValue::Missing => return Err(FieldValidationError::TooShort),
    };
    let len = text.trim().chars().count();
    if len < FULL_NAME_MIN {
        Err(FieldValidationError::TooShort)
    } else if len > FULL_NAME_MAX {
        Err(FieldValidationError::TooLong)
    } else {
        Ok(())
    }
}

fn validate_size(value: FieldValue<'_>) -> Result<(), FieldValidationError> {
    match value {
        FieldValue::Text(code) if PizzaSize::from_code(code).is_some() => Ok(()),
        _ => Err(FieldValidationError::InvalidSize),
    }
}

fn validate_toppings(value: FieldValue<'_>) -> Result<(), FieldValidationError> {
    let items = match value {
        FieldValue::List(items) => items,
        FieldValue::Text(_) | FieldValue::Missing => {
            return Err(FieldValidationError::ToppingsRequired)
        }
    };
    match items.iter().find(|id| !is_known_topping(id)) {
        Some(unknown) => Err(FieldValidationError::UnknownTopping(unknown.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio_test::{assert_err, assert_ok};

    fn values(full_name: &str, size: &str, toppings: &[&str]) -> FormValues {
        FormValues {
            full_name: full_name.to_string(),
            size: size.to_string(),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
        }
    }

    mod full_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_names_fail() {
            let schema = ValidationSchema::new();
            for name in ["", "A", "Al", "  Al  ", "      "] {
                assert_eq!(
                    schema.validate_field(FieldName::FullName, FieldValue::Text(name)),
                    Err(FieldValidationError::TooShort),
                    "name {name:?}"
                );
            }
        }

        #[test]
        fn test_long_names_fail() {
            let schema = ValidationSchema::new();
            let name = "x".repeat(21);
            assert_eq!(
                schema.validate_field(FieldName::FullName, FieldValue::Text(&name)),
                Err(FieldValidationError::TooLong)
            );
        }

        #[test]
        fn test_names_within_bounds_pass() {
            let schema = ValidationSchema::new();
            let longest = "y".repeat(20);
            for name in ["Ali", "Alice", " Bob Smith ", longest.as_str()] {
                assert_ok!(schema.validate_field(FieldName::FullName, FieldValue::Text(name)));
            }
        }

        #[test]
        fn test_length_counts_characters_after_trim() {
            let schema = ValidationSchema::new();
            // 20 multi-byte characters padded with spaces
            let name = format!("  {}  ", "é".repeat(20));
            assert_ok!(schema.validate_field(FieldName::FullName, FieldValue::Text(&name)));
        }

        #[test]
        fn test_missing_name_is_too_short() {
            let schema = ValidationSchema::new();
            assert_eq!(
                schema.validate_field(FieldName::FullName, FieldValue::Missing),
                Err(FieldValidationError::TooShort)
            );
        }

        #[test]
        fn test_messages() {
            assert_eq!(
                FieldValidationError::TooShort.to_string(),
                "full name must be at least 3 characters"
            );
            assert_eq!(
                FieldValidationError::TooLong.to_string(),
                "full name must be at most 20 characters"
            );
        }
    }

    mod size {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_sizes() {
            let schema = ValidationSchema::new();
            for code in ["S", "M", "L"] {
                assert_ok!(schema.validate_field(FieldName::Size, FieldValue::Text(code)));
            }
        }

        #[test]
        fn test_invalid_sizes() {
            let schema = ValidationSchema::new();
            for code in ["", "s", "XL", "S ", "SM", "Medium"] {
                assert_eq!(
                    schema.validate_field(FieldName::Size, FieldValue::Text(code)),
                    Err(FieldValidationError::InvalidSize),
                    "size {code:?}"
                );
            }
            assert_err!(schema.validate_field(FieldName::Size, FieldValue::Missing));
        }

        #[test]
        fn test_message() {
            assert_eq!(
                FieldValidationError::InvalidSize.to_string(),
                "size must be S or M or L"
            );
        }
    }

    mod toppings {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_list_passes() {
            let schema = ValidationSchema::new();
            assert_ok!(schema.validate_field(FieldName::Toppings, FieldValue::List(&[])));
        }

        #[test]
        fn test_missing_list_fails() {
            let schema = ValidationSchema::new();
            assert_eq!(
                schema.validate_field(FieldName::Toppings, FieldValue::Missing),
                Err(FieldValidationError::ToppingsRequired)
            );
        }

        #[test]
        fn test_unknown_topping_fails() {
            let schema = ValidationSchema::new();
            let items = vec!["1".to_string(), "9".to_string()];
            assert_eq!(
                schema.validate_field(FieldName::Toppings, FieldValue::List(&items)),
                Err(FieldValidationError::UnknownTopping("9".to_string()))
            );
        }
    }

    mod whole_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_with_no_toppings() {
            let schema = ValidationSchema::new();
            assert!(schema.is_valid(&values("Bob Smith", "M", &[])));
        }

        #[test]
        fn test_invalid_when_any_field_fails() {
            let schema = ValidationSchema::new();
            assert!(!schema.is_valid(&values("Al", "S", &["1"])));
            assert!(!schema.is_valid(&values("Alice", "", &["1"])));
            assert!(!schema.is_valid(&values("Alice", "S", &["7"])));
            assert!(schema.is_valid(&values("Alice", "S", &["1"])));
        }

        #[test]
        fn test_default_values_are_invalid() {
            let schema = ValidationSchema::new();
            assert!(!schema.is_valid(&FormValues::default()));
        }

        #[test]
        fn test_validate_all_lists_failures_in_order() {
            let schema = ValidationSchema::new();
            let errors = schema.validate_all(&values("", "X", &[]));
            assert_eq!(
                errors,
                vec![
                    (FieldName::FullName, FieldValidationError::TooShort),
                    (FieldName::Size, FieldValidationError::InvalidSize),
                ]
            );
        }
    }
}
