//! Form field value objects

use std::fmt;
use std::str::FromStr;

/// Fields of the order form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FullName,
    Size,
    Toppings,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [Self::FullName, Self::Size, Self::Toppings];

    /// Name used in the JSON body and by the input controls
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Size => "size",
            Self::Toppings => "toppings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Size => "Size",
            Self::Toppings => "Toppings",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Kind of control that produced a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Select,
    /// Checkbox state after the click
    Checkbox { checked: bool },
}

/// Borrowed view of a single field's value, as handed to the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    /// Field absent from the submitted values
    #[allow(dead_code)]
    Missing,
}

/// Owned value snapshot, moved into spawned validation tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedFieldValue {
    Text(String),
    List(Vec<String>),
}

impl OwnedFieldValue {
    pub fn as_value(&self) -> FieldValue<'_> {
        match self {
            Self::Text(s) => FieldValue::Text(s),
            Self::List(items) => FieldValue::List(items),
        }
    }
}
