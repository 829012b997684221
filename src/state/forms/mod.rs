//! Form domain layer
//!
//! Values, per-field errors and submission state of the order form,
//! plus the validation schema that checks them.

mod field;
mod form_state;
mod schema;

pub use field::{FieldName, InputKind};
pub use form_state::{FormState, FormValues, SubmitPhase};
#[cfg(test)]
pub use form_state::SubmissionOutcome;
pub use schema::{FieldValidationError, ValidationSchema};
