//! Form domain layer
//!
//! Field declarations, validation rules and the submission controller used
//! by the login, register and recover screens.

mod controller;
mod field;
mod flows;
mod form_state;
mod rules;
mod submission;
mod validation;

pub use field::FormField;
pub use flows::FlowKind;
pub use form_state::{Focus, Form, FormAction, FormScreen};
pub use submission::{SubmitAck, SubmitError, SubmitSuccess};
pub use validation::FieldValues;

#[cfg(test)]
pub use submission::SubmissionState;
