//! Form domain layer
//!
//! Raw values typed into the registration form and the controller that
//! edits, validates and submits them.

mod field;
mod form_state;

pub use field::{FieldValue, FileRef, FormValues};
pub use form_state::{Form, FormButton, FormInput, RegistrationForm};
