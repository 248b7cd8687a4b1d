//! Registration schema: categories and the fields each one declares

mod category;
mod field_spec;
pub mod fragments;
mod registry;

pub use category::Category;
pub use field_spec::{field_path, FieldKind, FieldSpec, NumberRules, TextRules};
pub use registry::fields_for;
#[cfg(test)]
pub use registry::field_for;
