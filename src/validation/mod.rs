//! Validator: checks form values against the active category's field set
//!
//! Validation is pure. Only fields declared for the category are examined,
//! so values left over from another category never produce errors.

mod result;
mod rules;

pub use result::{ErrorKind, FieldError, ValidationResult};

use crate::schema::{
    field_path, fields_for, Category, FieldKind, FieldSpec, NumberRules, TextRules,
};
use crate::state::{FieldValue, FormValues};
use rules::{is_email, is_phone, is_url};

/// Validate `values` against every field declared for `category`
pub fn validate(category: Category, values: &FormValues) -> ValidationResult {
    let mut result = ValidationResult::default();
    for spec in fields_for(category) {
        validate_field(spec, values, &mut result);
    }
    result
}

/// Validate one top-level field (and its sub-fields) into `result`
pub fn validate_field(spec: &FieldSpec, values: &FormValues, result: &mut ValidationResult) {
    match &spec.kind {
        FieldKind::Compound(sub_fields) => {
            let paths: Vec<_> = sub_fields
                .iter()
                .map(|sub| (sub, field_path(spec.name, sub.name)))
                .collect();

            // An optional block nobody started filling in is absent
            let started = paths.iter().any(|(_, path)| values.is_present(path));
            if !spec.required && !started {
                return;
            }

            for (sub, path) in paths {
                if let Some(error) = check_value(sub, values.get(&path)) {
                    result.insert(path, error);
                }
            }
        }
        _ => {
            if let Some(error) = check_value(spec, values.get(spec.name)) {
                result.insert(spec.name, error);
            }
        }
    }
}

/// Check a single leaf value against its spec
pub fn check_value(spec: &FieldSpec, value: Option<&FieldValue>) -> Option<FieldError> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ if spec.required => return Some(FieldError::required()),
        _ => return None,
    };

    match &spec.kind {
        FieldKind::ShortText(rules) | FieldKind::LongText(rules) => {
            check_length(spec, rules, value.as_text())
        }
        FieldKind::Email => (!is_email(value.as_text()))
            .then(|| format_error(spec, "Invalid email")),
        FieldKind::Url => (!is_url(value.as_text())).then(|| format_error(spec, "Invalid url")),
        FieldKind::Phone { min_len } => (!is_phone(value.as_text(), *min_len))
            .then(|| format_error(spec, "Invalid phone")),
        FieldKind::Choice(options) => (!options.iter().any(|o| *o == value.as_text()))
            .then(|| FieldError::new(ErrorKind::Format, "Invalid option")),
        FieldKind::Number(rules) => check_number(spec, rules, value.as_text()),
        // Multiplicity is enforced when files are attached
        FieldKind::File { .. } => match value {
            FieldValue::Files(_) => None,
            FieldValue::Text(_) => Some(FieldError::new(ErrorKind::Format, "Expected a file")),
        },
        FieldKind::Compound(_) => None,
    }
}

fn format_error(spec: &FieldSpec, default: &str) -> FieldError {
    FieldError::new(ErrorKind::Format, spec.message.unwrap_or(default))
}

fn check_length(spec: &FieldSpec, rules: &TextRules, text: &str) -> Option<FieldError> {
    let len = text.chars().count();
    if let Some(min) = rules.min_len {
        if len < min {
            let message = spec
                .message
                .map(str::to_string)
                .unwrap_or_else(|| format!("Must be at least {min} characters"));
            return Some(FieldError::new(ErrorKind::Length, message));
        }
    }
    if let Some(max) = rules.max_len {
        if len > max {
            return Some(FieldError::new(
                ErrorKind::Length,
                format!("Must be at most {max} characters"),
            ));
        }
    }
    None
}

fn check_number(spec: &FieldSpec, rules: &NumberRules, text: &str) -> Option<FieldError> {
    let number = match parse_number(text) {
        Some(n) => n,
        None => return Some(FieldError::new(ErrorKind::Format, "Expected a number")),
    };

    if rules.integer && number.fract() != 0.0 {
        return Some(FieldError::new(ErrorKind::Format, "Expected a whole number"));
    }
    if rules.integer && number.abs() >= i64::MAX as f64 {
        return Some(FieldError::new(ErrorKind::Bound, "Number is too large"));
    }
    if rules.positive && number <= 0.0 {
        return Some(FieldError::new(ErrorKind::Bound, "Must be greater than 0"));
    }
    if let Some(min) = rules.min {
        if number < min {
            return Some(FieldError::new(
                ErrorKind::Bound,
                format!("Must be at least {min}"),
            ));
        }
    }
    if let Some(max) = rules.max {
        if number > max {
            let message = spec
                .message
                .map(str::to_string)
                .unwrap_or_else(|| format!("Must be at most {max}"));
            return Some(FieldError::new(ErrorKind::Bound, message));
        }
    }
    None
}

/// Parse a finite number from user input
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
