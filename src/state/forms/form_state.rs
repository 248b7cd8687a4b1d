//! Form controller for the registration form

use super::field::{FieldValue, FileRef, FormValues};
use crate::error::FormError;
use crate::schema::{field_path, fields_for, Category, FieldKind, FieldSpec};
use crate::submission::Submission;
use crate::validation::{validate, FieldError, ValidationResult};
use std::collections::HashSet;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// One editable input. Compound fields expand to one input per sub-field.
#[derive(Debug, Clone)]
pub struct FormInput {
    /// Value path (`bandName`, `contact1.contactEmail`)
    pub path: String,
    pub label: String,
    pub spec: &'static FieldSpec,
    /// Enclosing compound field, if any
    pub group: Option<&'static FieldSpec>,
}

impl FormInput {
    /// Whether the label should carry a required marker
    pub fn is_required(&self) -> bool {
        self.spec.required && self.group.is_none_or(|g| g.required)
    }
}

/// Flattened inputs for `category`, in declaration order
pub fn inputs_for(category: Category) -> Vec<FormInput> {
    let mut inputs = Vec::new();
    for spec in fields_for(category) {
        if spec.is_compound() {
            inputs.extend(spec.sub_fields().iter().map(|sub| FormInput {
                path: field_path(spec.name, sub.name),
                label: format!("{} / {}", spec.label, sub.label),
                spec: sub,
                group: Some(spec),
            }));
        } else {
            inputs.push(FormInput {
                path: spec.name.to_string(),
                label: spec.label.to_string(),
                spec,
                group: None,
            });
        }
    }
    inputs
}

/// Buttons on the action row below the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Submit => Self::Reset,
            Self::Reset => Self::Submit,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Reset => "Reset",
        }
    }
}

/// Category selection plus the values typed so far.
///
/// Values are kept for every path ever edited, so switching category and
/// back restores what was entered for shared fields.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    category: Category,
    values: FormValues,
    errors: ValidationResult,
    inputs: Vec<FormInput>,
    /// Index into `inputs`; `inputs.len()` is the action row
    active_index: usize,
    pub selected_button: FormButton,
    /// Path being typed into the active file input
    pending_path: String,
    /// Choice paths still holding an option the user never picked
    seeded: HashSet<String>,
}

impl RegistrationForm {
    pub fn new(category: Category) -> Self {
        let mut form = Self {
            category,
            values: FormValues::new(),
            errors: ValidationResult::default(),
            inputs: inputs_for(category),
            active_index: 0,
            selected_button: FormButton::default(),
            pending_path: String::new(),
            seeded: HashSet::new(),
        };
        form.seed_choice_defaults();
        form
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Switch the visible field set. Entered values are kept.
    pub fn set_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        tracing::debug!(from = %self.category, to = %category, "Switching category");
        self.category = category;
        self.inputs = inputs_for(category);
        self.active_index = 0;
        self.errors = ValidationResult::default();
        self.pending_path.clear();
        self.seed_choice_defaults();
    }

    /// Choice inputs behave like a select box: they always show an option.
    ///
    /// Defaults left over from the previous category are dropped first so
    /// they never fail validation against this category's options.
    fn seed_choice_defaults(&mut self) {
        for path in self.seeded.drain() {
            self.values.remove(&path);
        }
        for input in &self.inputs {
            if let Some(first) = input.spec.options().first() {
                if !self.values.is_present(&input.path) {
                    self.values.set(input.path.clone(), *first);
                    self.seeded.insert(input.path.clone());
                }
            }
        }
    }

    /// Store `value` at `path`, clearing any stale error there
    pub fn set_field(&mut self, path: &str, value: impl Into<FieldValue>) {
        self.values.set(path, value);
        self.errors.remove(path);
        self.seeded.remove(path);
    }

    pub fn value(&self, path: &str) -> Option<&FieldValue> {
        self.values.get(path)
    }

    #[cfg(test)]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Field specs of the active category
    pub fn visible_fields(&self) -> &'static [FieldSpec] {
        fields_for(self.category)
    }

    pub fn inputs(&self) -> &[FormInput] {
        &self.inputs
    }

    pub fn input(&self, path: &str) -> Option<&FormInput> {
        self.inputs.iter().find(|input| input.path == path)
    }

    pub fn active_input(&self) -> Option<&FormInput> {
        self.inputs.get(self.active_index)
    }

    pub fn is_action_row_active(&self) -> bool {
        self.active_index >= self.inputs.len()
    }

    /// Errors from the last failed submit
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn error_for(&self, path: &str) -> Option<&FieldError> {
        self.errors.error(path)
    }

    pub fn pending_path(&self) -> &str {
        &self.pending_path
    }

    /// Validate the current values against the active category
    pub fn validate(&self) -> ValidationResult {
        validate(self.category, &self.values)
    }

    /// Validate and, on success, build the normalized submission.
    ///
    /// On failure the result is kept for inline display and returned.
    pub fn submit(&mut self) -> Result<Submission, ValidationResult> {
        let result = self.validate();
        if !result.is_valid() {
            tracing::debug!(
                category = %self.category,
                errors = result.len(),
                "Registration failed validation"
            );
            self.errors = result.clone();
            return Err(result);
        }
        self.errors = ValidationResult::default();
        Ok(Submission::from_values(self.category, &self.values))
    }

    /// Attach a file to a file input of the active category.
    ///
    /// Single-file inputs replace their file; multi-file inputs append up to
    /// their limit.
    pub fn attach_file(&mut self, path: &str, file: FileRef) -> Result<(), FormError> {
        let spec = self
            .input(path)
            .map(|input| input.spec)
            .ok_or_else(|| FormError::UnknownField(path.to_string()))?;

        let FieldKind::File {
            multiple,
            max_files,
        } = spec.kind
        else {
            return Err(FormError::NotAFileField(path.to_string()));
        };

        let mut files = if multiple {
            self.values
                .get(path)
                .map(|v| v.files().to_vec())
                .unwrap_or_default()
        } else {
            Vec::new()
        };
        if let Some(max) = max_files.filter(|_| multiple) {
            if files.len() >= max {
                return Err(FormError::TooManyFiles {
                    field: path.to_string(),
                    max,
                });
            }
        }
        files.push(file);
        self.set_field(path, files);
        Ok(())
    }

    /// Detach every file from the active file input
    pub fn clear_files(&mut self) {
        let Some(input) = self.active_input() else {
            return;
        };
        if input.spec.is_file() {
            let path = input.path.clone();
            self.values.remove(&path);
            self.pending_path.clear();
        }
    }

    /// Attach the path typed into the active file input
    pub fn attach_pending(&mut self) -> Result<(), FormError> {
        let typed = self.pending_path.trim().to_string();
        if typed.is_empty() {
            return Ok(());
        }
        let Some(path) = self.active_input().map(|input| input.path.clone()) else {
            return Ok(());
        };
        self.attach_file(&path, FileRef::new(typed))?;
        self.pending_path.clear();
        Ok(())
    }

    /// Type a character into the active input
    pub fn input_char(&mut self, c: char) {
        let Some(input) = self.active_input() else {
            return;
        };
        let path = input.path.clone();
        match input.spec.kind {
            FieldKind::File { .. } => self.pending_path.push(c),
            FieldKind::Choice(_) => {}
            _ => {
                self.values.entry(&path).push_char(c);
                self.errors.remove(&path);
            }
        }
    }

    /// Delete the last character; on an empty file input, detach the last file
    pub fn backspace(&mut self) {
        let Some(input) = self.active_input() else {
            return;
        };
        let path = input.path.clone();
        match input.spec.kind {
            FieldKind::File { .. } => {
                if self.pending_path.pop().is_none() {
                    if let Some(FieldValue::Files(files)) = self.values.get_mut(&path) {
                        files.pop();
                    }
                }
            }
            FieldKind::Choice(_) => {}
            _ => {
                if let Some(value) = self.values.get_mut(&path) {
                    value.pop_char();
                }
                self.errors.remove(&path);
            }
        }
    }

    /// Insert a line break into the active multiline input
    pub fn newline(&mut self) {
        if let Some(input) = self.active_input() {
            if input.spec.is_multiline() {
                let path = input.path.clone();
                self.values.entry(&path).push_char('\n');
            }
        }
    }

    /// Move the active choice input to its next/previous option
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(input) = self.active_input() else {
            return;
        };
        let options = input.spec.options();
        if options.is_empty() {
            return;
        }
        let path = input.path.clone();
        let current = options
            .iter()
            .position(|o| *o == self.values.text(&path));
        let next = match current {
            Some(i) if forward => (i + 1) % options.len(),
            Some(i) => (i + options.len() - 1) % options.len(),
            None => 0,
        };
        self.set_field(&path, options[next]);
    }

    /// Focus the first input carrying an error
    pub fn focus_first_error(&mut self) {
        if let Some(index) = self
            .inputs
            .iter()
            .position(|input| self.errors.error(&input.path).is_some())
        {
            self.set_active_field(index);
        }
    }

    /// Discard all values and start over in the same category
    pub fn reset(&mut self) {
        *self = Self::new(self.category);
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        self.inputs.len() + 1 // inputs + action row
    }
    fn active_field(&self) -> usize {
        self.active_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_index = index.min(self.inputs.len());
        self.pending_path.clear();
    }
}
