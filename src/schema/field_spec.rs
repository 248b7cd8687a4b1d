//! Declarative field descriptions

/// Length limits for free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRules {
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
}

/// Numeric constraints. Values are entered as text and parsed on validation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumberRules {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub integer: bool,
    pub positive: bool,
}

/// Semantic type of a field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    ShortText(TextRules),
    LongText(TextRules),
    Email,
    Phone { min_len: usize },
    Url,
    Choice(&'static [&'static str]),
    Number(NumberRules),
    /// File references; `max_files` only applies when `multiple` is set
    File {
        multiple: bool,
        max_files: Option<usize>,
    },
    /// A block of sub-fields validated as a unit
    Compound(Vec<FieldSpec>),
}

/// One form field: its name, type, and constraints
///
/// `message` overrides the text reported for the field's main constraint:
/// the minimum length of text, the format of email/phone/url, or the upper
/// bound of a number. A missing required value is always reported as
/// "Required".
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub message: Option<&'static str>,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            message: None,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::ShortText(TextRules::default()))
    }

    pub fn long_text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::LongText(TextRules::default()))
    }

    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn phone(name: &'static str, label: &'static str, min_len: usize) -> Self {
        Self::new(name, label, FieldKind::Phone { min_len })
    }

    pub fn url(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Url)
    }

    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(name, label, FieldKind::Choice(options))
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number(NumberRules::default()))
    }

    /// Single file reference
    pub fn file(name: &'static str, label: &'static str) -> Self {
        Self::new(
            name,
            label,
            FieldKind::File {
                multiple: false,
                max_files: None,
            },
        )
    }

    /// Multiple file references, optionally capped
    pub fn files(name: &'static str, label: &'static str, max_files: Option<usize>) -> Self {
        Self::new(
            name,
            label,
            FieldKind::File {
                multiple: true,
                max_files,
            },
        )
    }

    pub fn compound(name: &'static str, label: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self::new(name, label, FieldKind::Compound(fields))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    pub fn min_len(mut self, min: usize) -> Self {
        if let FieldKind::ShortText(rules) | FieldKind::LongText(rules) = &mut self.kind {
            rules.min_len = Some(min);
        }
        self
    }

    pub fn max_len(mut self, max: usize) -> Self {
        if let FieldKind::ShortText(rules) | FieldKind::LongText(rules) = &mut self.kind {
            rules.max_len = Some(max);
        }
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        if let FieldKind::Number(rules) = &mut self.kind {
            rules.min = Some(min);
        }
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        if let FieldKind::Number(rules) = &mut self.kind {
            rules.max = Some(max);
        }
        self
    }

    pub fn integer(mut self) -> Self {
        if let FieldKind::Number(rules) = &mut self.kind {
            rules.integer = true;
        }
        self
    }

    pub fn positive(mut self) -> Self {
        if let FieldKind::Number(rules) = &mut self.kind {
            rules.positive = true;
        }
        self
    }

    /// Sub-fields of a compound field (empty for leaf fields)
    pub fn sub_fields(&self) -> &[FieldSpec] {
        match &self.kind {
            FieldKind::Compound(fields) => fields,
            _ => &[],
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self.kind, FieldKind::Compound(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, FieldKind::File { .. })
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::LongText(_))
    }

    /// Options of a choice field (empty for other kinds)
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Choice(options) => options,
            _ => &[],
        }
    }
}

/// Join a parent field name and a sub-field name into a value path
pub fn field_path(parent: &str, child: &str) -> String {
    format!("{parent}.{child}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_default_to_optional() {
        let spec = FieldSpec::text("theme", "Theme");
        assert!(!spec.required);
        assert!(spec.message.is_none());
        assert_eq!(spec.kind, FieldKind::ShortText(TextRules::default()));
    }

    #[test]
    fn test_min_len_applies_to_text_only() {
        let text = FieldSpec::text("bandName", "Band Name").min_len(2);
        assert_eq!(
            text.kind,
            FieldKind::ShortText(TextRules {
                min_len: Some(2),
                max_len: None
            })
        );

        let email = FieldSpec::email("contactEmail", "Email").min_len(2);
        assert_eq!(email.kind, FieldKind::Email);
    }

    #[test]
    fn test_number_modifiers() {
        let spec = FieldSpec::number("height", "Height").min(0.0).max(4.4);
        match spec.kind {
            FieldKind::Number(rules) => {
                assert_eq!(rules.min, Some(0.0));
                assert_eq!(rules.max, Some(4.4));
                assert!(!rules.integer);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_sub_fields() {
        let block = FieldSpec::compound(
            "contact1",
            "Contact",
            vec![FieldSpec::text("contactName", "Name")],
        );
        assert!(block.is_compound());
        assert_eq!(block.sub_fields().len(), 1);
        assert!(FieldSpec::text("a", "A").sub_fields().is_empty());
    }

    #[test]
    fn test_file_kinds() {
        assert!(FieldSpec::file("logoUpload", "Logo").is_file());
        assert_eq!(
            FieldSpec::files("aaaPassesImages", "AAA", Some(2)).kind,
            FieldKind::File {
                multiple: true,
                max_files: Some(2)
            }
        );
    }

    #[test]
    fn test_field_path() {
        assert_eq!(field_path("contact1", "contactEmail"), "contact1.contactEmail");
    }
}
