//! Normalized submission payload

use crate::error::SubmissionError;
use crate::schema::{field_path, fields_for, Category, FieldKind, FieldSpec};
use crate::state::{FieldValue, FileRef, FormValues};
use crate::validation::parse_number;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Number, Value};
use uuid::Uuid;

/// Validated form data restricted to the active category's fields.
///
/// File fields are reduced to ordered lists of file names and numbers are
/// emitted as JSON numbers. Empty optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub category: Category,
    pub fields: Map<String, Value>,
}

impl Submission {
    /// Build the payload for `category` from `values`.
    ///
    /// Callers are expected to have validated `values` first.
    pub fn from_values(category: Category, values: &FormValues) -> Self {
        let fields = fields_for(category)
            .iter()
            .filter_map(|spec| normalize_field(spec, values).map(|v| (spec.name.to_string(), v)))
            .collect();

        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            category,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn to_json_pretty(&self) -> Result<String, SubmissionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn normalize_field(spec: &FieldSpec, values: &FormValues) -> Option<Value> {
    match &spec.kind {
        FieldKind::Compound(sub_fields) => {
            let block: Map<String, Value> = sub_fields
                .iter()
                .filter_map(|sub| {
                    let value = values.get(&field_path(spec.name, sub.name))?;
                    normalize_value(sub, value).map(|v| (sub.name.to_string(), v))
                })
                .collect();
            (!block.is_empty()).then_some(Value::Object(block))
        }
        _ => values
            .get(spec.name)
            .and_then(|value| normalize_value(spec, value)),
    }
}

fn normalize_value(spec: &FieldSpec, value: &FieldValue) -> Option<Value> {
    if value.is_empty() {
        return None;
    }
    match (&spec.kind, value) {
        (_, FieldValue::Files(files)) => Some(file_names(files)),
        (FieldKind::Number(rules), FieldValue::Text(text)) => {
            let number = parse_number(text)?;
            if rules.integer && number.abs() < i64::MAX as f64 {
                Some(Value::from(number as i64))
            } else {
                Number::from_f64(number).map(Value::Number)
            }
        }
        (_, FieldValue::Text(text)) => Some(Value::String(text.trim().to_string())),
    }
}

fn file_names(files: &[FileRef]) -> Value {
    Value::Array(
        files
            .iter()
            .map(|file| Value::String(file.file_name()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn steelband_values() -> FormValues {
        let mut values: FormValues = [
            ("bandName", "Steel Pan Collective"),
            ("applyingFor", "Sunday & Monday"),
            ("contact1.contactName", "Ann Jones"),
            ("contact1.contactEmail", "ann@example.com"),
            ("contact1.contactPhone", "020 7946 0000"),
            ("estimatedNumberOfParticipants", "40"),
        ]
        .into_iter()
        .collect();
        values.set(
            "riskAssessment",
            vec![FileRef::new("/home/pan/docs/risk-2024.pdf")],
        );
        values
    }

    #[test]
    fn test_restricts_to_active_category() {
        let mut values = steelband_values();
        values.set("soundSystemName", "Bass Foundation");
        values.set("driverName", "Carl");

        let submission = Submission::from_values(Category::PercussionBand, &values);
        assert_eq!(submission.category, Category::PercussionBand);
        assert!(submission.field("soundSystemName").is_none());
        assert!(submission.field("driverName").is_none());
        assert_eq!(
            submission.field("bandName"),
            Some(&json!("Steel Pan Collective"))
        );
    }

    #[test]
    fn test_files_become_file_names() {
        let submission = Submission::from_values(Category::PercussionBand, &steelband_values());
        assert_eq!(
            submission.field("riskAssessment"),
            Some(&json!(["risk-2024.pdf"]))
        );
    }

    #[test]
    fn test_compound_fields_become_objects() {
        let submission = Submission::from_values(Category::PercussionBand, &steelband_values());
        assert_eq!(
            submission.field("contact1"),
            Some(&json!({
                "contactName": "Ann Jones",
                "contactEmail": "ann@example.com",
                "contactPhone": "020 7946 0000"
            }))
        );
        assert!(submission.field("contact2").is_none());
    }

    #[test]
    fn test_numbers_are_json_numbers() {
        let mut values = steelband_values();
        values.set("vehicleDimensions.length", "10");
        values.set("vehicleDimensions.width", "2.5");
        values.set("vehicleDimensions.height", "4.4");

        let steel = Submission::from_values(Category::PercussionBand, &values);
        assert_eq!(steel.field("estimatedNumberOfParticipants"), Some(&json!(40)));

        let mas = Submission::from_values(Category::PrimaryPerformanceGroup, &values);
        assert_eq!(
            mas.field("vehicleDimensions"),
            Some(&json!({ "length": 10.0, "width": 2.5, "height": 4.4 }))
        );
    }

    #[test]
    fn test_empty_optional_fields_are_omitted() {
        let mut values = steelband_values();
        values.set("theme", "");
        values.set("instagram", "  ");
        let submission = Submission::from_values(Category::PercussionBand, &values);
        assert!(submission.field("instagram").is_none());
        assert_eq!(submission.fields.len(), 5);
    }

    #[test]
    fn test_json_shape() {
        let submission = Submission::from_values(Category::PercussionBand, &steelband_values());
        let json: Value = serde_json::from_str(&submission.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["category"], json!("percussion-band"));
        assert_eq!(json["id"], json!(submission.id.to_string()));
        assert_eq!(json["fields"]["bandName"], json!("Steel Pan Collective"));
    }

    #[test]
    fn test_each_submission_gets_fresh_id() {
        let values = steelband_values();
        let a = Submission::from_values(Category::PercussionBand, &values);
        let b = Submission::from_values(Category::PercussionBand, &values);
        assert_ne!(a.id, b.id);
    }
}
