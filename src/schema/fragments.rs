//! Field groups shared between categories

use super::field_spec::FieldSpec;

pub const APPLYING_FOR_OPTIONS: &[&str] = &["Sunday Only", "Monday Only", "Sunday & Monday"];
pub const VEHICLE_COUNT_OPTIONS: &[&str] = &["1", "2"];
pub const YES_NO_OPTIONS: &[&str] = &["Yes", "No"];

/// Vehicles taller than this cannot pass under the route's bridges
pub const MAX_VEHICLE_HEIGHT_M: f64 = 4.4;
pub const MAX_VEHICLE_HEIGHT_MESSAGE: &str = "Max height 4.4m (14.4ft)";

/// Name/email/phone block for a correspondent
pub fn contact(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::compound(
        name,
        label,
        vec![
            FieldSpec::text("contactName", "Name")
                .required()
                .min_len(2)
                .message("Required"),
            FieldSpec::email("contactEmail", "Email")
                .required()
                .message("Invalid email"),
            FieldSpec::phone("contactPhone", "Phone", 7)
                .required()
                .message("Invalid phone"),
        ],
    )
}

/// Primary correspondent (required) and an optional second one
pub fn contacts() -> Vec<FieldSpec> {
    vec![
        contact("contact1", "Correspondent Contact 1").required(),
        contact("contact2", "Correspondent Contact 2 (optional)"),
    ]
}

/// Website and social handles. `website` decides how strictly the site is checked.
pub fn online_presence(website: FieldSpec) -> Vec<FieldSpec> {
    vec![
        website,
        FieldSpec::text("instagram", "Instagram"),
        FieldSpec::text("facebook", "Facebook"),
    ]
}

pub fn applying_for() -> FieldSpec {
    FieldSpec::choice("applyingFor", "Applying For", APPLYING_FOR_OPTIONS).required()
}

pub fn consent_form() -> FieldSpec {
    FieldSpec::file("informationSharingConsentForm", "Consent Form")
}

pub fn logo_and_consent() -> Vec<FieldSpec> {
    vec![FieldSpec::file("logoUpload", "Logo Upload"), consent_form()]
}

pub fn vehicle_count() -> FieldSpec {
    FieldSpec::choice("vehicleCount", "Vehicle Count", VEHICLE_COUNT_OPTIONS)
}

/// Length/width/height block, all in metres
pub fn vehicle_dimensions() -> FieldSpec {
    FieldSpec::compound(
        "vehicleDimensions",
        "Vehicle Dimensions (m)",
        vec![
            FieldSpec::number("length", "Length").required().min(0.0),
            FieldSpec::number("width", "Width").required().min(0.0),
            FieldSpec::number("height", "Height")
                .required()
                .min(0.0)
                .max(MAX_VEHICLE_HEIGHT_M)
                .message(MAX_VEHICLE_HEIGHT_MESSAGE),
        ],
    )
}

/// Terms & Conditions, Risk Assessment and Insurance uploads
pub fn compliance_uploads() -> Vec<FieldSpec> {
    vec![
        FieldSpec::file("termsAndConditions", "Terms & Conditions"),
        FieldSpec::file("riskAssessment", "Risk Assessment"),
        FieldSpec::file("insuranceDocuments", "Insurance Documents"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    #[test]
    fn test_contact_sub_fields_are_required() {
        let block = contact("contact2", "Contact 2");
        assert!(!block.required);
        assert!(block.sub_fields().iter().all(|f| f.required));
        let names: Vec<_> = block.sub_fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["contactName", "contactEmail", "contactPhone"]);
    }

    #[test]
    fn test_contacts_first_required_second_optional() {
        let blocks = contacts();
        assert!(blocks[0].required);
        assert!(!blocks[1].required);
    }

    #[test]
    fn test_vehicle_height_bound() {
        let dims = vehicle_dimensions();
        let height = dims
            .sub_fields()
            .iter()
            .find(|f| f.name == "height")
            .unwrap();
        match height.kind {
            FieldKind::Number(rules) => assert_eq!(rules.max, Some(MAX_VEHICLE_HEIGHT_M)),
            ref other => panic!("unexpected kind {other:?}"),
        }
        assert_eq!(height.message, Some(MAX_VEHICLE_HEIGHT_MESSAGE));
    }

    #[test]
    fn test_compliance_uploads_names() {
        let names: Vec<_> = compliance_uploads().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["termsAndConditions", "riskAssessment", "insuranceDocuments"]
        );
    }
}
