//! Category registry: the ordered field set of every registration category

use super::category::Category;
use super::field_spec::FieldSpec;
use super::fragments::{
    applying_for, compliance_uploads, consent_form, contacts, logo_and_consent,
    online_presence, vehicle_count, vehicle_dimensions, YES_NO_OPTIONS,
};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Upper bound on the mas band bio; the form label asks for ~500 words
const MAS_BAND_BIO_MAX_CHARS: usize = 5000;

static REGISTRY: LazyLock<HashMap<Category, Vec<FieldSpec>>> = LazyLock::new(|| {
    Category::ALL
        .iter()
        .map(|category| (*category, build_fields(*category)))
        .collect()
});

/// Ordered field set declared for `category`
pub fn fields_for(category: Category) -> &'static [FieldSpec] {
    REGISTRY
        .get(&category)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Top-level field `name` as declared for `category`
#[cfg(test)]
pub fn field_for(category: Category, name: &str) -> Option<&'static FieldSpec> {
    fields_for(category).iter().find(|f| f.name == name)
}

fn build_fields(category: Category) -> Vec<FieldSpec> {
    match category {
        Category::PrimaryPerformanceGroup => mas_band(),
        Category::SoundSystem => sound_system(),
        Category::PercussionBand => steelband(),
        Category::SecondaryPerformanceGroup => brazilian_band(),
        Category::VehicleContractor => contractor(),
    }
}

fn band_name() -> FieldSpec {
    FieldSpec::text("bandName", "Band Name").required().min_len(2)
}

fn company_name() -> FieldSpec {
    FieldSpec::text("companyName", "Company Name (optional)")
}

fn mas_band() -> Vec<FieldSpec> {
    let mut fields = vec![
        band_name().message("Band name required"),
        company_name(),
        FieldSpec::long_text("bandBio", "Band Bio (up to 500 words)")
            .max_len(MAS_BAND_BIO_MAX_CHARS),
    ];
    fields.extend(online_presence(FieldSpec::url("website", "Website")));
    fields.extend(contacts());
    fields.push(applying_for());
    fields.extend(logo_and_consent());
    fields.extend([
        FieldSpec::text("theme", "Theme"),
        FieldSpec::long_text("themeSynopsis", "Theme Synopsis"),
        FieldSpec::choice(
            "bandSize",
            "Band Size",
            &["Small (50–99)", "Medium (100–199)", "Large (200+)"],
        ),
        vehicle_count(),
        vehicle_dimensions(),
        FieldSpec::long_text("vehicleModifications", "Vehicle Modifications"),
    ]);
    fields.extend(compliance_uploads());
    fields
}

fn sound_system() -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec::text("soundSystemName", "Sound System Name")
            .required()
            .min_len(2),
        company_name(),
        FieldSpec::long_text("soundSystemBio", "Bio"),
    ];
    fields.extend(online_presence(FieldSpec::text("website", "Website")));
    fields.extend(contacts());
    fields.push(applying_for());
    fields.extend(logo_and_consent());
    fields.extend([
        FieldSpec::choice("licenseType", "License Type", &["T.E.N", "Premises"]),
        FieldSpec::text("powerSource", "Power Source"),
        FieldSpec::text("musicGenre", "Music Genre (comma separated)"),
        FieldSpec::choice("barSite", "Bar Site", YES_NO_OPTIONS),
        FieldSpec::choice("streetTrading", "Street Trading", YES_NO_OPTIONS),
        FieldSpec::file("eventManagementPlan", "Event Management Plan"),
        FieldSpec::files("aaaPassesImages", "AAA Passes Images (up to 2)", Some(2)),
    ]);
    fields.extend(compliance_uploads());
    fields
}

fn steelband() -> Vec<FieldSpec> {
    let mut fields = vec![
        band_name(),
        company_name(),
        FieldSpec::long_text("bandBio", "Band Bio"),
    ];
    fields.extend(online_presence(FieldSpec::text("website", "Website")));
    fields.extend(contacts());
    fields.push(applying_for());
    fields.extend(logo_and_consent());
    fields.extend([
        FieldSpec::number(
            "estimatedNumberOfParticipants",
            "Estimated Number Of Participants",
        )
        .integer()
        .positive(),
        vehicle_count(),
        FieldSpec::long_text("vehicleDescription", "Vehicle Description"),
    ]);
    fields.extend(compliance_uploads());
    fields
}

fn brazilian_band() -> Vec<FieldSpec> {
    let mut fields = vec![
        band_name(),
        company_name(),
        FieldSpec::long_text("bandBio", "Band Bio"),
    ];
    fields.extend(online_presence(FieldSpec::text("website", "Website")));
    fields.extend(contacts());
    fields.push(applying_for());
    fields.extend(logo_and_consent());
    fields.extend([
        FieldSpec::text("theme", "Theme"),
        FieldSpec::long_text("themeSynopsis", "Theme Synopsis"),
        FieldSpec::choice("bandSize", "Band Size", &["Small", "Medium", "Large"]),
        vehicle_count(),
        vehicle_dimensions(),
        FieldSpec::long_text("vehicleModifications", "Vehicle Modifications"),
    ]);
    fields.extend(compliance_uploads());
    fields
}

fn contractor() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("companyName", "Company Name").required().min_len(2),
        consent_form(),
        FieldSpec::text("purposeOfVehiclePass", "Purpose Of Vehicle Pass"),
        FieldSpec::text("vehicleRegistration", "Vehicle Registration"),
        FieldSpec::text("driverName", "Driver Name"),
        FieldSpec::files(
            "driversLicenseCopy",
            "Driver's License (front & back)",
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(category: Category) -> Vec<&'static str> {
        fields_for(category).iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_every_category_has_fields() {
        for category in Category::ALL {
            assert!(!fields_for(category).is_empty(), "{category} has no fields");
        }
    }

    #[test]
    fn test_field_names_unique_within_category() {
        for category in Category::ALL {
            let all = names(category);
            let unique: HashSet<_> = all.iter().collect();
            assert_eq!(all.len(), unique.len(), "duplicate field in {category}");
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        let first = fields_for(Category::SoundSystem);
        let second = fields_for(Category::SoundSystem);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_band_name_leads_band_categories() {
        for category in [
            Category::PrimaryPerformanceGroup,
            Category::PercussionBand,
            Category::SecondaryPerformanceGroup,
        ] {
            let first = &fields_for(category)[0];
            assert_eq!(first.name, "bandName");
            assert!(first.required);
        }
    }

    #[test]
    fn test_company_name_required_only_for_contractor() {
        for category in Category::ALL {
            let spec = field_for(category, "companyName").unwrap();
            assert_eq!(
                spec.required,
                category == Category::VehicleContractor,
                "{category}"
            );
        }
    }

    #[test]
    fn test_vehicle_dimensions_declared_by_performance_groups() {
        let declaring: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| field_for(*c, "vehicleDimensions").is_some())
            .collect();
        assert_eq!(
            declaring,
            [
                Category::PrimaryPerformanceGroup,
                Category::SecondaryPerformanceGroup
            ]
        );
    }

    #[test]
    fn test_contractor_has_no_contacts() {
        assert!(field_for(Category::VehicleContractor, "contact1").is_none());
        assert_eq!(
            names(Category::VehicleContractor),
            [
                "companyName",
                "informationSharingConsentForm",
                "purposeOfVehiclePass",
                "vehicleRegistration",
                "driverName",
                "driversLicenseCopy"
            ]
        );
    }

    #[test]
    fn test_band_size_options_differ_between_groups() {
        let mas = field_for(Category::PrimaryPerformanceGroup, "bandSize").unwrap();
        let brazilian = field_for(Category::SecondaryPerformanceGroup, "bandSize").unwrap();
        assert_eq!(mas.options()[0], "Small (50–99)");
        assert_eq!(brazilian.options()[0], "Small");
    }

    #[test]
    fn test_compliance_uploads_in_every_band_category() {
        for category in [
            Category::PrimaryPerformanceGroup,
            Category::SoundSystem,
            Category::PercussionBand,
            Category::SecondaryPerformanceGroup,
        ] {
            for name in ["termsAndConditions", "riskAssessment", "insuranceDocuments"] {
                assert!(field_for(category, name).is_some(), "{category} lacks {name}");
            }
        }
    }
}
