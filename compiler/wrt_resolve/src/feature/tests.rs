use wrt_meta::{AttrArg, Attribute, Field, TypeCategory, TypeName, METADATA_NAMESPACE};

use super::*;

fn gated(value: i32) -> TypeDef {
    TypeDef::interface("Demo", "IGated").with_attribute(
        Attribute::metadata(well_known::FEATURE).with_arg(AttrArg::Enum(EnumArg {
            enum_type: TypeName::new(METADATA_NAMESPACE, "FeatureStage"),
            value,
        })),
    )
}

#[test]
fn ungated_type_is_enabled() {
    let repo = Repository::new();
    let def = TypeDef::interface("Demo", "IOpen");

    assert!(is_always_enabled(&repo, &def));
    assert!(!is_always_disabled(&repo, &def, &ResolveSettings::default()));
    assert_eq!(feature_stage(&repo, &def), None);
}

#[test]
fn well_known_values_without_stage_enum() {
    let repo = Repository::new();

    assert!(is_always_disabled(&repo, &gated(0), &ResolveSettings::default()));
    assert!(!is_always_enabled(&repo, &gated(0)));
    assert!(!is_always_enabled(&repo, &gated(2)));
    assert!(is_always_enabled(&repo, &gated(3)));
}

#[test]
fn stage_enum_definition_takes_precedence() {
    let mut repo = Repository::new();
    // A stage enum with shuffled values.
    repo.insert(
        TypeDef::new(TypeCategory::Enum, METADATA_NAMESPACE, "FeatureStage")
            .with_field(Field::enumerator("AlwaysEnabled", 0))
            .with_field(Field::enumerator("AlwaysDisabled", 3)),
    );

    assert_eq!(feature_stage(&repo, &gated(0)), Some(FeatureStage::AlwaysEnabled));
    assert!(is_always_enabled(&repo, &gated(0)));
    assert!(is_always_disabled(&repo, &gated(3), &ResolveSettings::default()));
}

#[test]
fn ignore_velocity_overrides_disabled() {
    let repo = Repository::new();
    let settings = ResolveSettings::default().with_ignore_velocity(true);

    assert!(!is_always_disabled(&repo, &gated(0), &settings));
}

#[test]
fn malformed_feature_attribute_counts_as_absent() {
    let repo = Repository::new();
    let def = TypeDef::interface("Demo", "IOdd")
        .with_attribute(Attribute::metadata(well_known::FEATURE).with_arg(AttrArg::U32(0)));

    assert!(is_always_enabled(&repo, &def));
    assert!(!is_always_disabled(&repo, &def, &ResolveSettings::default()));
}

#[test]
fn fastabi_requires_setting_and_attribute() {
    let def = TypeDef::class("Demo", "Widget")
        .with_attribute(Attribute::metadata(well_known::FAST_ABI));

    assert!(!has_fastabi(&def, &ResolveSettings::default()));
    assert!(has_fastabi(&def, &ResolveSettings::default().with_fastabi(true)));
    assert!(!has_fastabi(
        &TypeDef::class("Demo", "Plain"),
        &ResolveSettings::default().with_fastabi(true)
    ));
}
