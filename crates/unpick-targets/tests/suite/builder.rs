use pretty_assertions::assert_eq;
use unpick_targets::{
    MapClassResolver, MappingPosition, RegistryOptions, SignatureCollision, TargetMethods,
    TargetMethodsBuilder, TargetsError,
};

use super::COLOR_OF;

fn builder() -> TargetMethodsBuilder {
    TargetMethods::builder(MapClassResolver::new())
}

#[test]
fn duplicate_parameter_mapping_is_rejected() {
    let err = builder()
        .target_method("pkg/Color", "of", COLOR_OF)
        .unwrap()
        .parameter_group(0, "RED_VALUES")
        .unwrap()
        .parameter_group(0, "GREEN_VALUES")
        .err()
        .unwrap();

    assert_eq!(
        err,
        TargetsError::DuplicateMapping {
            position: MappingPosition::Parameter(0),
            existing: "RED_VALUES".to_owned(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Parameter 0 is already mapped to constant group RED_VALUES"
    );
}

#[test]
fn distinct_parameters_can_share_a_group() {
    let registry = builder()
        .target_method("pkg/Color", "of", COLOR_OF)
        .unwrap()
        .parameter_group(0, "RED_VALUES")
        .unwrap()
        .parameter_group(1, "RED_VALUES")
        .unwrap()
        .add()
        .unwrap()
        .build();

    assert!(registry.targets_parameter("pkg/Color", "of", COLOR_OF, 0));
    assert!(registry.targets_parameter("pkg/Color", "of", COLOR_OF, 1));
}

#[test]
fn parameter_indices_are_not_bounded_by_the_descriptor() {
    let registry = builder()
        .target_method("pkg/Color", "of", COLOR_OF)
        .unwrap()
        .parameter_group(0, "RED_VALUES")
        .unwrap()
        .parameter_group(2, "ALPHA_VALUES")
        .unwrap()
        .add()
        .unwrap()
        .build();

    assert_eq!(
        registry.parameter_constant_group("pkg/Color", "of", COLOR_OF, 2),
        Some("ALPHA_VALUES")
    );
    assert!(!registry.targets_parameter("pkg/Color", "of", COLOR_OF, 1));
}

#[test]
fn malformed_non_ascii_descriptor_is_rejected() {
    let err = builder()
        .target_method("pkg/Color", "of", "(é)V")
        .err()
        .unwrap();

    assert_eq!(err, TargetsError::InvalidDescriptor("(é)V".to_owned()));
}

#[test]
fn duplicate_return_mapping_is_rejected() {
    let err = builder()
        .target_method("pkg/Color", "of", COLOR_OF)
        .unwrap()
        .return_group("COLORS")
        .unwrap()
        .return_group("COLORS")
        .err()
        .unwrap();

    assert_eq!(
        err.to_string(),
        "Return is already mapped to constant group COLORS"
    );
}

#[test]
fn mappings_are_scoped_to_one_method_builder() {
    let registry = builder()
        .target_method("pkg/Color", "of", COLOR_OF)
        .unwrap()
        .parameter_group(0, "RED_VALUES")
        .unwrap()
        .add()
        .unwrap()
        .target_method("pkg/Color", "blend", COLOR_OF)
        .unwrap()
        .parameter_group(0, "BLEND_MODES")
        .unwrap()
        .add()
        .unwrap()
        .build();

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.parameter_constant_group("pkg/Color", "blend", COLOR_OF, 0),
        Some("BLEND_MODES")
    );
}

#[test]
fn same_signature_overwrites_by_default() {
    let registry = builder()
        .target_method("pkg/Color", "of", COLOR_OF)
        .unwrap()
        .parameter_group(0, "RED_VALUES")
        .unwrap()
        .add()
        .unwrap()
        .target_method("pkg/Shade", "of", COLOR_OF)
        .unwrap()
        .parameter_group(1, "SHADES")
        .unwrap()
        .add()
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    let method = registry.get("of", COLOR_OF).unwrap();
    assert_eq!(method.declaring_class(), "pkg/Shade");
    assert_eq!(registry.parameter_constant_group("pkg/Shade", "of", COLOR_OF, 0), None);
    assert_eq!(
        registry.parameter_constant_group("pkg/Shade", "of", COLOR_OF, 1),
        Some("SHADES")
    );
    assert!(registry.targets("pkg/Shade", "of", COLOR_OF));
}

#[test]
fn same_signature_can_be_rejected() {
    let options = RegistryOptions {
        signature_collision: SignatureCollision::Reject,
        ..RegistryOptions::default()
    };
    let err = builder()
        .options(options)
        .target_method("pkg/Color", "of", COLOR_OF)
        .unwrap()
        .add()
        .unwrap()
        .target_method("pkg/Shade", "of", COLOR_OF)
        .unwrap()
        .add()
        .err()
        .unwrap();

    assert_eq!(
        err,
        TargetsError::DuplicateSignature {
            key: format!("of{COLOR_OF}"),
            existing_owner: "pkg/Color".to_owned(),
        }
    );
}

#[test]
fn options_deserialize_from_configuration() {
    let options: RegistryOptions = serde_json::from_value(serde_json::json!({
        "hierarchy_root": "java/lang/Object",
        "signature_collision": "reject",
    }))
    .unwrap();

    let registry = builder().options(options.clone()).build();
    assert_eq!(registry.options(), &options);
    assert!(registry.is_empty());
}
