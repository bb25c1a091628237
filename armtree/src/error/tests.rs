//! Unit tests for error construction and display.

use rstest::rstest;

use super::{ArmError, ResolveOperation};

#[rstest]
#[case(ResolveOperation::DependsOn, "depends_on")]
#[case(ResolveOperation::ResourceId, "resource_id")]
#[case(ResolveOperation::Reference, "reference")]
#[case(ResolveOperation::argument_of("concat"), "argument of concat()")]
fn operation_names_match_builders(#[case] operation: ResolveOperation, #[case] expected: &str) {
    assert_eq!(operation.to_string(), expected);
}

#[rstest]
#[case("resourceId", ResolveOperation::ResourceId)]
#[case("concat", ResolveOperation::Argument { function: "concat".into() })]
#[case("index", ResolveOperation::Argument { function: "index".into() })]
fn arguments_report_their_receiving_function(
    #[case] function: &str,
    #[case] expected: ResolveOperation,
) {
    assert_eq!(ResolveOperation::argument_of(function), expected);
}

#[test]
fn not_found_reports_name_and_operation() {
    let err = ArmError::resource_not_found("unknown_sg", ResolveOperation::ResourceId);
    assert_eq!(
        err.to_string(),
        "resource 'unknown_sg' not found (referenced by resource_id)"
    );
    assert_eq!(err.unresolved_name(), Some("unknown_sg"));
}

#[test]
fn other_variants_have_no_unresolved_name() {
    let err = ArmError::DuplicateResource { name: "web".into() };
    assert!(err.unresolved_name().is_none());
}

#[test]
fn figment_errors_become_settings_errors() {
    let err: ArmError = figment::Error::from("boom").into();
    assert!(matches!(err, ArmError::Settings(_)), "unexpected variant: {err:?}");
}
