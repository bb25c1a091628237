//! Unit tests for resource registration and lookup.

use rstest::{fixture, rstest};

use super::{ResourceCatalog, ResourceEntry, ResourceRef, ResourceRegistry, Symbol};
use crate::{ArmError, CamelStyle, KeyStyle, ResolveOperation};

#[fixture]
fn registry() -> ResourceRegistry {
    let mut registry = ResourceRegistry::new();
    registry
        .insert(ResourceEntry::new(
            "test_network_security_groups",
            "Microsoft.Network/networkSecurityGroups",
        ))
        .expect("first declaration succeeds");
    registry
}

#[rstest]
fn resolves_declared_names(registry: ResourceRegistry) {
    let entry = registry
        .resolve(&Symbol::new("test_network_security_groups"), ResolveOperation::DependsOn)
        .expect("declared resource resolves");
    assert_eq!(
        entry.qualified_name(&KeyStyle::default()),
        "Microsoft.Network/networkSecurityGroups/testNetworkSecurityGroups"
    );
}

#[rstest]
fn qualified_name_follows_key_style(registry: ResourceRegistry) {
    let entry = registry
        .get("test_network_security_groups")
        .expect("declared resource");
    let style = KeyStyle::new(true, CamelStyle::Leading);
    assert_eq!(entry.rendered_name(&style), "TestNetworkSecurityGroups");
}

#[rstest]
fn unknown_names_report_operation(registry: ResourceRegistry) {
    let err = registry
        .resolve(&Symbol::new("unknown_network_security_groups"), ResolveOperation::ResourceId)
        .expect_err("undeclared resource must fail");
    assert!(matches!(
        err,
        ArmError::ResourceNotFound {
            ref name,
            operation: ResolveOperation::ResourceId,
        } if name == "unknown_network_security_groups"
    ));
}

#[rstest]
fn duplicate_declarations_are_rejected(mut registry: ResourceRegistry) {
    let err = registry
        .insert(ResourceEntry::new("test_network_security_groups", "Other/type"))
        .expect_err("duplicate must fail");
    assert!(matches!(err, ArmError::DuplicateResource { .. }));
    assert_eq!(registry.len(), 1);
}

#[test]
fn strings_are_literal_references() {
    assert_eq!(ResourceRef::from("type1/name_1"), ResourceRef::literal("type1/name_1"));
    assert_eq!(
        ResourceRef::from(Symbol::new("web")),
        ResourceRef::declared("web")
    );
}

#[test]
fn azure_catalog_knows_network_security_groups() {
    let catalog = ResourceCatalog::azure();
    let entry = catalog
        .lookup("network_security_groups")
        .expect("built-in kind");
    assert_eq!(entry.provider_type(), "Microsoft.Network/networkSecurityGroups");
    assert_eq!(entry.api_version(), "2015-06-15");
}

#[test]
fn unknown_kinds_fail_lookup() {
    let err = ResourceCatalog::empty()
        .lookup("virtual_machines")
        .expect_err("empty catalog");
    assert!(matches!(
        err,
        ArmError::UnknownResourceKind { ref kind } if kind == "virtual_machines"
    ));
}
