//! Integration tests for symbolic resource references.
//!
//! Covers `dependsOn` lists, `resourceId` arguments and stack outputs,
//! including forward references and lookup failures.

use anyhow::{Result, anyhow, ensure};
use armtree::{
    Arg, ArmError, AttributeNode, KeyStyle, NoHumpExt, ResolveOperation, ResourceRef, Symbol,
    Value,
    functions::{concat, depends_on, deployment, direct_resource_id, resource_id, stack_output},
};
use rstest::rstest;
use serde_json::json;
use test_helpers::fixtures::{TEST_SECURITY_GROUP, azure_template, last_resource};

#[rstest]
fn literal_depends_on_returns_and_dumps_the_sequence() -> Result<()> {
    let refs = depends_on(["type1/name_1", "type2/name_2"]);
    ensure!(
        refs == Value::list([
            ResourceRef::literal("type1/name_1"),
            ResourceRef::literal("type2/name_2"),
        ]),
        "unexpected depends_on value: {refs:?}"
    );

    let mut attr = AttributeNode::new();
    attr.set("depends_on", refs);
    let dumped = attr.dump(&KeyStyle::default())?;
    ensure!(
        dumped == json!({"dependsOn": ["type1/name_1", "type2/name_2"]}),
        "unexpected dump: {dumped}"
    );
    Ok(())
}

#[rstest]
fn depends_on_resolves_declared_resources() -> Result<()> {
    let mut template = azure_template()?;
    template
        .resources()
        .child("my_resource")
        .depends_on([Symbol::new(TEST_SECURITY_GROUP)]);
    let document = template.dump()?;
    let resource = last_resource(&document)?;
    ensure!(
        resource["dependsOn"]
            == json!(["Microsoft.Network/networkSecurityGroups/testNetworkSecurityGroups"]),
        "unexpected dependsOn: {}",
        resource["dependsOn"]
    );
    Ok(())
}

#[rstest]
fn depends_on_mixes_literals_and_symbols() -> Result<()> {
    let mut template = azure_template()?;
    template.resources().child("my_resource").depends_on([
        ResourceRef::literal("Microsoft.Storage/storageAccounts/logs"),
        ResourceRef::declared(TEST_SECURITY_GROUP),
    ]);
    let document = template.dump()?;
    let resource = last_resource(&document)?;
    ensure!(
        resource["dependsOn"]
            == json!([
                "Microsoft.Storage/storageAccounts/logs",
                "Microsoft.Network/networkSecurityGroups/testNetworkSecurityGroups",
            ]),
        "unexpected dependsOn: {}",
        resource["dependsOn"]
    );
    Ok(())
}

fn reference_in_depends_on(resource: &mut AttributeNode, unknown: Symbol) {
    resource.depends_on([unknown]);
}

fn reference_in_resource_id(resource: &mut AttributeNode, unknown: Symbol) {
    resource.set("that_resource", resource_id([unknown]));
}

fn reference_in_concat(resource: &mut AttributeNode, unknown: Symbol) {
    resource.set("label", concat([Arg::from("prefix-"), Arg::from(unknown)]));
}

fn reference_in_method(resource: &mut AttributeNode, unknown: Symbol) {
    resource.set("picked", deployment().method("index", [unknown]));
}

fn reference_as_value(resource: &mut AttributeNode, unknown: Symbol) {
    resource.set("target", ResourceRef::from(unknown));
}

#[rstest]
#[case::depends_on(reference_in_depends_on, ResolveOperation::DependsOn)]
#[case::resource_id(reference_in_resource_id, ResolveOperation::ResourceId)]
#[case::concat(reference_in_concat, ResolveOperation::argument_of("concat"))]
#[case::method(reference_in_method, ResolveOperation::argument_of("index"))]
#[case::plain_value(reference_as_value, ResolveOperation::Reference)]
fn unknown_symbols_report_the_operation_that_recorded_them(
    #[case] record: fn(&mut AttributeNode, Symbol),
    #[case] operation: ResolveOperation,
) -> Result<()> {
    let mut template = azure_template()?;
    record(
        template.resources().child("my_resource"),
        Symbol::new("unknown_network_security_groups"),
    );
    let err = template
        .dump()
        .err()
        .ok_or_else(|| anyhow!("dump should fail for undeclared resources"))?;
    ensure!(
        matches!(
            err,
            ArmError::ResourceNotFound { ref name, operation: ref reported }
                if name == "unknown_network_security_groups" && *reported == operation
        ),
        "unexpected error: {err:?}"
    );
    Ok(())
}

#[rstest]
fn resource_id_uses_declared_type_and_name() -> Result<()> {
    let mut template = azure_template()?;
    template
        .resources()
        .child("my_resource")
        .set("that_resource", resource_id([Symbol::new(TEST_SECURITY_GROUP)]));
    let document = template.dump()?;
    let resource = last_resource(&document)?;
    let expected = "[resourceId('Microsoft.Network/networkSecurityGroups', \
                    'testNetworkSecurityGroups')]";
    ensure!(
        resource["thatResource"] == json!(expected),
        "unexpected resource id: {}",
        resource["thatResource"]
    );
    Ok(())
}

#[rstest]
fn direct_resource_ids_join_their_parts() -> Result<()> {
    let rendered = direct_resource_id("fubar_type", "fubar").render(&KeyStyle::default())?;
    ensure!(rendered == "[resourceId('fubar_type/fubar')]", "got {rendered}");
    Ok(())
}

#[rstest]
#[case::converted(
    stack_output("stack_name", "output_name"),
    "[reference('stackName').outputs.outputName.value]"
)]
#[case::no_hump(
    stack_output("stack_name".no_hump(), "output_name"),
    "[reference('stack_name').outputs.outputName.value]"
)]
fn stack_outputs_reference_nested_stacks(
    #[case] expression: armtree::Expression,
    #[case] expected: &str,
) -> Result<()> {
    let rendered = expression.render(&KeyStyle::default())?;
    ensure!(rendered == expected, "got {rendered}");
    Ok(())
}
