//! Template fixtures mirroring common Azure layouts.

use anyhow::{Context, Result};
use armtree::Template;

/// Declaration name of the network security group in [`azure_template`].
pub const TEST_SECURITY_GROUP: &str = "test_network_security_groups";

/// A template declaring a single network security group named `test`.
///
/// # Errors
///
/// Returns an error if the built-in catalog lacks network security groups.
pub fn azure_template() -> Result<Template> {
    let mut template = Template::new("test");
    template
        .dynamic("network_security_groups", "test")
        .context("declare test network security group")?;
    Ok(template)
}

/// The last element of a dumped document's `resources` sequence.
///
/// # Errors
///
/// Returns an error if the document has no resources.
pub fn last_resource(document: &serde_json::Value) -> Result<&serde_json::Value> {
    document
        .get("resources")
        .and_then(serde_json::Value::as_array)
        .and_then(|resources| resources.last())
        .context("document has no resources")
}
