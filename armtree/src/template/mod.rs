//! The owning context for one template document.

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::{
    ArmResult, ArmResultExt, KeyStyle,
    dump::{Dumper, RESOURCES_KEY},
    registry::{ResourceCatalog, ResourceEntry, ResourceRegistry},
    tree::AttributeNode,
};

/// A template under construction.
///
/// The template owns the attribute tree, the registry of declared resources
/// and the key style applied at dump time. Declaring resources is the only
/// way to populate the registry, and [`Template::dump`] borrows the template
/// immutably, so a dump always observes the finished registry.
///
/// # Examples
///
/// ```
/// use armtree::{Symbol, Template, functions::resource_id};
///
/// let mut template = Template::new("network");
/// template
///     .resources()
///     .child("my_resource")
///     .depends_on([Symbol::new("test_network_security_groups")])
///     .set("that_resource", resource_id([Symbol::new("test_network_security_groups")]));
/// // Declared after being referenced.
/// template.dynamic("network_security_groups", "test")?;
///
/// let document = template.dump()?;
/// assert_eq!(
///     document["resources"][0]["dependsOn"][0],
///     "Microsoft.Network/networkSecurityGroups/testNetworkSecurityGroups"
/// );
/// # Ok::<(), armtree::ArmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Template {
    name: String,
    key_style: KeyStyle,
    root: AttributeNode,
    registry: ResourceRegistry,
    catalog: ResourceCatalog,
}

impl Template {
    /// Create an empty template using the default key style and the Azure
    /// resource catalog.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_style: KeyStyle::default(),
            root: AttributeNode::new(),
            registry: ResourceRegistry::new(),
            catalog: ResourceCatalog::azure(),
        }
    }

    /// Replace the key style applied at dump time.
    #[must_use]
    pub const fn with_key_style(mut self, key_style: KeyStyle) -> Self {
        self.key_style = key_style;
        self
    }

    /// Replace the catalog used by [`Template::dynamic`].
    #[must_use]
    pub fn with_catalog(mut self, catalog: ResourceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The template's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key style applied at dump time.
    #[must_use]
    pub const fn key_style(&self) -> &KeyStyle {
        &self.key_style
    }

    /// Declared resources in declaration order.
    #[must_use]
    pub const fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// The root of the attribute tree.
    #[must_use]
    pub const fn root(&self) -> &AttributeNode {
        &self.root
    }

    /// Mutable access to the root of the attribute tree.
    pub fn root_mut(&mut self) -> &mut AttributeNode {
        &mut self.root
    }

    /// The `resources` branch of the root.
    pub fn resources(&mut self) -> &mut AttributeNode {
        self.root.child(RESOURCES_KEY)
    }

    /// Declare a resource of `provider_type` under `name`.
    ///
    /// The resource's `type` attribute is set and its attribute branch is
    /// returned for further population.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArmError::DuplicateResource`] if `name` is already
    /// declared.
    pub fn declare_resource(
        &mut self,
        name: &str,
        provider_type: &str,
    ) -> ArmResult<&mut AttributeNode> {
        self.declare(ResourceEntry::new(name, provider_type))
    }

    /// Declare a resource of catalog `kind`, named `<name>_<kind>`.
    ///
    /// The resource's `type` and `api_version` attributes are seeded from
    /// the catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArmError::UnknownResourceKind`] when `kind` is not in
    /// the catalog and [`crate::ArmError::DuplicateResource`] when the
    /// derived name is already declared.
    pub fn dynamic(&mut self, kind: &str, name: &str) -> ArmResult<&mut AttributeNode> {
        let known = self.catalog.lookup(kind)?;
        let entry = ResourceEntry::new(format!("{name}_{kind}"), known.provider_type())
            .with_api_version(known.api_version());
        self.declare(entry)
    }

    fn declare(&mut self, entry: ResourceEntry) -> ArmResult<&mut AttributeNode> {
        let name = entry.declaration_name().to_owned();
        let provider_type = entry.provider_type().to_owned();
        let api_version = entry.api_version().map(str::to_owned);
        self.registry.insert(entry)?;
        debug!(
            template = %self.name,
            resource = %name,
            %provider_type,
            "declared resource"
        );

        let node = self.resources().child(&name);
        node.set("type", provider_type);
        if let Some(version) = api_version {
            node.set("api_version", version);
        }
        Ok(node)
    }

    /// Produce the final document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArmError::ResourceNotFound`] when a symbolic
    /// reference names a resource that was never declared, and
    /// [`crate::ArmError::InvalidResource`] for malformed `resources`
    /// entries.
    pub fn dump(&self) -> ArmResult<JsonValue> {
        debug!(
            template = %self.name,
            resources = self.registry.len(),
            "dumping template"
        );
        Dumper::new(&self.key_style, &self.registry).dump(&self.root)
    }

    /// Produce the final document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates [`Template::dump`] failures and JSON encoding errors.
    pub fn to_json_pretty(&self) -> ArmResult<String> {
        serde_json::to_string_pretty(&self.dump()?).into_arm()
    }
}
