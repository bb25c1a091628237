//! The terminal pass turning an attribute tree into a document.
//!
//! A single traversal converts every key with the active [`KeyStyle`],
//! flattens the root `resources` branch into a sequence, renders
//! expressions and resolves symbolic resource references. The first failure
//! aborts the dump.

use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

use crate::{
    ArmError, ArmResult, KeyStyle,
    expression::render::Renderer,
    naming::convert,
    registry::ResourceRegistry,
    tree::AttributeNode,
    value::Value,
};

/// Field holding the name-keyed resource collection.
pub const RESOURCES_KEY: &str = "resources";

const NAME_KEY: &str = "name";

/// Serialises attribute trees against a registry of declared resources.
pub struct Dumper<'a> {
    renderer: Renderer<'a>,
}

impl<'a> Dumper<'a> {
    /// Create a dumper using `style` for keys and `registry` for references.
    #[must_use]
    pub const fn new(style: &'a KeyStyle, registry: &'a ResourceRegistry) -> Self {
        Self {
            renderer: Renderer::new(style, registry),
        }
    }

    /// Dump `root` as a complete document.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::ResourceNotFound`] for references to undeclared
    /// resources and [`ArmError::InvalidResource`] when an entry of the
    /// `resources` collection is not a branch.
    pub fn dump(&self, root: &AttributeNode) -> ArmResult<JsonValue> {
        if let Some(value) = root.value() {
            return self.value(value);
        }
        let mut document = Map::new();
        for (name, node) in root.children() {
            let rendered = if name == RESOURCES_KEY && node.is_branch() {
                self.resources(node)?
            } else {
                self.node(node)?
            };
            document.insert(self.key(name), rendered);
        }
        debug!(fields = document.len(), "dumped template document");
        Ok(JsonValue::Object(document))
    }

    fn resources(&self, collection: &AttributeNode) -> ArmResult<JsonValue> {
        let mut resources = Vec::new();
        for (name, resource) in collection.children() {
            if resource.is_leaf() {
                return Err(ArmError::InvalidResource {
                    name: name.to_owned(),
                });
            }
            let mut entry = Map::new();
            entry.insert(self.key(NAME_KEY), JsonValue::String(self.key(name)));
            for (field, node) in resource.children() {
                if field == NAME_KEY {
                    warn!(
                        resource = name,
                        "ignoring explicit name; resource names come from their keys"
                    );
                    continue;
                }
                entry.insert(self.key(field), self.node(node)?);
            }
            resources.push(JsonValue::Object(entry));
        }
        Ok(JsonValue::Array(resources))
    }

    fn node(&self, node: &AttributeNode) -> ArmResult<JsonValue> {
        if let Some(value) = node.value() {
            return self.value(value);
        }
        let mut object = Map::new();
        for (name, child) in node.children() {
            object.insert(self.key(name), self.node(child)?);
        }
        Ok(JsonValue::Object(object))
    }

    fn value(&self, value: &Value) -> ArmResult<JsonValue> {
        Ok(match value {
            Value::Null => JsonValue::Null,
            Value::Bool(flag) => JsonValue::Bool(*flag),
            Value::Integer(number) => JsonValue::from(*number),
            Value::Float(number) => JsonValue::from(*number),
            Value::String(text) => JsonValue::String(text.clone()),
            Value::List(items) => JsonValue::Array(
                items
                    .iter()
                    .map(|item| self.value(item))
                    .collect::<ArmResult<_>>()?,
            ),
            Value::Map(entries) => JsonValue::Object(
                entries
                    .iter()
                    .map(|(key, item)| Ok((key.clone(), self.value(item)?)))
                    .collect::<ArmResult<_>>()?,
            ),
            Value::Expression(expression) => {
                JsonValue::String(self.renderer.template_string(expression)?)
            }
            Value::Resource(reference) => JsonValue::String(self.renderer.resource_ref(reference)?),
        })
    }

    fn key(&self, name: &str) -> String {
        convert(name, self.renderer.style())
    }
}
