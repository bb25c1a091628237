//! The mutable attribute tree a template is built from.
//!
//! Nodes are created on first access, so `root.child("resources")
//! .child("my_resource").set("type", "testing")` builds the whole path.
//! Field names are stored exactly as written; conversion to the provider's
//! casing happens only when the tree is dumped.

use indexmap::IndexMap;

use crate::{
    ArmResult, KeyStyle,
    dump::Dumper,
    functions,
    registry::{ResourceRef, ResourceRegistry},
    value::Value,
};

/// A node that is either a leaf holding a [`Value`] or a branch of named
/// children in first-insertion order.
///
/// A fresh node is an empty branch. Assigning a leaf discards any children
/// and requesting a child of a leaf discards its value, so the last write
/// always decides what the node is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeNode {
    leaf: Option<Value>,
    children: IndexMap<String, AttributeNode>,
}

impl AttributeNode {
    /// Create an empty branch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the child named `name`, creating an empty branch if absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use armtree::AttributeNode;
    /// let mut root = AttributeNode::new();
    /// root.child("properties").set("location", "westus");
    /// let location = root.child("properties").get("location");
    /// assert!(location.is_some_and(AttributeNode::is_leaf));
    /// ```
    pub fn child(&mut self, name: &str) -> &mut Self {
        self.leaf = None;
        self.children.entry(name.to_owned()).or_default()
    }

    /// Follow `path` from this node, creating branches as needed.
    pub fn path(&mut self, path: &[&str]) -> &mut Self {
        path.iter().fold(self, |node, name| node.child(name))
    }

    /// Assign `value` to the child named `name`, returning this node so
    /// sibling fields can be chained.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.child(name).assign(value);
        self
    }

    /// Turn this node into a leaf holding `value`.
    pub fn assign(&mut self, value: impl Into<Value>) {
        self.children.clear();
        self.leaf = Some(value.into());
    }

    /// Record a `dependsOn` list on this node.
    ///
    /// Strings are literal `type/name` pairs; [`crate::Symbol`] entries are
    /// resolved when the template is dumped.
    pub fn depends_on<I>(&mut self, refs: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ResourceRef>,
    {
        self.set("depends_on", functions::depends_on(refs))
    }

    /// Borrow the child named `name` without creating it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Self> {
        self.children.get(name)
    }

    /// The value held by a leaf.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.leaf.as_ref()
    }

    /// Whether this node holds a value.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }

    /// Whether this node is a branch (possibly empty).
    #[must_use]
    pub fn is_branch(&self) -> bool {
        self.leaf.is_none()
    }

    /// Iterate over children in first-insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Dump this node as a document root without declared resources.
    ///
    /// # Errors
    ///
    /// Fails on the first symbolic resource reference, since there is no
    /// registry to resolve it against, and on malformed `resources` entries.
    pub fn dump(&self, style: &KeyStyle) -> ArmResult<serde_json::Value> {
        let registry = ResourceRegistry::new();
        Dumper::new(style, &registry).dump(self)
    }
}
