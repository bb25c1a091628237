//! Declared resources and the symbolic references that point at them.
//!
//! A template registers a [`ResourceEntry`] for every resource it declares.
//! References recorded while building ([`ResourceRef::Declared`] entries in
//! a `dependsOn` list, [`Symbol`] arguments to `resourceId`) stay symbolic
//! until dump, when they are resolved against the complete registry. This
//! allows a resource to refer to one declared later.

mod catalog;

use indexmap::IndexMap;
use tracing::trace;

use crate::{ArmError, ArmResult, KeyStyle, ResolveOperation, naming::convert};

pub use catalog::{CatalogEntry, ResourceCatalog};

/// Symbolic declaration name of a resource.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol for the resource declared as `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The declaration name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A reference to a resource, either literal or by declaration name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResourceRef {
    /// A provider-qualified `type/name` string emitted unchanged.
    Literal(String),
    /// A declared resource resolved to `type/name` at dump time.
    Declared {
        /// Declaration name of the referenced resource.
        symbol: Symbol,
        /// Operation reported if the name is never declared.
        operation: ResolveOperation,
    },
}

impl ResourceRef {
    /// Reference a resource by its literal `type/name`.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Reference a resource by declaration name.
    #[must_use]
    pub fn declared(name: impl Into<String>) -> Self {
        Symbol::new(name).into()
    }

    /// Record `operation` as the origin of a declared reference.
    ///
    /// Literal references are returned unchanged.
    #[must_use]
    pub fn recorded_by(self, operation: ResolveOperation) -> Self {
        match self {
            Self::Declared { symbol, .. } => Self::Declared { symbol, operation },
            literal @ Self::Literal(_) => literal,
        }
    }
}

impl From<&str> for ResourceRef {
    fn from(value: &str) -> Self {
        Self::literal(value)
    }
}

impl From<String> for ResourceRef {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<Symbol> for ResourceRef {
    fn from(symbol: Symbol) -> Self {
        Self::Declared {
            symbol,
            operation: ResolveOperation::Reference,
        }
    }
}

/// A resource declared by a template.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceEntry {
    declaration_name: String,
    provider_type: String,
    api_version: Option<String>,
}

impl ResourceEntry {
    /// Describe a resource of `provider_type` declared as `declaration_name`.
    #[must_use]
    pub fn new(declaration_name: impl Into<String>, provider_type: impl Into<String>) -> Self {
        Self {
            declaration_name: declaration_name.into(),
            provider_type: provider_type.into(),
            api_version: None,
        }
    }

    /// Attach the provider API version used for this resource.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Symbolic name the resource was declared under.
    #[must_use]
    pub fn declaration_name(&self) -> &str {
        &self.declaration_name
    }

    /// Provider type, for example `Microsoft.Network/networkSecurityGroups`.
    #[must_use]
    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }

    /// Provider API version, when known.
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// Name emitted for this resource under `style`.
    #[must_use]
    pub fn rendered_name(&self, style: &KeyStyle) -> String {
        convert(&self.declaration_name, style)
    }

    /// The `type/name` pair used in `dependsOn` lists.
    #[must_use]
    pub fn qualified_name(&self, style: &KeyStyle) -> String {
        format!("{}/{}", self.provider_type, self.rendered_name(style))
    }
}

/// Ordered set of declared resources.
#[derive(Clone, Debug, Default)]
pub struct ResourceRegistry {
    entries: IndexMap<String, ResourceEntry>,
}

impl ResourceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entry`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::DuplicateResource`] when an entry with the same
    /// declaration name already exists.
    pub(crate) fn insert(&mut self, entry: ResourceEntry) -> ArmResult<()> {
        if self.entries.contains_key(entry.declaration_name()) {
            return Err(ArmError::DuplicateResource {
                name: entry.declaration_name,
            });
        }
        self.entries.insert(entry.declaration_name.clone(), entry);
        Ok(())
    }

    /// Look up an entry by declaration name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResourceEntry> {
        self.entries.get(name)
    }

    /// Resolve `symbol` on behalf of `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::ResourceNotFound`] when nothing was declared under
    /// the symbol's name.
    pub fn resolve(
        &self,
        symbol: &Symbol,
        operation: ResolveOperation,
    ) -> ArmResult<&ResourceEntry> {
        let Some(entry) = self.get(symbol.as_str()) else {
            return Err(ArmError::resource_not_found(symbol.as_str(), operation));
        };
        trace!(
            name = symbol.as_str(),
            provider_type = entry.provider_type(),
            %operation,
            "resolved resource reference"
        );
        Ok(entry)
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.entries.values()
    }

    /// Number of declared resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no resources have been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
