//! Known resource kinds used by dynamic resource declaration.

use indexmap::IndexMap;

use crate::{ArmError, ArmResult};

const AZURE_RESOURCES: &[(&str, &str, &str)] = &[
    ("availability_sets", "Microsoft.Compute/availabilitySets", "2015-06-15"),
    ("deployments", "Microsoft.Resources/deployments", "2015-01-01"),
    ("load_balancers", "Microsoft.Network/loadBalancers", "2015-06-15"),
    ("network_interfaces", "Microsoft.Network/networkInterfaces", "2015-06-15"),
    (
        "network_security_groups",
        "Microsoft.Network/networkSecurityGroups",
        "2015-06-15",
    ),
    ("public_ip_addresses", "Microsoft.Network/publicIPAddresses", "2015-06-15"),
    ("storage_accounts", "Microsoft.Storage/storageAccounts", "2015-06-15"),
    ("virtual_machines", "Microsoft.Compute/virtualMachines", "2015-06-15"),
    ("virtual_networks", "Microsoft.Network/virtualNetworks", "2015-06-15"),
];

/// Provider type and API version registered for a resource kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogEntry {
    provider_type: String,
    api_version: String,
}

impl CatalogEntry {
    /// Provider type declared resources of this kind receive.
    #[must_use]
    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }

    /// API version declared resources of this kind receive.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}

/// Mapping from snake-case resource kinds to provider types.
#[derive(Clone, Debug, Default)]
pub struct ResourceCatalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl ResourceCatalog {
    /// A catalog with no kinds.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in Azure Resource Manager catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use armtree::ResourceCatalog;
    /// let catalog = ResourceCatalog::azure();
    /// let entry = catalog.lookup("virtual_networks").expect("known kind");
    /// assert_eq!(entry.provider_type(), "Microsoft.Network/virtualNetworks");
    /// ```
    #[must_use]
    pub fn azure() -> Self {
        AZURE_RESOURCES
            .iter()
            .fold(Self::empty(), |catalog, &(kind, provider_type, api_version)| {
                catalog.with(kind, provider_type, api_version)
            })
    }

    /// Add or replace `kind`, returning the catalog.
    #[must_use]
    pub fn with(
        mut self,
        kind: impl Into<String>,
        provider_type: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        self.insert(kind, provider_type, api_version);
        self
    }

    /// Add or replace `kind`.
    pub fn insert(
        &mut self,
        kind: impl Into<String>,
        provider_type: impl Into<String>,
        api_version: impl Into<String>,
    ) {
        self.entries.insert(
            kind.into(),
            CatalogEntry {
                provider_type: provider_type.into(),
                api_version: api_version.into(),
            },
        );
    }

    /// Find the entry for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::UnknownResourceKind`] when the kind is not in the
    /// catalog.
    pub fn lookup(&self, kind: &str) -> ArmResult<&CatalogEntry> {
        self.entries
            .get(kind)
            .ok_or_else(|| ArmError::UnknownResourceKind { kind: kind.to_owned() })
    }
}
