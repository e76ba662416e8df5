//! Known capabilities.
//!
//! Capability names are free-form strings on the wire, so a typo would
//! otherwise produce a check that silently never passes. Directories and view
//! registries are validated against a catalogue when they are loaded.

use invento_core::{Actor, Capability, InventoError, PermissionSet};
use std::collections::BTreeSet;

use crate::requirement::Requirement;

/// Capabilities the product ships with.
pub const STANDARD_CAPABILITIES: &[&str] = &[
    "admin.read",
    "analytics.read",
    "billing.read",
    "customers.read",
    "customers.write",
    "dashboard.read",
    "inventory.read",
    "inventory.write",
    "products.read",
    "products.write",
    "purchase.read",
    "reports.read",
    "sales.read",
    "sales.write",
    "settings.read",
    "transfers.read",
    "transfers.write",
    "warehouses.read",
];

/// A closed set of capability names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityCatalog {
    known: BTreeSet<Capability>,
}

impl CapabilityCatalog {
    /// Build a catalogue from raw names.
    pub fn new<I, S>(names: I) -> Result<Self, InventoError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known = names
            .into_iter()
            .map(|name| Capability::parse(name.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(Self { known })
    }

    /// The product's standard catalogue.
    pub fn standard() -> Self {
        Self {
            known: STANDARD_CAPABILITIES
                .iter()
                .filter_map(|name| Capability::parse(*name).ok())
                .collect(),
        }
    }

    /// Whether `capability` is known.
    pub fn contains(&self, capability: &Capability) -> bool {
        self.known.contains(capability)
    }

    /// Iterate known capabilities in order.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.known.iter()
    }

    /// Reject an unknown capability.
    pub fn check(&self, capability: &Capability) -> Result<(), InventoError> {
        if self.contains(capability) {
            Ok(())
        } else {
            Err(InventoError::invalid(format!(
                "unknown capability `{capability}`"
            )))
        }
    }

    /// Reject a permission set listing an unknown capability. The wildcard set
    /// always passes.
    pub fn check_permissions(&self, permissions: &PermissionSet) -> Result<(), InventoError> {
        permissions.listed().try_for_each(|capability| self.check(capability))
    }

    /// Reject a requirement naming an unknown capability.
    pub fn check_requirement(&self, requirement: &Requirement) -> Result<(), InventoError> {
        requirement
            .capability()
            .map_or(Ok(()), |capability| self.check(capability))
    }

    /// Reject an actor holding an unknown capability.
    pub fn check_actor(&self, actor: &Actor) -> Result<(), InventoError> {
        self.check_permissions(&actor.permissions).map_err(|err| {
            InventoError::invalid(format!("actor `{}`: {err}", actor.id))
        })
    }
}

impl Default for CapabilityCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
