//! The navigable views and what each one requires.

use invento_authorization::{CapabilityCatalog, Requirement};
use invento_core::{InventoError, ViewId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Home view, visible to every authenticated actor.
pub const DEFAULT_VIEW: &str = "dashboard";

/// A navigable destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDescriptor {
    /// Stable identifier
    pub id: ViewId,
    /// Navigation label
    pub label: String,
    /// One-line summary shown under the label
    pub description: String,
    /// What the current actor must hold to open it
    pub requirement: Requirement,
}

impl ViewDescriptor {
    /// Create a descriptor.
    pub fn new(
        id: impl Into<ViewId>,
        label: impl Into<String>,
        description: impl Into<String>,
        requirement: Requirement,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            requirement,
        }
    }
}

// (id, label, description, requirement)
const STANDARD_VIEWS: &[(&str, &str, &str, &str)] = &[
    ("dashboard", "Dashboard", "Overview and key metrics", "*"),
    ("inventory", "Inventory", "Stock management", "inventory.read"),
    ("products", "Products", "Product catalog", "products.read"),
    ("sales", "Sales & POS", "Point of sale", "sales.read"),
    ("sales-orders", "Sales Orders", "Customer orders", "sales.read"),
    ("purchase-orders", "Purchase Orders", "Supplier orders", "purchase.read"),
    ("transfers", "Stock Transfers", "Internal stock movement", "transfers.read"),
    ("warehouses", "Warehouses", "Warehouse management", "warehouses.read"),
    ("analytics", "Analytics", "Business insights", "analytics.read"),
    ("reports", "Reports", "Generate reports", "reports.read"),
    ("customers", "Customers", "Customer management", "customers.read"),
    ("billing", "Billing", "Invoices and payments", "billing.read"),
    ("settings", "Settings", "System configuration", "settings.read"),
    ("system-admin", "System Admin", "User & role management", "admin.read"),
];

/// Read-only table of views, in navigation order.
///
/// A registry always contains its default view, so
/// [`resolve`](ViewRegistry::resolve) never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRegistry {
    views: Vec<ViewDescriptor>,
    default_index: usize,
}

impl ViewRegistry {
    /// Build a registry. Rejects duplicate ids, a default that is not in
    /// `views`, and requirements naming capabilities outside `catalog`.
    pub fn new(
        views: Vec<ViewDescriptor>,
        default_view: &ViewId,
        catalog: &CapabilityCatalog,
    ) -> Result<Self, InventoError> {
        let mut seen = HashSet::new();
        for view in &views {
            if !seen.insert(view.id.as_str()) {
                return Err(InventoError::invalid(format!(
                    "duplicate view id `{}`",
                    view.id
                )));
            }
            catalog
                .check_requirement(&view.requirement)
                .map_err(|err| InventoError::invalid(format!("view `{}`: {err}", view.id)))?;
        }

        let default_index = views
            .iter()
            .position(|view| &view.id == default_view)
            .ok_or_else(|| {
                InventoError::invalid(format!("default view `{default_view}` is not registered"))
            })?;

        Ok(Self {
            views,
            default_index,
        })
    }

    /// The product's fourteen views with `dashboard` as home.
    pub fn standard() -> Result<Self, InventoError> {
        Self::standard_with_default(&ViewId::from(DEFAULT_VIEW))
    }

    /// The standard views with a different home view.
    pub fn standard_with_default(default_view: &ViewId) -> Result<Self, InventoError> {
        let views = STANDARD_VIEWS
            .iter()
            .map(|&(id, label, description, requirement)| {
                Requirement::parse(requirement)
                    .map(|requirement| ViewDescriptor::new(id, label, description, requirement))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(views, default_view, &CapabilityCatalog::standard())
    }

    /// Look up a view by id.
    pub fn get(&self, id: &ViewId) -> Option<&ViewDescriptor> {
        self.views.iter().find(|view| &view.id == id)
    }

    /// Look up a view, falling back to the default for unknown ids.
    pub fn resolve(&self, id: &ViewId) -> &ViewDescriptor {
        self.get(id).unwrap_or_else(|| self.default_view())
    }

    /// The home view.
    pub fn default_view(&self) -> &ViewDescriptor {
        &self.views[self.default_index]
    }

    /// Views in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = &ViewDescriptor> {
        self.views.iter()
    }

    /// Number of views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Always false for a constructed registry; provided for symmetry.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_fourteen_views() {
        let registry = ViewRegistry::standard().unwrap();
        assert_eq!(registry.len(), 14);
        assert_eq!(registry.default_view().id.as_str(), "dashboard");
        assert_eq!(registry.default_view().requirement, Requirement::Always);

        let admin = registry.get(&"system-admin".into()).unwrap();
        assert_eq!(admin.label, "System Admin");
        assert_eq!(admin.requirement.to_string(), "admin.read");
    }

    #[test]
    fn unknown_ids_resolve_to_default() {
        let registry = ViewRegistry::standard().unwrap();
        assert!(registry.get(&"nonexistent".into()).is_none());
        assert_eq!(registry.resolve(&"nonexistent".into()).id.as_str(), "dashboard");
        assert_eq!(registry.resolve(&"billing".into()).id.as_str(), "billing");
    }

    #[test]
    fn default_can_be_changed() {
        let registry = ViewRegistry::standard_with_default(&"inventory".into()).unwrap();
        assert_eq!(registry.resolve(&"nowhere".into()).id.as_str(), "inventory");
        assert!(ViewRegistry::standard_with_default(&"nowhere".into()).is_err());
    }

    #[test]
    fn construction_rejects_bad_tables() {
        let catalog = CapabilityCatalog::standard();
        let home = ViewDescriptor::new("home", "Home", "", Requirement::Always);

        let duplicate = vec![home.clone(), home.clone()];
        assert!(ViewRegistry::new(duplicate, &"home".into(), &catalog).is_err());

        let typo = ViewDescriptor::new(
            "stock",
            "Stock",
            "",
            Requirement::parse("inventroy.read").unwrap(),
        );
        let err = ViewRegistry::new(vec![home, typo], &"home".into(), &catalog).unwrap_err();
        assert!(err.to_string().contains("inventroy.read"));
    }
}
