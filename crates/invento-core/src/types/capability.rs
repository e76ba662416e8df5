//! Capabilities, permission sets and warehouse scopes.
//!
//! A [`Capability`] names a single gated action or view, such as
//! `inventory.read`. Names are dot-namespaced, but matching is always exact:
//! holding `inventory.read` says nothing about `inventory.write` or any
//! `inventory.*` pattern.
//!
//! Both [`PermissionSet`] and [`WarehouseScope`] serialize as a flat list of
//! strings. The [`WILDCARD`] marker anywhere in that list means "everything".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::InventoError;
use crate::types::identifiers::WarehouseId;

/// Marker granting every capability (in a permission set) or every warehouse
/// (in a warehouse scope).
pub const WILDCARD: &str = "*";

/// A validated capability name.
///
/// Two or more non-empty segments separated by `.`, each made of lowercase
/// ASCII letters, digits, `-` or `_`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Capability(String);

impl Capability {
    /// Parse and validate a capability name.
    pub fn parse(value: impl Into<String>) -> Result<Self, InventoError> {
        let value = value.into();
        validate_capability(&value)?;
        Ok(Self(value))
    }

    /// The capability name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_capability(value: &str) -> Result<(), InventoError> {
    if value == WILDCARD {
        return Err(InventoError::invalid(
            "the wildcard marks a permission set, it is not a capability",
        ));
    }
    if !value.contains('.') {
        return Err(InventoError::invalid(format!(
            "capability `{value}` must be namespaced, e.g. `inventory.read`"
        )));
    }
    let valid_segment = |segment: &str| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    };
    if !value.split('.').all(valid_segment) {
        return Err(InventoError::invalid(format!(
            "capability `{value}` has an empty or malformed segment"
        )));
    }
    Ok(())
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Capability {
    type Err = InventoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Capability {
    type Error = InventoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Capability> for String {
    fn from(value: Capability) -> Self {
        value.0
    }
}

/// The capabilities held by an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub enum PermissionSet {
    /// Every capability, including ones no view or catalogue mentions.
    All,
    /// Exactly the listed capabilities.
    Only(BTreeSet<Capability>),
}

impl PermissionSet {
    /// The wildcard set.
    pub fn all() -> Self {
        Self::All
    }

    /// An empty set.
    pub fn none() -> Self {
        Self::Only(BTreeSet::new())
    }

    /// Parse a list of raw strings. [`WILDCARD`] anywhere yields [`PermissionSet::All`].
    pub fn parse<I, S>(values: I) -> Result<Self, InventoError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<S> = values.into_iter().collect();
        if values.iter().any(|value| value.as_ref() == WILDCARD) {
            return Ok(Self::All);
        }
        values
            .iter()
            .map(|value| Capability::parse(value.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self::Only)
    }

    /// Whether this is the wildcard set.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether `capability` is explicitly listed. Always false for the wildcard
    /// set, which lists nothing.
    pub fn lists(&self, capability: &Capability) -> bool {
        match self {
            Self::All => false,
            Self::Only(capabilities) => capabilities.contains(capability),
        }
    }

    /// Explicitly listed capabilities, in order.
    pub fn listed(&self) -> impl Iterator<Item = &Capability> {
        let listed = match self {
            Self::All => None,
            Self::Only(capabilities) => Some(capabilities.iter()),
        };
        listed.into_iter().flatten()
    }
}

impl FromIterator<Capability> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Capability>>(iter: T) -> Self {
        Self::Only(iter.into_iter().collect())
    }
}

impl TryFrom<Vec<String>> for PermissionSet {
    type Error = InventoError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PermissionSet> for Vec<String> {
    fn from(value: PermissionSet) -> Self {
        match value {
            PermissionSet::All => vec![WILDCARD.to_string()],
            PermissionSet::Only(capabilities) => {
                capabilities.into_iter().map(String::from).collect()
            }
        }
    }
}

/// The warehouses an actor may operate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum WarehouseScope {
    /// Every warehouse.
    All,
    /// Exactly the listed warehouses.
    Only(BTreeSet<WarehouseId>),
}

impl WarehouseScope {
    /// Build a scope from raw strings. [`WILDCARD`] anywhere yields [`WarehouseScope::All`].
    pub fn parse<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut warehouses = BTreeSet::new();
        for value in values {
            let value = value.as_ref();
            if value == WILDCARD {
                return Self::All;
            }
            warehouses.insert(WarehouseId::from(value));
        }
        Self::Only(warehouses)
    }

    /// Whether this is the wildcard scope.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether `warehouse` is explicitly listed.
    pub fn lists(&self, warehouse: &WarehouseId) -> bool {
        match self {
            Self::All => false,
            Self::Only(warehouses) => warehouses.contains(warehouse),
        }
    }
}

impl From<Vec<String>> for WarehouseScope {
    fn from(value: Vec<String>) -> Self {
        Self::parse(value)
    }
}

impl From<WarehouseScope> for Vec<String> {
    fn from(value: WarehouseScope) -> Self {
        match value {
            WarehouseScope::All => vec![WILDCARD.to_string()],
            WarehouseScope::Only(warehouses) => {
                warehouses.into_iter().map(|w| w.as_str().to_string()).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_namespaced_capabilities() {
        let cap = Capability::parse("inventory.read").unwrap();
        assert_eq!(cap.as_str(), "inventory.read");
        assert_eq!(cap.to_string(), "inventory.read");

        let nested = Capability::parse("sales.orders.write").unwrap();
        assert_eq!(nested.as_str(), "sales.orders.write");
    }

    #[test]
    fn rejects_malformed_capabilities() {
        for raw in ["", "*", "inventory", "inventory.", ".read", "Inventory.Read", "inventory.*", "a..b"] {
            assert!(Capability::parse(raw).is_err(), "`{raw}` should be rejected");
        }
    }

    #[test]
    fn wildcard_anywhere_means_all() {
        let set = PermissionSet::parse(["inventory.read", "*"]).unwrap();
        assert!(set.is_wildcard());
        assert_eq!(set.listed().count(), 0);
    }

    #[test]
    fn wildcard_wins_over_malformed_entries_in_any_position() {
        let first: PermissionSet = serde_json::from_str(r#"["*","Inventory.Read"]"#).unwrap();
        let last: PermissionSet = serde_json::from_str(r#"["Inventory.Read","*"]"#).unwrap();
        assert!(first.is_wildcard());
        assert_eq!(first, last);
    }

    #[test]
    fn wildcard_set_serializes_as_marker() {
        let json = serde_json::to_string(&PermissionSet::all()).unwrap();
        assert_eq!(json, r#"["*"]"#);

        let scope: WarehouseScope = serde_json::from_str(r#"["main","*"]"#).unwrap();
        assert!(scope.is_wildcard());
    }

    #[test]
    fn malformed_permission_list_fails_to_deserialize() {
        let result: std::result::Result<PermissionSet, _> =
            serde_json::from_str(r#"["inventory.read","NOPE"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn listing_is_exact() {
        let set = PermissionSet::parse(["inventory.read"]).unwrap();
        assert!(set.lists(&"inventory.read".parse().unwrap()));
        assert!(!set.lists(&"inventory.write".parse().unwrap()));
        assert!(!set.lists(&"inventory.read.all".parse().unwrap()));
    }

    fn arb_capability() -> impl Strategy<Value = Capability> {
        "[a-z][a-z0-9_-]{0,8}(\\.[a-z0-9][a-z0-9_-]{0,8}){1,2}"
            .prop_map(|raw| Capability::parse(raw).unwrap())
    }

    proptest! {
        #[test]
        fn permission_sets_survive_json(caps in proptest::collection::btree_set(arb_capability(), 0..8)) {
            let set = PermissionSet::Only(caps);
            let json = serde_json::to_string(&set).unwrap();
            let back: PermissionSet = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, set);
        }
    }
}
