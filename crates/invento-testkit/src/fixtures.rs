//! Actor fixtures and strategies.

use invento_core::{Actor, Capability, PermissionSet, Role, WarehouseScope};
use proptest::prelude::*;

/// Parse a capability, panicking on malformed input.
pub fn capability(raw: &str) -> Capability {
    Capability::parse(raw).expect("fixture capability must be well formed")
}

/// A staff actor holding exactly `permissions`, scoped to the `main` warehouse.
pub fn actor_with(permissions: &[&str]) -> Actor {
    Actor::new("fixture", "Fixture Actor", "fixture@invento.com", Role::Staff)
        .with_department("Testing")
        .with_permissions(
            PermissionSet::parse(permissions).expect("fixture permissions must be well formed"),
        )
        .with_warehouses(WarehouseScope::parse(["main"]))
}

/// An administrator holding the wildcard.
pub fn wildcard_actor() -> Actor {
    Actor::new("root", "Root Admin", "root@invento.com", Role::Administrator)
        .with_department("IT Administration")
        .with_permissions(PermissionSet::all())
        .with_warehouses(WarehouseScope::All)
}

/// Arbitrary well-formed capabilities, not limited to any catalogue.
pub fn arb_capability() -> impl Strategy<Value = Capability> {
    "[a-z][a-z0-9_-]{0,10}(\\.[a-z0-9][a-z0-9_-]{0,10}){1,3}".prop_map(|raw| capability(&raw))
}

/// Arbitrary explicit (non-wildcard) permission sets.
pub fn arb_permission_set() -> impl Strategy<Value = PermissionSet> {
    proptest::collection::btree_set(arb_capability(), 0..12).prop_map(PermissionSet::Only)
}

/// Arbitrary actors without the wildcard.
pub fn arb_actor() -> impl Strategy<Value = Actor> {
    (arb_permission_set(), prop::sample::select(Role::ALL.to_vec())).prop_map(
        |(permissions, role)| {
            let mut actor = actor_with(&[]).with_permissions(permissions);
            actor.role = role;
            actor
        },
    )
}
