//! Permission evaluator.

use invento_core::{Actor, Capability, WarehouseId};

use crate::requirement::Requirement;

/// Whether `actor` holds `capability`.
///
/// - no actor: `false`
/// - wildcard permission set: `true`
/// - otherwise: exact membership of `capability`
pub fn has_permission(actor: Option<&Actor>, capability: &Capability) -> bool {
    let Some(actor) = actor else {
        return false;
    };
    actor.permissions.is_wildcard() || actor.permissions.lists(capability)
}

/// Whether `actor` satisfies a view requirement.
///
/// [`Requirement::Always`] admits any authenticated actor, even one with an
/// empty permission set. Nobody satisfies anything without an actor.
pub fn permits(actor: Option<&Actor>, requirement: &Requirement) -> bool {
    match requirement {
        Requirement::Always => actor.is_some(),
        Requirement::Capability(capability) => has_permission(actor, capability),
    }
}

/// Whether `actor` may operate on `warehouse`.
pub fn can_operate_in(actor: Option<&Actor>, warehouse: &WarehouseId) -> bool {
    let Some(actor) = actor else {
        return false;
    };
    actor.warehouses.is_wildcard() || actor.warehouses.lists(warehouse)
}
