//! Ad-hoc capability checks.

use anyhow::Result;
use invento_app::ActorSource;
use invento_authorization::{can_operate_in, has_permission, CapabilityCatalog};
use invento_core::{Capability, WarehouseId};
use std::io::Write;

/// Report whether the current actor holds `capability`, and optionally
/// whether it may operate in `warehouse`.
pub fn handle_check(
    source: &impl ActorSource,
    catalog: &CapabilityCatalog,
    capability: &str,
    warehouse: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let capability = Capability::parse(capability)?;
    let actor = source.current_actor();

    let verdict = if has_permission(actor, &capability) {
        "granted"
    } else {
        "denied"
    };
    if catalog.contains(&capability) {
        writeln!(out, "{capability}: {verdict}")?;
    } else {
        writeln!(out, "{capability}: {verdict} (not a known capability)")?;
    }

    if let Some(warehouse) = warehouse {
        let warehouse = WarehouseId::from(warehouse);
        let verdict = if can_operate_in(actor, &warehouse) {
            "granted"
        } else {
            "denied"
        };
        writeln!(out, "warehouse {warehouse}: {verdict}")?;
    }
    Ok(())
}
