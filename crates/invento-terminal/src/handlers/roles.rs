//! Role descriptions.

use anyhow::Result;
use invento_core::Role;
use std::io::Write;

/// Print every role with its summary and feature list.
pub fn handle_roles(out: &mut dyn Write) -> Result<()> {
    for role in Role::ALL {
        writeln!(out, "{} ({})", role.title(), role.as_str())?;
        writeln!(out, "  {}", role.description())?;
        for feature in role.features() {
            writeln!(out, "  - {feature}")?;
        }
    }
    Ok(())
}
