//! Navigation listing and view selection.

use anyhow::Result;
use invento_app::{ActorSource, RenderInstruction, ViewRouter};
use invento_core::ViewId;
use std::io::Write;

/// List the views the current actor may open.
pub fn handle_views(
    router: &ViewRouter,
    source: &impl ActorSource,
    out: &mut dyn Write,
) -> Result<()> {
    if source.current_actor().is_none() {
        writeln!(out, "Not signed in")?;
        return Ok(());
    }

    for view in router.available_views(source) {
        writeln!(
            out,
            "{:<16} {:<16} {}",
            view.id.as_str(),
            view.label,
            view.description
        )?;
    }
    Ok(())
}

/// Navigate to `view` and print the outcome.
pub fn handle_open(
    router: &mut ViewRouter,
    source: &impl ActorSource,
    view: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let instruction = router.select(source, &ViewId::from(view));
    match &instruction {
        RenderInstruction::Unauthenticated => writeln!(out, "Please sign in first")?,
        RenderInstruction::Denied(id) => {
            let requirement = router
                .registry()
                .get(id)
                .map(|descriptor| descriptor.requirement.to_string())
                .unwrap_or_default();
            writeln!(out, "Access denied: {id} requires {requirement}")?;
        }
        RenderInstruction::Show(id) => {
            let label = router
                .registry()
                .get(id)
                .map_or(id.as_str(), |descriptor| descriptor.label.as_str());
            writeln!(out, "Showing {label}")?;
        }
    }
    Ok(())
}
