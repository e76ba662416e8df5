//! Login, logout and whoami.

use anyhow::Result;
use invento_app::SessionStore;
use invento_authentication::{ActorDirectory, Authenticator, Credentials};
use invento_core::effects::StorageEffects;
use invento_core::Actor;
use std::io::Write;

/// Authenticate and, on success, start a session.
pub async fn handle_login<S, D>(
    session: &mut SessionStore<S>,
    authenticator: &Authenticator<D>,
    email: String,
    password: String,
    out: &mut dyn Write,
) -> Result<()>
where
    S: StorageEffects,
    D: ActorDirectory,
{
    let actor = authenticator
        .authenticate(&Credentials::new(email, password))
        .await?;
    writeln!(out, "Signed in as {} ({})", actor.name, actor.role.title())?;
    session.login(actor);
    Ok(())
}

/// End the session.
pub fn handle_logout<S: StorageEffects>(
    session: &mut SessionStore<S>,
    out: &mut dyn Write,
) -> Result<()> {
    match session.current_actor() {
        Some(actor) => writeln!(out, "Signed out {}", actor.name)?,
        None => writeln!(out, "Not signed in")?,
    }
    session.logout();
    Ok(())
}

/// Describe the signed-in actor.
pub fn handle_whoami<S: StorageEffects>(
    session: &SessionStore<S>,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(actor) = session.current_actor() else {
        writeln!(out, "Not signed in")?;
        return Ok(());
    };
    write_actor(actor, out)
}

fn write_actor(actor: &Actor, out: &mut dyn Write) -> Result<()> {
    let permissions: Vec<String> = actor.permissions.clone().into();
    let warehouses: Vec<String> = actor.warehouses.clone().into();

    writeln!(out, "{} <{}>", actor.name, actor.email)?;
    writeln!(out, "  id:          {}", actor.id)?;
    writeln!(out, "  role:        {}", actor.role.title())?;
    writeln!(out, "  department:  {}", actor.department)?;
    writeln!(out, "  permissions: {}", permissions.join(", "))?;
    writeln!(out, "  warehouses:  {}", warehouses.join(", "))?;
    if let Some(at) = actor.last_login {
        writeln!(out, "  last login:  {}", at.format("%Y-%m-%d %H:%M UTC"))?;
    }
    Ok(())
}
