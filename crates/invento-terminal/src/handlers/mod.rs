//! Command handlers
//!
//! Each handler writes its human-readable output to the writer it is given,
//! so tests can capture it. Failures that the user should see (bad
//! credentials, malformed capability names) are returned as errors.

use anyhow::Result;
use invento_app::{AppConfig, SessionStore, ViewRegistry, ViewRouter};
use invento_authentication::{Authenticator, InMemoryDirectory};
use invento_authorization::CapabilityCatalog;
use invento_core::effects::StorageEffects;
use invento_core::ViewId;
use std::io::Write;

use crate::cli::Commands;

pub mod access;
pub mod navigation;
pub mod roles;
pub mod session;

/// Everything one invocation needs.
pub struct CliHandler<S: StorageEffects> {
    session: SessionStore<S>,
    router: ViewRouter,
    authenticator: Authenticator<InMemoryDirectory>,
    catalog: CapabilityCatalog,
}

impl<S: StorageEffects> CliHandler<S> {
    /// Restore the session from `storage` and build the router and
    /// authenticator described by `config`.
    pub fn new(config: &AppConfig, storage: S) -> Result<Self> {
        let registry =
            ViewRegistry::standard_with_default(&ViewId::from(config.default_view.as_str()))?;
        let authenticator = Authenticator::new(InMemoryDirectory::demo()?)
            .with_policy(config.credential_policy())
            .with_delay(config.login_delay());

        Ok(Self {
            session: SessionStore::from_config(storage, config),
            router: ViewRouter::new(registry),
            authenticator,
            catalog: CapabilityCatalog::standard(),
        })
    }

    /// Run one command.
    pub async fn dispatch(&mut self, command: Commands, out: &mut dyn Write) -> Result<()> {
        match command {
            Commands::Login { email, password } => {
                session::handle_login(&mut self.session, &self.authenticator, email, password, out)
                    .await
            }
            Commands::Logout => session::handle_logout(&mut self.session, out),
            Commands::Whoami => session::handle_whoami(&self.session, out),
            Commands::Views => navigation::handle_views(&self.router, &self.session, out),
            Commands::Open { view } => {
                navigation::handle_open(&mut self.router, &self.session, &view, out)
            }
            Commands::Check {
                capability,
                warehouse,
            } => access::handle_check(
                &self.session,
                &self.catalog,
                &capability,
                warehouse.as_deref(),
                out,
            ),
            Commands::Roles => roles::handle_roles(out),
        }
    }

    /// The session store.
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// The router.
    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    /// Shut down, returning the storage handler.
    pub fn into_storage(self) -> S {
        self.session.dispose()
    }
}
