//! Login and registration flows.

use chrono::Utc;
use invento_core::Actor;
use std::time::Duration;
use tracing::{debug, info};

use crate::credentials::{CredentialPolicy, Credentials, Registration};
use crate::directory::{registered_actor, ActorDirectory};
use crate::errors::AuthenticationError;

/// Simulated round trip to the identity service.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Validates credentials against an [`ActorDirectory`].
///
/// The authenticator never touches the session. Its caller decides what to do
/// with the returned actor, usually `SessionStore::login`. Two overlapping
/// calls are independent: whichever result the caller applies last wins.
#[derive(Debug, Clone)]
pub struct Authenticator<D> {
    directory: D,
    policy: CredentialPolicy,
    delay: Duration,
}

impl<D: ActorDirectory> Authenticator<D> {
    /// Create an authenticator with the default policy and delay.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            policy: CredentialPolicy::default(),
            delay: DEFAULT_LOGIN_DELAY,
        }
    }

    /// Replace the credential policy.
    pub fn with_policy(mut self, policy: CredentialPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the simulated delay. Zero skips the wait.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The backing directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// The active credential policy.
    pub fn policy(&self) -> &CredentialPolicy {
        &self.policy
    }

    /// Check `credentials` and return the matching actor, stamped with the
    /// current time as its last login.
    ///
    /// Input validation and the directory lookup happen before the simulated
    /// delay, so malformed input fails immediately.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Actor, AuthenticationError> {
        self.policy.validate_login(credentials)?;

        let actor = self
            .directory
            .find_by_email(&credentials.email)
            .cloned()
            .ok_or_else(|| {
                debug!("no directory entry for login attempt");
                AuthenticationError::NotFound
            })?;

        self.simulate_round_trip().await;

        info!(actor_id = %actor.id, role = %actor.role, "authentication succeeded");
        Ok(actor.with_last_login(Utc::now()))
    }

    /// Enrol a new staff account and return it.
    pub async fn register(
        &mut self,
        registration: &Registration,
    ) -> Result<Actor, AuthenticationError> {
        self.policy.validate_registration(registration)?;
        if self.directory.find_by_email(&registration.email).is_some() {
            return Err(AuthenticationError::AlreadyRegistered);
        }

        self.simulate_round_trip().await;

        let actor = registered_actor(registration)?;
        self.directory.enroll(actor.clone())?;
        info!(actor_id = %actor.id, "registered new account");
        Ok(actor)
    }

    async fn simulate_round_trip(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
