//! # Invento Authentication
//!
//! Turns login inputs into an [`Actor`](invento_core::Actor).
//!
//! Passwords are checked for shape only. There is no secret to verify them
//! against: any password meeting the [`CredentialPolicy`] is accepted for an
//! email the [`ActorDirectory`] knows. A simulated network delay runs before
//! the actor is handed back, so callers observe the same asynchronous shape a
//! real identity service would have.
//!
//! Failures are user-correctable and reported through
//! [`AuthenticationError`]. An unknown email never reveals which field was
//! wrong.

mod authenticator;
mod credentials;
mod directory;
mod errors;

pub use authenticator::{Authenticator, DEFAULT_LOGIN_DELAY};
pub use credentials::{CredentialPolicy, Credentials, Registration};
pub use directory::{ActorDirectory, InMemoryDirectory, DEFAULT_REGISTRATION_PERMISSIONS};
pub use errors::AuthenticationError;
