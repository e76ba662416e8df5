//! # Invento App
//!
//! Headless application core for Invento frontends. It owns no rendering; a
//! frontend asks it what to show and draws the answer.
//!
//! - [`SessionStore`]: the current actor, persisted through any
//!   [`StorageEffects`](invento_core::effects::StorageEffects) handler
//! - [`ViewRegistry`]: the static table of navigable views
//! - [`ViewRouter`]: the current view, gated by the actor's permissions
//! - [`AppConfig`]: file and environment configuration
//!
//! The session is passed explicitly to whatever needs it. There is no global
//! state, and nothing is invalidated behind the caller's back: after a login
//! or logout, call [`ViewRouter::render`] again to get the up-to-date answer.

pub mod config;
pub mod router;
pub mod session;
pub mod views;

pub use config::{AppConfig, ConfigError};
pub use router::{ActorSource, RenderInstruction, ViewRouter};
pub use session::{SessionError, SessionEvent, SessionObserver, SessionStore, SubscriptionId};
pub use views::{ViewDescriptor, ViewRegistry, DEFAULT_VIEW};
