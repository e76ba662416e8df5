//! Permission-gated navigation.
//!
//! The router remembers one current view and answers "what should be drawn"
//! against whatever session it is handed. It never caches that answer, so
//! after a login or logout the caller simply asks again with
//! [`ViewRouter::render`].

use std::fmt;

use invento_authorization::permits;
use invento_core::effects::StorageEffects;
use invento_core::{Actor, ViewId};
use tracing::debug;

use crate::session::SessionStore;
use crate::views::{ViewDescriptor, ViewRegistry};

/// Anything that can report the current actor.
pub trait ActorSource {
    /// The authenticated actor, if any.
    fn current_actor(&self) -> Option<&Actor>;
}

impl<S: StorageEffects> ActorSource for SessionStore<S> {
    fn current_actor(&self) -> Option<&Actor> {
        SessionStore::current_actor(self)
    }
}

impl ActorSource for Option<Actor> {
    fn current_actor(&self) -> Option<&Actor> {
        self.as_ref()
    }
}

/// What the frontend should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    /// Nobody is logged in; show the login screen
    Unauthenticated,
    /// The actor may not open this view; show access denied
    Denied(ViewId),
    /// Show this view
    Show(ViewId),
}

impl fmt::Display for RenderInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => f.write_str("unauthenticated"),
            Self::Denied(view) => write!(f, "access denied: {view}"),
            Self::Show(view) => write!(f, "show {view}"),
        }
    }
}

/// Tracks the current view.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    registry: ViewRegistry,
    current: ViewId,
}

impl ViewRouter {
    /// Start on the registry's default view.
    pub fn new(registry: ViewRegistry) -> Self {
        let current = registry.default_view().id.clone();
        Self { registry, current }
    }

    /// Navigate to `view_id` and report what to draw.
    ///
    /// Unknown ids fall back to the default view. The destination becomes
    /// current even when access is denied or nobody is logged in, so a later
    /// [`render`](Self::render) re-evaluates the same destination.
    pub fn select(&mut self, source: &impl ActorSource, view_id: &ViewId) -> RenderInstruction {
        let descriptor = self.registry.resolve(view_id);
        if &descriptor.id != view_id {
            debug!(requested = %view_id, view_id = %descriptor.id, "unknown view, using default");
        }
        self.current = descriptor.id.clone();
        self.render(source)
    }

    /// Re-evaluate the current view against the current session.
    pub fn render(&self, source: &impl ActorSource) -> RenderInstruction {
        let actor = source.current_actor();
        let Some(actor) = actor else {
            return RenderInstruction::Unauthenticated;
        };

        let descriptor = self.registry.resolve(&self.current);
        if permits(Some(actor), &descriptor.requirement) {
            debug!(actor_id = %actor.id, view_id = %descriptor.id, "view permitted");
            RenderInstruction::Show(descriptor.id.clone())
        } else {
            debug!(
                actor_id = %actor.id,
                view_id = %descriptor.id,
                requirement = %descriptor.requirement,
                "view denied"
            );
            RenderInstruction::Denied(descriptor.id.clone())
        }
    }

    /// The current view id.
    pub fn current_view(&self) -> &ViewId {
        &self.current
    }

    /// Views the current actor may open, in navigation order. Empty when
    /// nobody is logged in.
    pub fn available_views(&self, source: &impl ActorSource) -> Vec<&ViewDescriptor> {
        let actor = source.current_actor();
        self.registry
            .iter()
            .filter(|view| permits(actor, &view.requirement))
            .collect()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }
}
