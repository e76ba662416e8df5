//! Session store
//!
//! Holds the currently authenticated actor and mirrors it into storage as a
//! JSON record under a single key, so a restarted process picks up where the
//! last one left off.
//!
//! Persistence never fails a session operation. A record that cannot be read
//! or parsed restores as "no session" and is discarded. Write and delete
//! failures are logged and the in-memory state changes anyway.

use std::fmt;

use invento_core::effects::{StorageEffects, StorageError};
use invento_core::{Actor, InventoError};
use tracing::{debug, info, warn};

use crate::config::AppConfig;

/// Session persistence errors. Recovered inside the store; exposed so callers
/// can convert them when reading records by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The persisted record is not a valid actor
    #[error("Persisted session is corrupted: {0}")]
    PersistenceCorruption(String),

    /// The storage backend failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<SessionError> for InventoError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::PersistenceCorruption(message) => InventoError::serialization(message),
            SessionError::Storage(err) => err.into(),
        }
    }
}

/// A change to the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// An actor logged in, replacing any previous one
    LoggedIn(Actor),
    /// The session was cleared
    LoggedOut,
}

/// Receives session changes.
pub trait SessionObserver: Send {
    /// Called after the store's state has changed.
    fn on_event(&mut self, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent) + Send,
{
    fn on_event(&mut self, event: &SessionEvent) {
        self(event);
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The current actor and its persisted mirror.
pub struct SessionStore<S: StorageEffects> {
    storage: S,
    key: String,
    current: Option<Actor>,
    observers: Vec<(SubscriptionId, Box<dyn SessionObserver>)>,
    next_subscription: u64,
}

impl<S: StorageEffects> SessionStore<S> {
    /// Open a store over `storage`, restoring whatever actor is persisted
    /// under `key`. Never fails: a missing, unreadable or corrupted record
    /// yields an unauthenticated store.
    pub fn init(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match restore(&storage, &key) {
            Ok(Some(actor)) => {
                info!(key = %key, actor_id = %actor.id, "restored persisted session");
                Some(actor)
            }
            Ok(None) => {
                debug!(key = %key, "no persisted session");
                None
            }
            Err(SessionError::PersistenceCorruption(reason)) => {
                warn!(key = %key, %reason, "discarding corrupted session record");
                if let Err(e) = storage.remove(&key) {
                    warn!(key = %key, error = %e, "failed to discard corrupted session record");
                }
                None
            }
            Err(SessionError::Storage(e)) => {
                warn!(key = %key, error = %e, "could not read persisted session");
                None
            }
        };

        Self {
            storage,
            key,
            current,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Open a store using the configured session key.
    pub fn from_config(storage: S, config: &AppConfig) -> Self {
        Self::init(storage, config.session_key.clone())
    }

    /// Make `actor` the current actor and persist it. Logging in again
    /// replaces the previous actor.
    pub fn login(&mut self, actor: Actor) {
        match serde_json::to_vec(&actor) {
            Ok(bytes) => {
                if let Err(e) = self.storage.store(&self.key, bytes) {
                    warn!(key = %self.key, actor_id = %actor.id, error = %e, "failed to persist session");
                }
            }
            Err(e) => {
                warn!(actor_id = %actor.id, error = %e, "failed to serialize session");
            }
        }

        info!(actor_id = %actor.id, role = %actor.role, "logged in");
        self.current = Some(actor.clone());
        self.notify(&SessionEvent::LoggedIn(actor));
    }

    /// Clear the current actor and its persisted record.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove(&self.key) {
            warn!(key = %self.key, error = %e, "failed to clear persisted session");
        }

        if let Some(actor) = self.current.take() {
            info!(actor_id = %actor.id, "logged out");
            self.notify(&SessionEvent::LoggedOut);
        }
    }

    /// The current actor, if any.
    pub fn current_actor(&self) -> Option<&Actor> {
        self.current.as_ref()
    }

    /// Whether an actor is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The storage handler.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The storage key of the persisted record.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Register an observer for later session changes.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Tear the store down, dropping observers and returning the storage.
    /// The persisted record is left as it is.
    pub fn dispose(self) -> S {
        debug!(key = %self.key, observers = self.observers.len(), "disposing session store");
        self.storage
    }

    fn notify(&mut self, event: &SessionEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(event);
        }
    }
}

impl<S: StorageEffects + fmt::Debug> fmt::Debug for SessionStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("storage", &self.storage)
            .field("key", &self.key)
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn restore<S: StorageEffects>(storage: &S, key: &str) -> Result<Option<Actor>, SessionError> {
    let Some(bytes) = storage.retrieve(key)? else {
        return Ok(None);
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| SessionError::PersistenceCorruption(e.to_string()))
}
