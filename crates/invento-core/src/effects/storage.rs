//! Key-value storage effects.
//!
//! Durable client storage is a flat namespace of string keys holding opaque
//! bytes, the same shape as browser local storage. All operations run
//! synchronously to completion.

use std::sync::Arc;

use crate::errors::InventoError;

/// Storage operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Key rejected before touching the backend
    #[error("Invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected
        reason: String,
    },

    /// Reading a value failed
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// Writing a value failed
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Removing a value failed
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

impl From<StorageError> for InventoError {
    fn from(err: StorageError) -> Self {
        InventoError::storage(err.to_string())
    }
}

/// Reject keys a backend cannot address.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey {
            reason: "Key cannot be empty".to_string(),
        });
    }
    if key.contains("..") || key.starts_with('/') || key.contains('\\') {
        return Err(StorageError::InvalidKey {
            reason: format!("Key `{key}` must be a relative name"),
        });
    }
    Ok(())
}

/// Synchronous key-value storage.
pub trait StorageEffects: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Fetch the value under `key`, if any.
    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Remove `key`. Returns whether a value was present.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;

    /// Whether a value exists under `key`.
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.retrieve(key)?.is_some())
    }
}

impl<T: StorageEffects + ?Sized> StorageEffects for Arc<T> {
    fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        (**self).store(key, value)
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).retrieve(key)
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        (**self).remove(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        (**self).exists(key)
    }
}

impl<T: StorageEffects + ?Sized> StorageEffects for Box<T> {
    fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        (**self).store(key, value)
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).retrieve(key)
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        (**self).remove(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        (**self).exists(key)
    }
}
