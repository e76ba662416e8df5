//! Storage handlers for failure-path tests.

use invento_core::effects::{StorageEffects, StorageError};
use invento_effects::MemoryStorageHandler;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Memory storage whose reads, writes and deletes can be switched to fail.
///
/// Clones share both the data and the fault switches.
#[derive(Debug, Clone, Default)]
pub struct FaultyStorage {
    inner: MemoryStorageHandler,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    fail_deletes: Arc<AtomicBool>,
}

impl FaultyStorage {
    /// Healthy storage; flip switches to inject faults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `retrieve`/`exists` fail.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every `store` fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every `remove` fail.
    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// The healthy backing store, bypassing fault injection.
    pub fn backing(&self) -> &MemoryStorageHandler {
        &self.inner
    }
}

impl StorageEffects for FaultyStorage {
    fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed("injected write fault".into()));
        }
        self.inner.store(key, value)
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::ReadFailed("injected read fault".into()));
        }
        self.inner.retrieve(key)
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StorageError::DeleteFailed("injected delete fault".into()));
        }
        self.inner.remove(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::ReadFailed("injected read fault".into()));
        }
        self.inner.exists(key)
    }
}

/// Overwrite `key` with bytes that are not a valid record.
pub fn corrupt(storage: &impl StorageEffects, key: &str) {
    storage
        .store(key, b"{\"id\":\"1\",\"permissions\":[\"*\"".to_vec())
        .expect("corrupting a record requires a writable store");
}
