//! Effect interfaces implemented by `invento-effects` handlers.

pub mod storage;

pub use storage::{StorageEffects, StorageError};
