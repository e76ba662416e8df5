//! # Invento Effects
//!
//! Handlers for the effect interfaces declared in `invento-core`.
//!
//! - [`MemoryStorageHandler`]: process-local storage, used for tests and for
//!   hosts without a writable disk
//! - [`FilesystemStorageHandler`]: one file per key under a base directory

pub mod storage;

pub use storage::{FilesystemStorageHandler, MemoryStorageHandler};
