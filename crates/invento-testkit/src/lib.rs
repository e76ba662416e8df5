//! # Invento Testkit
//!
//! Shared test infrastructure. Production crates never depend on this crate
//! outside `[dev-dependencies]`.
//!
//! - [`fixtures`]: actor builders and proptest strategies
//! - [`storage`]: storage handlers that fail or hold corrupted records on demand

#![allow(clippy::unwrap_used, clippy::expect_used)]

pub mod fixtures;
pub mod storage;

pub use fixtures::{
    actor_with, arb_actor, arb_capability, arb_permission_set, capability, wildcard_actor,
};
pub use storage::{corrupt, FaultyStorage};
