//! # Invento Core
//!
//! Foundation types shared by every Invento crate:
//!
//! - [`Actor`]: the signed-in identity, with its [`Role`], [`PermissionSet`] and
//!   [`WarehouseScope`]
//! - [`Capability`]: a validated, dot-namespaced permission name
//! - Identifiers ([`ActorId`], [`WarehouseId`], [`ViewId`])
//! - [`InventoError`]: the unified error type
//! - [`effects::StorageEffects`]: the key-value storage interface implemented by
//!   `invento-effects`
//!
//! This crate holds no policy. Permission evaluation lives in
//! `invento-authorization`, and session handling lives in `invento-app`.

pub mod effects;
pub mod errors;
pub mod types;

pub use errors::{InventoError, Result};
pub use types::actor::{Actor, Role};
pub use types::capability::{Capability, PermissionSet, WarehouseScope, WILDCARD};
pub use types::identifiers::{ActorId, ViewId, WarehouseId};
