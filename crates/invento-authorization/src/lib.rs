//! # Invento Authorization
//!
//! Permission evaluation over an optional current [`Actor`].
//!
//! Everything here is a pure function of its arguments, cheap enough to call
//! on every render or navigation. Matching is exact: a permission set either
//! is the wildcard or lists the capability verbatim. There is no prefix or
//! hierarchical matching.
//!
//! ```rust
//! use invento_authorization::has_permission;
//! use invento_core::{Actor, Capability, PermissionSet, Role};
//!
//! let viewer = Actor::new("4", "Lisa Viewer", "viewer@invento.com", Role::Viewer)
//!     .with_permissions(PermissionSet::parse(["inventory.read"]).unwrap());
//! let read: Capability = "inventory.read".parse().unwrap();
//! let write: Capability = "inventory.write".parse().unwrap();
//!
//! assert!(has_permission(Some(&viewer), &read));
//! assert!(!has_permission(Some(&viewer), &write));
//! assert!(!has_permission(None, &read));
//! ```
//!
//! [`Actor`]: invento_core::Actor

mod catalog;
mod evaluator;
mod requirement;

pub use catalog::CapabilityCatalog;
pub use evaluator::{can_operate_in, has_permission, permits};
pub use requirement::Requirement;
