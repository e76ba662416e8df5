//! Identity and permission types.

pub mod actor;
pub mod capability;
pub mod identifiers;
