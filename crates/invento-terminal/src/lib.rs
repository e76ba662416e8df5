//! # Invento Terminal
//!
//! Command-line front end. Each invocation restores the persisted session,
//! runs one command and exits; the session record carries state between
//! invocations.

pub mod cli;
pub mod handlers;

pub use cli::{Cli, Commands};
pub use handlers::CliHandler;
