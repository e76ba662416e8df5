//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level arguments
#[derive(Debug, Parser)]
#[command(name = "invento")]
#[command(about = "Invento - inventory access control from the terminal", long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (TOML or JSON); missing means defaults
    #[arg(short, long, global = true, default_value = "invento.toml")]
    pub config: PathBuf,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and remember the session
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Forget the current session
    Logout,

    /// Show the signed-in actor
    Whoami,

    /// List the views the signed-in actor may open
    Views,

    /// Navigate to a view and print what would be shown
    Open {
        /// View id, e.g. `inventory`
        view: String,
    },

    /// Check whether the signed-in actor holds a capability
    Check {
        /// Capability name, e.g. `inventory.write`
        capability: String,

        /// Also check access to this warehouse
        #[arg(short, long)]
        warehouse: Option<String>,
    },

    /// Describe the available roles
    Roles,
}
