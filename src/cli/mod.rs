//! CLI module
//!
//! Provides command-line interface for:
//! - schema: Create validated collections and the firebaseUid index
//! - seed: Insert sample fixtures
//! - verify: Check cross-collection references
//! - setup: All of the above, in order

mod args;
mod commands;

pub use args::{Cli, Command, SeedArgs};
pub use commands::{run_command, schema, seed, setup, verify};
