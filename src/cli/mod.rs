//! CLI command handlers.
//!
//! This module provides the read-only listing and the in-place update
//! commands behind the `keymap-diagram` binary.

pub mod common;
pub mod show;
pub mod update;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use show::ShowArgs;
pub use update::UpdateArgs;
