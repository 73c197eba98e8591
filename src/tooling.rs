//! Tooling & Integration Layer
//!
//! CLI commands and text rendering over the tree builder and attendance rules.

pub mod cli;
pub mod format;

pub use cli::{AttendanceCommands, Cli, CliContext, Commands};
