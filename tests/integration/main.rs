//! Integration tests for codac core

mod attendance_contracts;
mod cli_commands;
mod tree_properties;
