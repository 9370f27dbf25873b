//! Campus Navigator CLI library.
//!
//! Argument types, subcommand handlers, and output formatting for the
//! `campusnav-cli` binary.

pub mod commands;
pub mod output;
