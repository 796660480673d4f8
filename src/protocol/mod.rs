//! Login line protocol
//!
//! Handles command parsing and response formatting for the TCP front end.

pub mod commands;
pub mod responses;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
