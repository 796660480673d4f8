//! Server core functionality
//!
//! Accept loop of the login server.

pub mod core;

pub use core::Server;
