//! Client session management
//!
//! Per-connection login state and the command loop that drives it.

pub mod handler;
pub mod session;

pub use handler::{handle_client, handle_command};
pub use session::ClientSession;
