//! Login controller
//!
//! Entry point of the login flow and the result codes it reports.

pub mod login;
pub mod result;

pub use login::{BoxedLoginService, LoginController};
pub use result::ResultCode;
