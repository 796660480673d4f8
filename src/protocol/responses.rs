//! Protocol responses
//!
//! Fixed reply lines and response formatting.

use crate::controller::ResultCode;

pub const GREETING: &str = "READY login-flow";
pub const GOODBYE: &str = "BYE";
pub const NO_USER: &str = "NOUSER";
pub const UNKNOWN_COMMAND: &str = "ERROR unknown command";
pub const COMMAND_TOO_LONG: &str = "ERROR command too long";

/// Terminate a reply line
pub fn format_response(message: &str) -> String {
    format!("{}\r\n", message)
}

/// Reply line for a controller result code
pub fn format_result_code(code: ResultCode) -> String {
    format_response(code.as_str())
}

/// Reply line for a WHOAMI query
pub fn format_current_user(username: Option<&str>) -> String {
    match username {
        Some(name) => format_response(&format!("USER {}", name)),
        None => format_response(NO_USER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_codes_are_crlf_terminated() {
        assert_eq!(format_result_code(ResultCode::Ko), "KO\r\n");
    }

    #[test]
    fn test_current_user_reply() {
        assert_eq!(format_current_user(Some("alice")), "USER alice\r\n");
        assert_eq!(format_current_user(None), "NOUSER\r\n");
    }
}
