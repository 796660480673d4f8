//! Error handlers
//!
//! Collapses login errors into result codes at the controller boundary.

use crate::controller::ResultCode;
use crate::error::types::{LoginError, ServerError};
use log::{error, warn};

/// Log a login error at the level its kind deserves
pub fn handle_login_error(err: &LoginError) {
    match err {
        LoginError::AuthenticationRejected(_) => warn!("{}", err),
        LoginError::AbsentInput => warn!("Login rejected: {}", err),
        LoginError::CollaboratorFailure(_) => error!("Login aborted: {}", err),
    }
}

/// Log a server error
pub fn handle_server_error(err: &ServerError) {
    error!("Login server error: {}", err);
}

/// Convert a login error to the result code reported to the caller
pub fn error_to_result_code(err: &LoginError) -> ResultCode {
    match err {
        LoginError::AbsentInput => ResultCode::Error,
        LoginError::CollaboratorFailure(_) => ResultCode::Error,
        LoginError::AuthenticationRejected(_) => ResultCode::Ko,
    }
}
