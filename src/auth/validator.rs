//! Login form validation
//!
//! Basic input sanitation applied before credentials reach the store.

use super::form::UserForm;
use crate::config::AppConfig;
use crate::error::AuthError;

pub const DEFAULT_MAX_USERNAME_LENGTH: usize = 64;
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 128;

/// Length limits for submitted credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub max_username_length: usize,
    pub max_password_length: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
            max_password_length: DEFAULT_MAX_PASSWORD_LENGTH,
        }
    }
}

impl From<&AppConfig> for InputLimits {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_username_length: config.max_username_length,
            max_password_length: config.max_password_length,
        }
    }
}

/// Rejects blank, over-long, or control-character input.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Checks both fields of a form against the configured limits.
pub fn validate_form(form: &UserForm, limits: &InputLimits) -> Result<(), AuthError> {
    if !is_valid_input(&form.username, limits.max_username_length) {
        return Err(AuthError::MalformedInput("Invalid username format".into()));
    }

    if !is_valid_input(&form.password, limits.max_password_length) {
        return Err(AuthError::MalformedInput("Invalid password format".into()));
    }

    Ok(())
}
