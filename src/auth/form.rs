//! Login form
//!
//! The payload a client submits when asking to log in.

use std::fmt;

/// Username and password submitted for a login attempt.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    pub password: String,
}

impl UserForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps passwords out of the logs.
impl fmt::Debug for UserForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
