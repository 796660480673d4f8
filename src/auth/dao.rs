//! Credential lookup
//!
//! The data-access layer behind the login service.

use std::collections::HashMap;

use log::debug;
#[cfg(test)]
use mockall::automock;

use super::form::UserForm;
use crate::config::AppConfig;
use crate::error::AuthError;

/// Looks up credential rows matching a login form.
#[cfg_attr(test, automock)]
pub trait LoginDao {
    /// Returns the number of stored rows matching `(username, password)`.
    fn login(&self, form: &UserForm) -> Result<u64, AuthError>;
}

/// Credential table held in memory, loaded from the `[users]` config table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoginDao {
    credentials: HashMap<String, String>,
}

impl InMemoryLoginDao {
    pub fn new(credentials: HashMap<String, String>) -> Self {
        Self { credentials }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.users.clone())
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl LoginDao for InMemoryLoginDao {
    fn login(&self, form: &UserForm) -> Result<u64, AuthError> {
        if self.credentials.is_empty() {
            return Err(AuthError::StoreUnavailable);
        }

        let rows = match self.credentials.get(&form.username) {
            Some(stored) if stored == &form.password => 1,
            _ => 0,
        };

        debug!("Credential lookup for {}: {} row(s)", form.username, rows);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dao() -> InMemoryLoginDao {
        InMemoryLoginDao::new(HashMap::from([
            ("alice".to_string(), "alice123".to_string()),
            ("bob".to_string(), "bob123".to_string()),
        ]))
    }

    #[test]
    fn test_matching_credentials_return_one_row() {
        let rows = dao().login(&UserForm::new("alice", "alice123")).unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_wrong_password_returns_no_rows() {
        let rows = dao().login(&UserForm::new("alice", "bob123")).unwrap();
        assert_eq!(rows, 0);
    }

    #[test]
    fn test_unknown_user_returns_no_rows() {
        let rows = dao().login(&UserForm::new("mallory", "alice123")).unwrap();
        assert_eq!(rows, 0);
    }

    #[test]
    fn test_empty_store_is_unavailable() {
        let err = InMemoryLoginDao::default()
            .login(&UserForm::new("alice", "alice123"))
            .unwrap_err();
        assert!(matches!(err, AuthError::StoreUnavailable));
    }
}
