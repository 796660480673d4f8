//! Login service
//!
//! Turns credential lookups into a yes/no answer and remembers who logged in.

use std::sync::Arc;

use log::{debug, info};
#[cfg(test)]
use mockall::automock;

use super::dao::LoginDao;
use super::form::UserForm;
use super::validator::{InputLimits, validate_form};
use crate::error::AuthError;

/// Credential check plus the "current user" slot of one session.
#[cfg_attr(test, automock)]
pub trait LoginService {
    /// Returns whether the form carries valid credentials.
    fn login(&self, form: &UserForm) -> Result<bool, AuthError>;

    /// Records the authenticated identity.
    fn set_current_user(&mut self, username: &str);

    /// Returns an owned copy of the recorded identity, if any.
    fn current_user(&self) -> Option<String>;
}

/// Shared handle to a credential store.
pub type SharedLoginDao = Arc<dyn LoginDao + Send + Sync>;

/// `LoginService` backed by a `LoginDao`.
pub struct DaoLoginService {
    login_dao: SharedLoginDao,
    limits: InputLimits,
    current_user: Option<String>,
}

impl DaoLoginService {
    pub fn new(login_dao: SharedLoginDao) -> Self {
        Self {
            login_dao,
            limits: InputLimits::default(),
            current_user: None,
        }
    }

    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn set_login_dao(&mut self, login_dao: SharedLoginDao) {
        self.login_dao = login_dao;
    }
}

impl LoginService for DaoLoginService {
    fn login(&self, form: &UserForm) -> Result<bool, AuthError> {
        validate_form(form, &self.limits)?;

        let rows = self.login_dao.login(form)?;
        debug!("Login for {} matched {} credential row(s)", form.username, rows);
        Ok(rows > 0)
    }

    fn set_current_user(&mut self, username: &str) {
        info!("Current user set to {}", username);
        self.current_user = Some(username.to_string());
    }

    fn current_user(&self) -> Option<String> {
        self.current_user.clone()
    }
}
