//! Client session
//!
//! Owns the controller (and through it the login service) of one connection.

use crate::auth::{DaoLoginService, InputLimits, LoginService, SharedLoginDao, UserForm};
use crate::controller::{LoginController, ResultCode};

/// Login state of a single connected client.
pub struct ClientSession {
    controller: LoginController,
}

impl ClientSession {
    /// Creates a session with its own service over the shared credential store.
    pub fn new(login_dao: SharedLoginDao, limits: InputLimits) -> Self {
        let service = DaoLoginService::new(login_dao).with_limits(limits);
        Self::with_service(Box::new(service))
    }

    pub fn with_service(login_service: Box<dyn LoginService + Send>) -> Self {
        Self {
            controller: LoginController::new(login_service),
        }
    }

    pub fn login(&mut self, form: Option<&UserForm>) -> ResultCode {
        self.controller.login(form)
    }

    pub fn current_user(&self) -> Option<String> {
        self.controller.login_service().current_user()
    }
}
