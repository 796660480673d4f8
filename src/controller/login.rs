//! Module `login`
//!
//! Defines the `LoginController`, the entry point of the login flow. It checks
//! that a form was supplied, asks its `LoginService` whether the credentials
//! are valid, and records the authenticated user on success.
//!
//! Every failure is collapsed into a `ResultCode` here; no error reaches the
//! caller.

use log::{debug, info};

use super::result::ResultCode;
use crate::auth::{LoginService, UserForm};
use crate::error::LoginError;
use crate::error::handlers::{error_to_result_code, handle_login_error};

/// Boxed service owned by a controller.
pub type BoxedLoginService = Box<dyn LoginService + Send>;

pub struct LoginController {
    login_service: BoxedLoginService,
}

impl LoginController {
    pub fn new(login_service: BoxedLoginService) -> Self {
        Self { login_service }
    }

    /// Replaces the service used by subsequent logins.
    pub fn set_login_service(&mut self, login_service: BoxedLoginService) {
        self.login_service = login_service;
    }

    pub fn login_service(&self) -> &(dyn LoginService + Send) {
        self.login_service.as_ref()
    }

    /// Attempts a login.
    ///
    /// Returns `Error` for a missing form or a failing service, `Ko` when the
    /// service rejects the credentials, and `Ok` once the current user has
    /// been recorded.
    pub fn login(&mut self, form: Option<&UserForm>) -> ResultCode {
        match self.authenticate(form) {
            Ok(code) => code,
            Err(e) => {
                handle_login_error(&e);
                error_to_result_code(&e)
            }
        }
    }

    fn authenticate(&mut self, form: Option<&UserForm>) -> Result<ResultCode, LoginError> {
        let form = form.ok_or(LoginError::AbsentInput)?;
        debug!("Checking credentials for {}", form.username);

        if !self.login_service.login(form)? {
            return Err(LoginError::AuthenticationRejected(form.username.clone()));
        }

        self.login_service.set_current_user(&form.username);
        info!("User {} logged in", form.username);
        Ok(ResultCode::Ok)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate;

    use super::*;
    use crate::auth::DaoLoginService;
    use crate::auth::dao::MockLoginDao;
    use crate::auth::service::MockLoginService;
    use crate::error::AuthError;

    fn foo_form() -> UserForm {
        UserForm::new("foo", "secret")
    }

    #[test]
    fn test_absent_form_calls_nothing() {
        let mut service = MockLoginService::new();
        service.expect_login().never();
        service.expect_set_current_user().never();
        let mut controller = LoginController::new(Box::new(service));

        assert_eq!(controller.login(None), ResultCode::Error);
    }

    #[test]
    fn test_accepted_login_sets_current_user_once() {
        let mut service = MockLoginService::new();
        service
            .expect_login()
            .withf(|form: &UserForm| form.username == "foo")
            .times(1)
            .returning(|_| Ok(true));
        service
            .expect_set_current_user()
            .with(predicate::eq("foo"))
            .times(1)
            .return_const(());
        let mut controller = LoginController::new(Box::new(service));

        assert_eq!(controller.login(Some(&foo_form())), ResultCode::Ok);
    }

    #[test]
    fn test_rejected_login_only_calls_login() {
        let mut service = MockLoginService::new();
        service.expect_login().times(1).returning(|_| Ok(false));
        service.expect_set_current_user().never();
        let mut controller = LoginController::new(Box::new(service));

        assert_eq!(controller.login(Some(&foo_form())), ResultCode::Ko);
    }

    #[test]
    fn test_service_failure_becomes_error() {
        let mut service = MockLoginService::new();
        service
            .expect_login()
            .times(1)
            .returning(|_| Err(AuthError::Backend("illegal argument".into())));
        service.expect_set_current_user().never();
        let mut controller = LoginController::new(Box::new(service));

        assert_eq!(controller.login(Some(&UserForm::default())), ResultCode::Error);
    }

    #[test]
    fn test_argument_matching() {
        let mut service = MockLoginService::new();
        service.expect_login().times(1).returning(|_| Ok(true));
        service
            .expect_set_current_user()
            .with(predicate::str::starts_with("foo"))
            .times(1)
            .return_const(());
        let mut controller = LoginController::new(Box::new(service));

        let form = UserForm::new("foobar", "secret");
        assert_eq!(controller.login(Some(&form)), ResultCode::Ok);
    }

    #[test]
    fn test_real_service_over_mocked_dao() {
        let mut dao = MockLoginDao::new();
        dao.expect_login()
            .withf(|form: &UserForm| form.username == "foo")
            .times(1)
            .returning(|_| Ok(1));

        let mut stub = MockLoginService::new();
        stub.expect_login().never();
        let mut controller = LoginController::new(Box::new(stub));
        controller.set_login_service(Box::new(DaoLoginService::new(Arc::new(dao))));

        assert_eq!(controller.login(Some(&foo_form())), ResultCode::Ok);
        assert_eq!(
            controller.login_service().current_user().as_deref(),
            Some("foo")
        );
    }

    #[test]
    fn test_real_service_rejection_leaves_slot_empty() {
        let mut dao = MockLoginDao::new();
        dao.expect_login().times(1).returning(|_| Ok(0));
        let mut controller =
            LoginController::new(Box::new(DaoLoginService::new(Arc::new(dao))));

        assert_eq!(controller.login(Some(&foo_form())), ResultCode::Ko);
        assert_eq!(controller.login_service().current_user(), None);
    }

    #[test]
    fn test_each_attempt_is_independent() {
        let mut service = MockLoginService::new();
        let mut seq = mockall::Sequence::new();
        service
            .expect_login()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));
        service
            .expect_login()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        service
            .expect_set_current_user()
            .times(1)
            .return_const(());
        let mut controller = LoginController::new(Box::new(service));

        assert_eq!(controller.login(Some(&foo_form())), ResultCode::Ko);
        assert_eq!(controller.login(Some(&foo_form())), ResultCode::Ok);
    }
}
