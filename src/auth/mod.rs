//! Authentication system
//!
//! Login forms, credential lookup, and the service that turns lookups
//! into a login decision.

pub mod dao;
pub mod form;
pub mod service;
pub mod validator;

pub use dao::{InMemoryLoginDao, LoginDao};
pub use form::UserForm;
pub use service::{DaoLoginService, LoginService, SharedLoginDao};
pub use validator::{InputLimits, validate_form};
