//! Error types
//!
//! Defines domain-specific error types for each layer of the login flow.

use std::io;
use thiserror::Error;

/// Errors raised by the login service and the credential store behind it
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Credential store unavailable")]
    StoreUnavailable,

    #[error("Backend failure: {0}")]
    Backend(String),
}

/// Ways a single controller login attempt can fail to produce `OK`
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("No login form supplied")]
    AbsentInput,

    #[error("Login service failed: {0}")]
    CollaboratorFailure(#[from] AuthError),

    #[error("Authentication rejected for user: {0}")]
    AuthenticationRejected(String),
}

/// Server plumbing errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
