pub mod auth;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod protocol;
pub mod server;
pub mod utils;

pub use auth::{DaoLoginService, InMemoryLoginDao, LoginDao, LoginService, UserForm};
pub use config::AppConfig;
pub use controller::{LoginController, ResultCode};
pub use server::Server;
