//! login-flow - Entry Point
//!
//! Serves the login controller over a line-based TCP protocol.

use log::info;

use login_flow::error::ServerError;
use login_flow::error::handlers::handle_server_error;
use login_flow::utils::logging::setup_logging;
use login_flow::{AppConfig, Server};

#[tokio::main]
async fn main() {
    setup_logging();

    info!("Launching login server...");

    if let Err(e) = run().await {
        handle_server_error(&e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = AppConfig::load()?;
    let server = Server::bind(config).await?;
    server.start().await;
    Ok(())
}
