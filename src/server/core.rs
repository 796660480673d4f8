use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::auth::{InMemoryLoginDao, InputLimits, SharedLoginDao};
use crate::client::{ClientSession, handle_client};
use crate::config::AppConfig;
use crate::error::ServerError;

pub struct Server {
    listener: TcpListener,
    login_dao: SharedLoginDao,
    limits: InputLimits,
}

impl Server {
    /// Binds the listener and builds the credential store from `config`.
    pub async fn bind(config: AppConfig) -> Result<Self, ServerError> {
        let socket = config.control_socket();
        let listener = TcpListener::bind(&socket).await?;
        info!("Server bound to {}", socket);

        let login_dao = InMemoryLoginDao::from_config(&config);
        if login_dao.is_empty() {
            warn!("Credential table is empty; every login will report ERROR");
        } else {
            info!("Loaded {} credential(s)", login_dao.len());
        }

        Ok(Self::with_dao(listener, Arc::new(login_dao), InputLimits::from(&config)))
    }

    pub fn with_dao(listener: TcpListener, login_dao: SharedLoginDao, limits: InputLimits) -> Self {
        Self {
            listener,
            login_dao,
            limits,
        }
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn start(self) {
        info!("Starting login-flow server");

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    info!("Client connected: {}", addr);
                    let session = ClientSession::new(Arc::clone(&self.login_dao), self.limits);

                    // Spawn a task for each client so accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) = handle_client(stream, addr, session).await {
                            warn!("Failed to handle client {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}
