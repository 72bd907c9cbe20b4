//! Server core
//!
//! Owns the shared application state and the hyper http1 accept loop.
//! Each connection is served on its own task; handlers reach shared state
//! through the mutexes in `AppState`.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::auth::CredentialStore;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::handle_request;
use crate::session::SessionRegistry;

/// Shared application state
pub struct AppState {
    pub config: ServerConfig,
    /// Credential store; the lock serializes check-then-insert on register
    pub credentials: Mutex<CredentialStore>,
    /// Token-keyed session registry
    pub sessions: Mutex<SessionRegistry>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            credentials: Mutex::new(CredentialStore::new()),
            sessions: Mutex::new(SessionRegistry::new()),
        }
    }
}

pub struct Server {
    state: Arc<AppState>,
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Binds the listener at the configured address.
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let socket = config.http_socket();
        Self::bind(&socket, config).await
    }

    /// Binds the listener at an explicit address. Tests bind to port 0 for
    /// an ephemeral port and read it back via `local_addr`.
    pub async fn bind(socket: &str, config: ServerConfig) -> Result<Self, ServerError> {
        let listener = match TcpListener::bind(socket).await {
            Ok(listener) => {
                info!("Server bound to {}", socket);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", socket, e);
                return Err(e.into());
            }
        };

        let local_addr = listener.local_addr()?;

        Ok(Self {
            state: Arc::new(AppState::new(config)),
            listener,
            local_addr,
        })
    }

    /// Address the listener actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Runs the accept loop. Never returns under normal operation.
    pub async fn start(self) {
        info!("Gatehouse listening on {}", self.local_addr);

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let state = Arc::clone(&self.state);

                    // Spawn a task per connection so the accept loop never blocks
                    tokio::spawn(async move {
                        let io = TokioIo::new(stream);

                        let service = service_fn(move |req| {
                            let state = Arc::clone(&state);
                            async move { handle_request(state, req).await }
                        });

                        if let Err(e) = http1::Builder::new()
                            .title_case_headers(true)
                            .serve_connection(io, service)
                            .await
                        {
                            error!("Error serving connection from {}: {:?}", addr, e);
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
