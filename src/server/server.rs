use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use super::hub::CounterHub;
use super::router::{build_router, ServerState};
use crate::shutdown::ShutdownHandle;

/// Errors from the backend server lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("try_bind() must be called before run()")]
    NotBound,

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// The backend server.
///
/// Bind and run are split so callers learn the actual address (tests bind
/// port 0) before the server starts; the listener is kept alive in between
/// so the port cannot be lost to a race.
pub struct AppServer {
    addr: SocketAddr,
    listener: Option<TcpListener>,
    shutdown: ShutdownHandle,
}

impl AppServer {
    pub fn new() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            shutdown: ShutdownHandle::new(),
        }
    }

    /// Bind the configured address and return the actual one.
    pub async fn try_bind(&mut self, bind_addr: &str) -> Result<SocketAddr, ServerError> {
        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr.to_string(),
                source,
            })?;
        let addr = listener.local_addr()?;
        self.addr = addr;
        self.listener = Some(listener);
        tracing::info!(%addr, "server bound");
        Ok(addr)
    }

    /// Handle used to stop the server (ctrl-c handler, tests).
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Serve until the shutdown handle is signaled.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;
        tracing::info!(addr = %self.addr, "serving");

        let state = ServerState {
            hub: CounterHub::new(),
        };
        let app = build_router(state);

        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
            })
            .await?;
        tracing::info!("server stopped");
        Ok(())
    }
}

impl Default for AppServer {
    fn default() -> Self {
        Self::new()
    }
}
