//! TCP transport.
//!
//! Every accepted socket gets its own rmcp session over newline-delimited
//! JSON-RPC. All sessions share one `McpServer`, and so one icon catalog
//! cache.

use rmcp::ServiceExt;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` before trying again.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// TCP listener serving MCP sessions.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// `host:port` the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the configured address.
    pub async fn bind(&self) -> TransportResult<TcpListener> {
        let addr = self.address();
        TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))
    }

    /// Bind, then serve clients until the process exits.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let listener = self.bind().await?;
        info!(
            "{} listening on {} (JSON-RPC over TCP)",
            server.name(),
            self.address()
        );
        Self::serve(listener, server).await
    }

    /// Accept loop over an already bound listener.
    pub async fn serve(listener: TcpListener, server: McpServer) -> TransportResult<()> {
        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("accept failed: {}", e);
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("Could not set TCP_NODELAY for {}: {}", peer, e);
            }

            tokio::spawn(Self::session(server.clone(), stream, peer));
        }
    }

    async fn session(server: McpServer, stream: TcpStream, peer: SocketAddr) {
        info!("Client {} connected", peer);

        let running = match server.serve(stream).await {
            Ok(running) => running,
            Err(e) => {
                warn!("Handshake with {} failed: {}", peer, e);
                return;
            }
        };

        match running.waiting().await {
            Ok(reason) => info!("Client {} disconnected ({:?})", peer, reason),
            Err(e) => warn!("Session with {} ended with error: {:?}", peer, e),
        }
    }
}
