//! STDIO transport.
//!
//! The icon server speaks newline-delimited JSON-RPC on stdin/stdout. Logs
//! go to stderr, so nothing else may write to stdout while this runs.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Serves one MCP client over the process's standard streams.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "{} ready on stdin/stdout, symbols from {}",
            server.name(),
            server.catalog().source_description()
        );

        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(format!("stdio handshake failed: {}", e)))?;

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("stdin closed ({:?}), stopping", reason);
        Ok(())
    }
}
