//! Transports the icon server can be reached over.
//!
//! `stdio` (default feature) serves a single client on the standard
//! streams. `tcp` runs one rmcp session per accepted socket. `http` exposes
//! a stateless JSON-RPC endpoint plus `/health` through axum.
//!
//! Every transport drives the same [`McpServer`](crate::core::McpServer),
//! so tools and resources behave identically whichever one is selected.
//! [`TransportConfig`] picks the transport from `MCP_TRANSPORT` or the
//! command line, and [`TransportService`] runs it.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
