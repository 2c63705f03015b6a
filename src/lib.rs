//! react-icons MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server for browsing and
//! searching the icon libraries bundled in the react-icons package.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, command line, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: Library table, symbol sources and the searchable icon catalog
//!   - **tools**: MCP tools that query the catalog
//!   - **resources**: Catalog data exposed as readable resources
//!
//! # Example
//!
//! ```rust,no_run
//! use react_icons_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::from_config(config)?;
//!     let hits = server.catalog().search("fa:user", 5);
//!     println!("{} matches", hits.len());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::catalog::{IconCatalog, IconRecord, LibraryInfo};
