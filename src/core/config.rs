//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, the command line, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Icon catalog configuration.
    pub catalog: CatalogConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Where the icon catalog reads symbol names from.
///
/// With neither path set, the manifest bundled into the binary is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory of an installed `react-icons` package
    /// (e.g. `node_modules/react-icons`). Takes precedence over
    /// `manifest_path`.
    pub package_dir: Option<PathBuf>,

    /// JSON manifest mapping library prefixes to symbol names.
    pub manifest_path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "react-icons-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            catalog: CatalogConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first. Variables are
    /// prefixed with `MCP_`, e.g. `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(dir) = std::env::var("MCP_ICONS_PACKAGE_DIR") {
            config.catalog.package_dir = Some(PathBuf::from(dir));
            info!("react-icons package dir: {:?}", config.catalog.package_dir);
        }

        if let Ok(path) = std::env::var("MCP_ICONS_MANIFEST") {
            config.catalog.manifest_path = Some(PathBuf::from(path));
            info!("Icon manifest: {:?}", config.catalog.manifest_path);
        }

        config
    }
}

/// Serializes tests that read or write process environment variables.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_paths_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ICONS_PACKAGE_DIR", "/srv/node_modules/react-icons");
            std::env::set_var("MCP_ICONS_MANIFEST", "/srv/icons.json");
        }
        let config = Config::from_env();
        assert_eq!(
            config.catalog.package_dir,
            Some(PathBuf::from("/srv/node_modules/react-icons"))
        );
        assert_eq!(
            config.catalog.manifest_path,
            Some(PathBuf::from("/srv/icons.json"))
        );
        unsafe {
            std::env::remove_var("MCP_ICONS_PACKAGE_DIR");
            std::env::remove_var("MCP_ICONS_MANIFEST");
        }
    }

    #[test]
    fn test_catalog_defaults_to_bundled() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_ICONS_PACKAGE_DIR");
            std::env::remove_var("MCP_ICONS_MANIFEST");
        }
        let config = Config::from_env();
        assert!(config.catalog.package_dir.is_none());
        assert!(config.catalog.manifest_path.is_none());
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "icons-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "icons-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_log_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "trace");
        }
        let config = Config::from_env();
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.name, "react-icons-mcp-server");
        assert_eq!(config.logging.level, "info");
        #[cfg(feature = "stdio")]
        assert!(config.transport.is_stdio());
    }
}
