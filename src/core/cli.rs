//! Command-line overrides for the environment configuration.

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use super::config::Config;
use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Command-line arguments.
///
/// Every flag overrides the matching `MCP_*` environment variable.
#[derive(Debug, Default, Parser)]
#[command(name = "react-icons-mcp-server", version)]
#[command(about = "MCP server for browsing and searching react-icons libraries")]
pub struct Cli {
    /// Serve over stdin/stdout (shorthand for `--transport stdio`)
    #[arg(long, conflicts_with = "transport")]
    pub stdio: bool,

    /// Transport to serve on: stdio, tcp or http
    #[arg(long, short)]
    pub transport: Option<String>,

    /// Port for the tcp/http transports
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Host address for the tcp/http transports
    #[arg(long)]
    pub host: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory of an installed react-icons package
    #[arg(long)]
    pub package_dir: Option<PathBuf>,

    /// JSON manifest of library symbols
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl Cli {
    /// Apply the command-line overrides to `config`.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        let requested = if self.stdio {
            Some("stdio")
        } else {
            self.transport.as_deref()
        };

        if let Some(name) = requested {
            // Keep env-provided endpoint settings when the kind is unchanged.
            if !config.transport.name().eq_ignore_ascii_case(name) {
                config.transport = TransportConfig::from_env_named(name).ok_or_else(|| {
                    Error::config(format!(
                        "Unknown or disabled transport '{}' (check enabled features)",
                        name
                    ))
                })?;
            }
        }

        if self.port.is_some() || self.host.is_some() {
            if config
                .transport
                .set_endpoint(self.port, self.host.as_deref())
            {
                if let Some(port) = self.port {
                    info!("Port {} (source: cli)", port);
                }
            } else {
                warn!("--port/--host ignored for {}", config.transport.description());
            }
        }

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        if let Some(dir) = &self.package_dir {
            config.catalog.package_dir = Some(dir.clone());
        }

        if let Some(path) = &self.manifest {
            config.catalog.manifest_path = Some(path.clone());
        }

        Ok(())
    }
}
