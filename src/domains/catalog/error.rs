//! Catalog-specific error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a symbol source.
///
/// "Not found" conditions are never errors; they are reported as empty
/// results. These variants only describe a source that failed outright.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a library's declaration file failed.
    #[error("Failed to read symbols for '{prefix}' from {}: {source}", path.display())]
    Io {
        prefix: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest could not be read or parsed.
    #[error("Invalid icon manifest: {0}")]
    Manifest(String),

    /// The source failed for a reason of its own.
    #[error("Symbol source failed for '{prefix}': {message}")]
    Source { prefix: String, message: String },
}

impl CatalogError {
    /// Create a new "manifest" error.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Create a new "source" error.
    pub fn source(prefix: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            prefix: prefix.into(),
            message: msg.into(),
        }
    }
}
