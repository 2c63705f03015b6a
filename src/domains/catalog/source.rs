//! Symbol sources - where the raw exported names of a library come from.
//!
//! The catalog only needs one capability: given a library prefix, return the
//! names that library exports. Three backings are provided:
//!
//! - [`StaticSymbolSource`]: an in-memory table
//! - [`ManifestSymbolSource`]: a JSON manifest (bundled or on disk)
//! - [`PackageDirSymbolSource`]: an installed `react-icons` package

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use super::error::CatalogError;
use crate::core::config::CatalogConfig;

/// Manifest compiled into the binary, used when nothing else is configured.
const BUNDLED_MANIFEST: &str = include_str!("../../../data/icons.json");

/// Capability to list the raw exported names of a library.
pub trait SymbolSource: Send + Sync {
    /// Raw exported names for `prefix`, in declaration order.
    ///
    /// Returns `Ok(None)` when the source does not know the prefix. An
    /// `Err` means the source itself failed.
    fn symbols(&self, prefix: &str) -> Result<Option<Vec<String>>, CatalogError>;

    /// Short human-readable description of where symbols come from.
    fn describe(&self) -> String;
}

// ============================================================================
// Static table
// ============================================================================

/// In-memory symbol table.
#[derive(Debug, Clone, Default)]
pub struct StaticSymbolSource {
    libraries: HashMap<String, Vec<String>>,
}

impl StaticSymbolSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the symbols of one library.
    pub fn with_library<I, S>(mut self, prefix: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.libraries
            .insert(prefix.into(), names.into_iter().map(Into::into).collect());
        self
    }

    /// Number of libraries in the table.
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

impl SymbolSource for StaticSymbolSource {
    fn symbols(&self, prefix: &str) -> Result<Option<Vec<String>>, CatalogError> {
        Ok(self.libraries.get(prefix).cloned())
    }

    fn describe(&self) -> String {
        format!("static table ({} libraries)", self.libraries.len())
    }
}

// ============================================================================
// JSON manifest
// ============================================================================

/// Symbols loaded from a JSON manifest of the form `{"fa": ["FaUser", ...]}`.
#[derive(Debug, Clone)]
pub struct ManifestSymbolSource {
    table: StaticSymbolSource,
    origin: String,
}

impl ManifestSymbolSource {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str, origin: impl Into<String>) -> Result<Self, CatalogError> {
        let libraries: HashMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|e| CatalogError::manifest(e.to_string()))?;

        Ok(Self {
            table: StaticSymbolSource { libraries },
            origin: origin.into(),
        })
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)
            .map_err(|e| CatalogError::manifest(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json, path.display().to_string())
    }

    /// The manifest bundled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_MANIFEST, "bundled manifest")
    }
}

impl SymbolSource for ManifestSymbolSource {
    fn symbols(&self, prefix: &str) -> Result<Option<Vec<String>>, CatalogError> {
        self.table.symbols(prefix)
    }

    fn describe(&self) -> String {
        format!("{} ({} libraries)", self.origin, self.table.len())
    }
}

// ============================================================================
// Installed react-icons package
// ============================================================================

/// Symbols read from an installed `react-icons` package directory.
///
/// For prefix `fa` the declarations in `<root>/fa/index.d.ts` are parsed on
/// every call; the catalog caches the result.
#[derive(Debug, Clone)]
pub struct PackageDirSymbolSource {
    root: PathBuf,
}

impl PackageDirSymbolSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the declaration file for `prefix`.
    fn declaration_path(&self, prefix: &str) -> PathBuf {
        self.root.join(prefix).join("index.d.ts")
    }
}

impl SymbolSource for PackageDirSymbolSource {
    fn symbols(&self, prefix: &str) -> Result<Option<Vec<String>>, CatalogError> {
        // Prefixes become path components.
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok(None);
        }

        let path = self.declaration_path(prefix);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No declaration file at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(CatalogError::Io {
                    prefix: prefix.to_string(),
                    path,
                    source,
                });
            }
        };

        Ok(Some(parse_declarations(&contents)))
    }

    fn describe(&self) -> String {
        format!("react-icons package at {}", self.root.display())
    }
}

/// Collect the names of `export declare const <Name>: ...;` lines.
fn parse_declarations(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("export declare const "))
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Build the symbol source selected by the configuration.
///
/// A package directory wins over a manifest file; the bundled manifest is
/// the fallback.
pub fn build_source(config: &CatalogConfig) -> Result<Arc<dyn SymbolSource>, CatalogError> {
    let source: Arc<dyn SymbolSource> = if let Some(dir) = &config.package_dir {
        Arc::new(PackageDirSymbolSource::new(dir))
    } else if let Some(path) = &config.manifest_path {
        Arc::new(ManifestSymbolSource::from_path(path)?)
    } else {
        Arc::new(ManifestSymbolSource::bundled()?)
    };

    info!("Icon symbols from {}", source.describe());
    Ok(source)
}
