//! Catalog domain module.
//!
//! This module holds the icon catalog the tools and resources are built on:
//! the react-icons library table, the symbol sources that say which names a
//! library exports, and the [`IconCatalog`] that answers queries over them.
//!
//! ## Architecture
//!
//! - `library.rs` - Library metadata and the built-in library table
//! - `record.rs` - Icon records
//! - `source.rs` - Symbol source trait and its backings
//! - `service.rs` - The catalog itself (lookup, search, caching)
//! - `error.rs` - Catalog-specific error types

mod error;
mod library;
mod record;
mod service;
pub mod source;

pub use error::CatalogError;
pub use library::{LibraryInfo, default_libraries, symbol_stem};
pub use record::IconRecord;
pub use service::{DEFAULT_SEARCH_LIMIT, IconCatalog, SEARCH_SCAN_CAP};
pub use source::{
    ManifestSymbolSource, PackageDirSymbolSource, StaticSymbolSource, SymbolSource, build_source,
};
