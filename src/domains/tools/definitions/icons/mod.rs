//! Icon catalog tools.
//!
//! Each tool renders catalog answers as YAML text.

mod common;
pub mod details;
pub mod libraries;
pub mod library_icons;
pub mod search;
pub mod usage;

pub use details::{IconDetailsParams, IconDetailsTool};
pub use libraries::{IconLibrariesParams, IconLibrariesTool};
pub use library_icons::{LibraryIconsParams, LibraryIconsTool};
pub use search::{SearchIconsParams, SearchIconsTool};
pub use usage::{UsageExamplesParams, UsageExamplesTool};
