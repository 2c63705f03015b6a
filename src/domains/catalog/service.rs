//! Icon catalog - lookup and search over the library table.
//!
//! The catalog owns the library table and a [`SymbolSource`]. Icon lists are
//! derived lazily per library and memoized for the lifetime of the instance.
//!
//! Every query has two forms: `try_*` surfaces a failing symbol source as a
//! [`CatalogError`], while the plain form logs the failure and returns an
//! empty result. Unknown libraries and unknown icons are never errors.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, instrument, warn};

use super::error::CatalogError;
use super::library::{LibraryInfo, default_libraries};
use super::record::IconRecord;
use super::source::SymbolSource;

/// Default number of results returned by [`IconCatalog::search`].
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Unscoped search stops scanning libraries once this many matches exist.
pub const SEARCH_SCAN_CAP: usize = 100;

/// Libraries scanned first by unscoped search.
const PRIORITY_PREFIXES: &[&str] = &["fa", "md", "ai", "bs", "fa6", "hi2", "io5", "lu"];

/// Derived, immutable view of one library's symbols.
#[derive(Debug, Default)]
struct LibraryIndex {
    /// Every exported name, icon or not.
    symbols: HashSet<String>,

    /// Names accepted by the naming predicate, in source order.
    icons: Vec<IconRecord>,
}

/// Lookup/search service over icon libraries.
pub struct IconCatalog {
    libraries: Vec<LibraryInfo>,
    source: Arc<dyn SymbolSource>,
    cache: RwLock<HashMap<String, Arc<LibraryIndex>>>,
}

impl IconCatalog {
    /// Create a catalog over `libraries`, resolving symbols through `source`.
    pub fn new(libraries: Vec<LibraryInfo>, source: Arc<dyn SymbolSource>) -> Self {
        Self {
            libraries,
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Create a catalog over the built-in react-icons library table.
    pub fn with_default_libraries(source: Arc<dyn SymbolSource>) -> Self {
        Self::new(default_libraries(), source)
    }

    /// Description of the underlying symbol source.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// All libraries, in table order.
    pub fn list_libraries(&self) -> &[LibraryInfo] {
        &self.libraries
    }

    /// Library with exactly this prefix.
    pub fn get_library(&self, prefix: &str) -> Option<&LibraryInfo> {
        self.libraries.iter().find(|lib| lib.prefix == prefix)
    }

    /// Every library prefix, in table order.
    pub fn prefixes(&self) -> Vec<&str> {
        self.libraries.iter().map(|lib| lib.prefix.as_str()).collect()
    }

    // ========================================================================
    // Icons of one library
    // ========================================================================

    /// Icons of the library `prefix`, in source order.
    pub fn try_list_icons(&self, prefix: &str) -> Result<Vec<IconRecord>, CatalogError> {
        Ok(self
            .index(prefix)?
            .map(|index| index.icons.clone())
            .unwrap_or_default())
    }

    /// Like [`try_list_icons`](Self::try_list_icons), empty on source failure.
    pub fn list_icons(&self, prefix: &str) -> Vec<IconRecord> {
        self.try_list_icons(prefix).unwrap_or_else(|e| {
            warn!("Listing icons of '{}' failed: {}", prefix, e);
            Vec::new()
        })
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Case-insensitive substring search over icon names.
    ///
    /// `prefix:term` restricts the search to one library when the prefix is
    /// known; otherwise the whole query is searched in every library. At most
    /// `limit` records are returned.
    #[instrument(skip(self))]
    pub fn try_search(&self, query: &str, limit: usize) -> Result<Vec<IconRecord>, CatalogError> {
        let normalized = query.to_lowercase();

        if let Some((prefix, term)) = split_scope(&normalized) {
            if self.get_library(prefix).is_some() {
                let term = term.trim();
                debug!("Scoped search in '{}' for '{}'", prefix, term);

                let mut matches: Vec<IconRecord> = self
                    .try_list_icons(prefix)?
                    .into_iter()
                    .filter(|icon| icon.icon_name().to_lowercase().contains(term))
                    .collect();
                matches.truncate(limit);
                return Ok(matches);
            }
            debug!("Unknown library '{}', searching everywhere", prefix);
        }

        let mut results = Vec::new();
        for library in self.search_order() {
            let Some(index) = self.index(&library.prefix)? else {
                continue;
            };

            results.extend(
                index
                    .icons
                    .iter()
                    .filter(|icon| icon.icon_name().to_lowercase().contains(&normalized))
                    .cloned(),
            );

            if results.len() >= SEARCH_SCAN_CAP {
                debug!("Search cap reached after '{}'", library.prefix);
                break;
            }
        }

        results.truncate(limit);
        Ok(results)
    }

    /// Like [`try_search`](Self::try_search), empty on source failure.
    pub fn search(&self, query: &str, limit: usize) -> Vec<IconRecord> {
        self.try_search(query, limit).unwrap_or_else(|e| {
            warn!("Search for '{}' failed: {}", query, e);
            Vec::new()
        })
    }

    /// Libraries in the order unscoped search visits them.
    fn search_order(&self) -> Vec<&LibraryInfo> {
        let priority = PRIORITY_PREFIXES
            .iter()
            .filter_map(|prefix| self.get_library(prefix));
        let rest = self
            .libraries
            .iter()
            .filter(|lib| !PRIORITY_PREFIXES.contains(&lib.prefix.as_str()));

        priority.chain(rest).collect()
    }

    // ========================================================================
    // Icon details
    // ========================================================================

    /// Record for `icon_name` if the library exports a symbol with exactly
    /// that name.
    ///
    /// This checks every exported symbol, so names rejected by the naming
    /// convention (and therefore absent from listings) are still found.
    pub fn try_icon_details(
        &self,
        package_name: &str,
        icon_name: &str,
    ) -> Result<Option<IconRecord>, CatalogError> {
        let Some(index) = self.index(package_name)? else {
            return Ok(None);
        };

        Ok(index
            .symbols
            .contains(icon_name)
            .then(|| IconRecord::new(package_name, icon_name)))
    }

    /// Like [`try_icon_details`](Self::try_icon_details), `None` on source
    /// failure.
    pub fn icon_details(&self, package_name: &str, icon_name: &str) -> Option<IconRecord> {
        self.try_icon_details(package_name, icon_name)
            .unwrap_or_else(|e| {
                warn!(
                    "Looking up '{}/{}' failed: {}",
                    package_name, icon_name, e
                );
                None
            })
    }

    // ========================================================================
    // Index cache
    // ========================================================================

    /// Index of a known library, built on first use.
    ///
    /// Concurrent first calls may both build the index; the results are
    /// identical so the later insert is harmless. Failures are not cached.
    fn index(&self, prefix: &str) -> Result<Option<Arc<LibraryIndex>>, CatalogError> {
        let Some(library) = self.get_library(prefix) else {
            return Ok(None);
        };

        if let Some(index) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(prefix)
        {
            return Ok(Some(index.clone()));
        }

        let symbols = self.source.symbols(prefix)?.unwrap_or_default();
        let stem = library.symbol_stem();
        let icons = symbols
            .iter()
            .filter(|name| name.starts_with(&stem))
            .map(|name| IconRecord::new(prefix, name.as_str()))
            .collect::<Vec<_>>();

        debug!(
            "Indexed '{}': {} symbols, {} icons",
            prefix,
            symbols.len(),
            icons.len()
        );

        let index = Arc::new(LibraryIndex {
            symbols: symbols.into_iter().collect(),
            icons,
        });

        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(prefix.to_string(), index.clone());

        Ok(Some(index))
    }
}

/// Split `prefix:rest` where the prefix is non-empty lowercase ASCII
/// alphanumerics.
fn split_scope(normalized: &str) -> Option<(&str, &str)> {
    let (prefix, rest) = normalized.split_once(':')?;
    let valid = !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    valid.then_some((prefix, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::source::StaticSymbolSource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fixture_source() -> StaticSymbolSource {
        StaticSymbolSource::new()
            .with_library("fa", ["FaUser", "FaHome", "FaCog", "someUtil"])
            .with_library("md", ["MdHome", "MdSettings", "MdPerson"])
            .with_library("bs", ["BsArrowUp", "BsArrowDown"])
    }

    fn fixture_catalog() -> IconCatalog {
        IconCatalog::with_default_libraries(Arc::new(fixture_source()))
    }

    fn names(records: &[IconRecord]) -> Vec<&str> {
        records.iter().map(|r| r.icon_name()).collect()
    }

    /// Counts calls and fails on demand.
    struct ProbeSource {
        inner: StaticSymbolSource,
        calls: AtomicUsize,
        fail: bool,
    }

    impl SymbolSource for ProbeSource {
        fn symbols(&self, prefix: &str) -> Result<Option<Vec<String>>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CatalogError::source(prefix, "backend unavailable"));
            }
            self.inner.symbols(prefix)
        }

        fn describe(&self) -> String {
            "probe".to_string()
        }
    }

    fn probe(fail: bool) -> Arc<ProbeSource> {
        Arc::new(ProbeSource {
            inner: fixture_source(),
            calls: AtomicUsize::new(0),
            fail,
        })
    }

    #[test]
    fn test_get_library() {
        let catalog = fixture_catalog();
        for library in catalog.list_libraries() {
            let found = catalog.get_library(&library.prefix).unwrap();
            assert_eq!(found.prefix, library.prefix);
        }
        assert!(catalog.get_library("nonexistent").is_none());
        assert!(catalog.get_library("FA").is_none());
    }

    #[test]
    fn test_list_icons_filters_and_keeps_order() {
        let catalog = fixture_catalog();
        let icons = catalog.list_icons("fa");
        assert_eq!(names(&icons), vec!["FaUser", "FaHome", "FaCog"]);

        for icon in &icons {
            assert_eq!(icon.package_name(), "fa");
            assert_eq!(icon.full_name(), format!("fa/{}", icon.icon_name()));
        }
    }

    #[test]
    fn test_list_icons_unknown_or_empty() {
        let catalog = fixture_catalog();
        assert!(catalog.list_icons("nonexistent-prefix").is_empty());
        // Known library the source has nothing for.
        assert!(catalog.list_icons("wi").is_empty());
    }

    #[test]
    fn test_list_icons_uppercase_stem_rejected() {
        let source = StaticSymbolSource::new().with_library("md", ["MDHome", "MdHome"]);
        let catalog = IconCatalog::with_default_libraries(Arc::new(source));
        assert_eq!(names(&catalog.list_icons("md")), vec!["MdHome"]);
    }

    #[test]
    fn test_list_icons_numbered_prefixes() {
        let source = StaticSymbolSource::new()
            .with_library("fa6", ["FaUser", "FA6User"])
            .with_library("io5", ["IoAdd", "IO5Add"])
            .with_library("hi2", ["HiOutlineHome", "HiMiniBell"])
            .with_library("lia", ["LiaAtomSolid"])
            .with_library("tfi", ["TfiAgenda"])
            .with_library("vsc", ["VscAccount", "vscHelper"]);
        let catalog = IconCatalog::with_default_libraries(Arc::new(source));

        assert_eq!(names(&catalog.list_icons("fa6")), vec!["FaUser"]);
        assert_eq!(names(&catalog.list_icons("io5")), vec!["IoAdd"]);
        assert_eq!(
            names(&catalog.list_icons("hi2")),
            vec!["HiOutlineHome", "HiMiniBell"]
        );
        assert_eq!(names(&catalog.list_icons("lia")), vec!["LiaAtomSolid"]);
        assert_eq!(names(&catalog.list_icons("tfi")), vec!["TfiAgenda"]);
        assert_eq!(names(&catalog.list_icons("vsc")), vec!["VscAccount"]);
    }

    #[test]
    fn test_list_icons_is_cached() {
        let source = probe(false);
        let catalog = IconCatalog::with_default_libraries(source.clone());

        let first = catalog.list_icons("fa");
        let second = catalog.list_icons("fa");
        assert_eq!(first, second);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        // Details reuse the same index.
        assert!(catalog.icon_details("fa", "FaUser").is_some());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_library_never_reaches_source() {
        let source = probe(false);
        let catalog = IconCatalog::with_default_libraries(source.clone());
        assert!(catalog.list_icons("zz").is_empty());
        assert!(catalog.icon_details("zz", "ZzIcon").is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_scoped_search() {
        let catalog = fixture_catalog();
        let results = catalog.search("fa:user", DEFAULT_SEARCH_LIMIT);
        assert!(!results.is_empty());
        for icon in &results {
            assert_eq!(icon.package_name(), "fa");
            assert!(icon.icon_name().to_lowercase().contains("user"));
        }

        assert_eq!(names(&catalog.search("fa:us", DEFAULT_SEARCH_LIMIT)), vec!["FaUser"]);
    }

    #[test]
    fn test_scoped_search_normalizes_case_and_whitespace() {
        let catalog = fixture_catalog();
        assert_eq!(names(&catalog.search("FA:  Home ", 20)), vec!["FaHome"]);
    }

    #[test]
    fn test_scoped_search_empty_term_lists_library() {
        let catalog = fixture_catalog();
        assert_eq!(
            names(&catalog.search("md:", 20)),
            vec!["MdHome", "MdSettings", "MdPerson"]
        );
    }

    #[test]
    fn test_scoped_search_respects_limit() {
        let catalog = fixture_catalog();
        assert_eq!(names(&catalog.search("fa:", 2)), vec!["FaUser", "FaHome"]);
    }

    #[test]
    fn test_scoped_search_unknown_prefix_falls_through() {
        let source = StaticSymbolSource::new().with_library("fa", ["FaUser"]);
        let catalog = IconCatalog::with_default_libraries(Arc::new(source));
        // "xx:user" is not a known scope, so it is searched as a whole term.
        assert!(catalog.search("xx:user", 20).is_empty());
        assert_eq!(names(&catalog.search("fa:user", 20)), vec!["FaUser"]);
    }

    #[test]
    fn test_unscoped_search_across_libraries() {
        let catalog = fixture_catalog();
        let results = catalog.search("home", DEFAULT_SEARCH_LIMIT);
        let found = names(&results);
        assert!(found.contains(&"FaHome"));
        assert!(found.contains(&"MdHome"));

        let packages: Vec<_> = results.iter().map(|r| r.package_name()).collect();
        assert!(packages.contains(&"fa"));
        assert!(packages.contains(&"md"));
    }

    #[test]
    fn test_unscoped_search_matches_icon_name_only() {
        let catalog = fixture_catalog();
        let results = catalog.search("arrow", 20);
        assert_eq!(names(&results), vec!["BsArrowUp", "BsArrowDown"]);
    }

    #[test]
    fn test_unscoped_search_priority_order() {
        // "ai" precedes "fa" in the table, but "fa" is scanned first.
        let source = StaticSymbolSource::new()
            .with_library("ai", ["AiHome"])
            .with_library("fa", ["FaHome"]);
        let catalog = IconCatalog::with_default_libraries(Arc::new(source));
        assert_eq!(names(&catalog.search("home", 20)), vec!["FaHome", "AiHome"]);
    }

    #[test]
    fn test_unscoped_search_stops_at_scan_cap() {
        let fa: Vec<String> = (0..150).map(|i| format!("FaIcon{}", i)).collect();
        let source = StaticSymbolSource::new()
            .with_library("fa", fa)
            .with_library("md", ["MdIcon"]);
        let source = Arc::new(ProbeSource {
            inner: source,
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let catalog = IconCatalog::with_default_libraries(source.clone());

        let results = catalog.search("icon", 1000);
        assert_eq!(results.len(), 150);
        assert!(results.iter().all(|r| r.package_name() == "fa"));
        // Only "fa" was scanned.
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unscoped_search_respects_limit() {
        let catalog = fixture_catalog();
        assert_eq!(catalog.search("", 3).len(), 3);
    }

    #[test]
    fn test_search_no_match() {
        let catalog = fixture_catalog();
        assert!(catalog.search("zzzznomatch", 20).is_empty());
        assert!(catalog.search("nonexistenticon", 20).is_empty());
    }

    #[test]
    fn test_icon_details() {
        let catalog = fixture_catalog();
        let icon = catalog.icon_details("fa", "FaUser").unwrap();
        assert_eq!(icon, IconRecord::new("fa", "FaUser"));
        assert_eq!(icon.full_name(), "fa/FaUser");

        assert!(catalog.icon_details("fa", "NotAnIcon").is_none());
        assert!(catalog.icon_details("fa", "fauser").is_none());
        assert!(catalog.icon_details("nope", "FaUser").is_none());
    }

    #[test]
    fn test_icon_details_sees_non_icon_symbols() {
        let catalog = fixture_catalog();
        assert!(catalog.icon_details("fa", "someUtil").is_some());
        assert!(!names(&catalog.list_icons("fa")).contains(&"someUtil"));
        assert!(catalog.search("someutil", 20).is_empty());
    }

    #[test]
    fn test_source_failure_degrades_to_empty() {
        let source = probe(true);
        let catalog = IconCatalog::with_default_libraries(source.clone());

        assert!(catalog.list_icons("fa").is_empty());
        assert!(catalog.search("fa:user", 20).is_empty());
        assert!(catalog.search("home", 20).is_empty());
        assert!(catalog.icon_details("fa", "FaUser").is_none());

        assert!(catalog.try_list_icons("fa").is_err());
        assert!(catalog.try_search("home", 20).is_err());
        assert!(catalog.try_icon_details("fa", "FaUser").is_err());
    }

    #[test]
    fn test_source_failure_is_not_cached() {
        let source = probe(true);
        let catalog = IconCatalog::with_default_libraries(source.clone());
        let _ = catalog.list_icons("fa");
        let _ = catalog.list_icons("fa");
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_catalogs_do_not_share_cache() {
        let first = IconCatalog::with_default_libraries(Arc::new(fixture_source()));
        let second = IconCatalog::with_default_libraries(Arc::new(
            StaticSymbolSource::new().with_library("fa", ["FaStar"]),
        ));
        assert_eq!(names(&first.list_icons("fa")), vec!["FaUser", "FaHome", "FaCog"]);
        assert_eq!(names(&second.list_icons("fa")), vec!["FaStar"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let source = StaticSymbolSource::new()
            .with_library("fa", ["FaUser", "FaHome", "FaCog", "someUtil"]);
        let catalog = IconCatalog::new(
            vec![LibraryInfo::new(
                "fa",
                "Font Awesome 5",
                "Popular icon toolkit",
                1612,
                "CC BY 4.0",
                "https://fontawesome.com/",
            )],
            Arc::new(source),
        );

        assert_eq!(catalog.list_libraries().len(), 1);
        assert_eq!(
            names(&catalog.list_icons("fa")),
            vec!["FaUser", "FaHome", "FaCog"]
        );
        assert_eq!(names(&catalog.search("fa:us", 20)), vec!["FaUser"]);
        assert!(catalog.search("nonexistenticon", 20).is_empty());
    }

    #[test]
    fn test_split_scope() {
        assert_eq!(split_scope("fa:user"), Some(("fa", "user")));
        assert_eq!(split_scope("io5: add "), Some(("io5", " add ")));
        assert_eq!(split_scope("fa:a:b"), Some(("fa", "a:b")));
        assert_eq!(split_scope(":user"), None);
        assert_eq!(split_scope("f-a:user"), None);
        assert_eq!(split_scope("home"), None);
    }
}
