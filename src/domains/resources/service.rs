//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::definitions::LibraryResourceTemplate;
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::ServerConfig;
use crate::domains::catalog::{IconCatalog, IconRecord, LibraryInfo};

/// Service for managing and accessing resources.
///
/// This service maintains a registry of available resources and handles
/// resource listing and reading operations.
pub struct ResourceService {
    /// Identity reported by the server info resource.
    server: ServerConfig,

    /// Catalog backing the dynamic resources.
    catalog: Arc<IconCatalog>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content computed from the catalog on each read.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Every library in the catalog.
    Libraries,

    /// Server identity and catalog summary.
    ServerInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServerInfo<'a> {
    name: &'a str,
    version: &'a str,
    library_count: usize,
    symbol_source: String,
}

#[derive(Debug, Serialize)]
struct LibraryContents<'a> {
    library: &'a LibraryInfo,
    icons: Vec<IconRecord>,
}

impl ResourceService {
    /// Create a new ResourceService over `catalog`.
    pub fn new(server: ServerConfig, catalog: Arc<IconCatalog>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            server,
            catalog,
            resources: HashMap::new(),
            templates: Vec::new(),
        };

        // Register all resources and templates from registry
        service.register_from_registry();
        service.register_templates_from_registry();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register all resource templates from the registry.
    fn register_templates_from_registry(&mut self) {
        info!("Registering resource templates from registry");
        self.templates = get_all_resource_templates();
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Registered URIs are tried first, then `icons://library/{prefix}`.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let content = match self.resources.get(uri) {
            Some(entry) => match &entry.content {
                ResourceContent::Text(text) => ResourceContents::text(text, uri),
                ResourceContent::Dynamic(dynamic_type) => {
                    self.resolve_dynamic_content(uri, dynamic_type)?
                }
            },
            None => match LibraryResourceTemplate::match_uri(uri) {
                Some(prefix) => self.resolve_library(uri, prefix)?,
                None => return Err(ResourceError::not_found(uri)),
            },
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::Libraries => json_contents(uri, self.catalog.list_libraries()),
            DynamicResourceType::ServerInfo => json_contents(
                uri,
                &ServerInfo {
                    name: &self.server.name,
                    version: &self.server.version,
                    library_count: self.catalog.list_libraries().len(),
                    symbol_source: self.catalog.source_description(),
                },
            ),
        }
    }

    /// Resolve `icons://library/{prefix}`.
    fn resolve_library(&self, uri: &str, prefix: &str) -> Result<ResourceContents, ResourceError> {
        if prefix.is_empty() || prefix.contains('/') {
            return Err(ResourceError::invalid_uri(uri));
        }

        let library = self
            .catalog
            .get_library(prefix)
            .ok_or_else(|| ResourceError::not_found(uri))?;
        let icons = self.catalog.try_list_icons(prefix)?;

        json_contents(uri, &LibraryContents { library, icons })
    }
}

fn json_contents<T: Serialize + ?Sized>(
    uri: &str,
    value: &T,
) -> Result<ResourceContents, ResourceError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| ResourceError::internal(e.to_string()))?;
    Ok(ResourceContents::text(json, uri))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::catalog::{CatalogError, StaticSymbolSource, SymbolSource};

    fn service() -> ResourceService {
        let source = StaticSymbolSource::new().with_library("fa", ["FaUser", "FaHome", "helper"]);
        let catalog = IconCatalog::with_default_libraries(Arc::new(source));
        ResourceService::new(Config::default().server, Arc::new(catalog))
    }

    fn text(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service();
        assert_eq!(service.list_resources().await.len(), 3);
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_libraries() {
        let service = service();
        let result = service.read_resource("icons://libraries").await.unwrap();

        let libraries: Vec<serde_json::Value> = serde_json::from_str(text(&result)).unwrap();
        assert_eq!(libraries.len(), service.catalog.list_libraries().len());
        assert_eq!(libraries[0]["prefix"], "ai");
        assert!(libraries[0].get("totalIcons").is_some());
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let service = service();
        let result = service.read_resource("icons://server/info").await.unwrap();

        let info: serde_json::Value = serde_json::from_str(text(&result)).unwrap();
        assert_eq!(info["name"], "react-icons-mcp-server");
        assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(
            info["libraryCount"].as_u64(),
            Some(service.catalog.list_libraries().len() as u64)
        );
    }

    #[tokio::test]
    async fn test_read_static_guide() {
        let service = service();
        let result = service.read_resource("icons://docs/search").await.unwrap();
        assert!(text(&result).starts_with("# Searching react-icons"));
    }

    #[tokio::test]
    async fn test_read_library_template() {
        let service = service();
        let result = service.read_resource("icons://library/fa").await.unwrap();

        let contents: serde_json::Value = serde_json::from_str(text(&result)).unwrap();
        assert_eq!(contents["library"]["name"], "Font Awesome 5");
        let icons = contents["icons"].as_array().unwrap();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0]["fullName"], "fa/FaUser");
    }

    #[tokio::test]
    async fn test_read_unknown_library() {
        let service = service();
        let result = service.read_resource("icons://library/zz").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_empty_prefix() {
        let service = service();
        let result = service.read_resource("icons://library/").await;
        assert!(matches!(result, Err(ResourceError::InvalidUri(_))));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = service();
        let result = service.read_resource("icons://nothing").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    struct FailingSource;

    impl SymbolSource for FailingSource {
        fn symbols(&self, prefix: &str) -> Result<Option<Vec<String>>, CatalogError> {
            Err(CatalogError::source(prefix, "unreadable"))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[tokio::test]
    async fn test_read_library_source_failure() {
        let catalog = IconCatalog::with_default_libraries(Arc::new(FailingSource));
        let service = ResourceService::new(Config::default().server, Arc::new(catalog));

        let result = service.read_resource("icons://library/fa").await;
        assert!(matches!(result, Err(ResourceError::Catalog(_))));
    }
}
