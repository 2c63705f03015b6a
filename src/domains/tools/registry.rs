//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::catalog::IconCatalog;

use super::definitions::{
    IconDetailsTool, IconLibrariesTool, LibraryIconsTool, SearchIconsTool, UsageExamplesTool,
};
#[cfg(feature = "http")]
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    catalog: Arc<IconCatalog>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(catalog: Arc<IconCatalog>) -> Self {
        Self { catalog }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            IconLibrariesTool::NAME,
            SearchIconsTool::NAME,
            LibraryIconsTool::NAME,
            IconDetailsTool::NAME,
            UsageExamplesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            IconLibrariesTool::to_tool(),
            SearchIconsTool::to_tool(),
            LibraryIconsTool::to_tool(),
            IconDetailsTool::to_tool(),
            UsageExamplesTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let catalog = self.catalog.clone();
        let result = match name {
            IconLibrariesTool::NAME => IconLibrariesTool::http_handler(arguments, catalog),
            SearchIconsTool::NAME => SearchIconsTool::http_handler(arguments, catalog),
            LibraryIconsTool::NAME => LibraryIconsTool::http_handler(arguments, catalog),
            IconDetailsTool::NAME => IconDetailsTool::http_handler(arguments, catalog),
            UsageExamplesTool::NAME => UsageExamplesTool::http_handler(arguments, catalog),
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        result.map_err(ToolError::invalid_arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::StaticSymbolSource;

    fn test_catalog() -> Arc<IconCatalog> {
        let source = StaticSymbolSource::new().with_library("fa", ["FaUser", "FaHome"]);
        Arc::new(IconCatalog::with_default_libraries(Arc::new(source)))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_catalog());
        let names = registry.tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"get_icon_libraries"));
        assert!(names.contains(&"search_icons"));
        assert!(names.contains(&"get_library_icons"));
        assert!(names.contains(&"get_icon_details"));
        assert!(names.contains(&"get_icon_usage_examples"));
    }

    #[test]
    fn test_get_all_tools_have_schemas() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 5);
        for tool in tools {
            assert!(tool.description.is_some());
            assert_eq!(
                tool.input_schema.get("type").and_then(|v| v.as_str()),
                Some("object")
            );
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_search() {
        let registry = ToolRegistry::new(test_catalog());
        let result = registry
            .call_tool("search_icons", serde_json::json!({ "query": "fa:home" }))
            .unwrap();
        assert_eq!(result["isError"], false);
        assert!(result["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("FaHome"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_invalid_arguments() {
        let registry = ToolRegistry::new(test_catalog());
        let result = registry.call_tool("get_icon_details", serde_json::json!({ "iconName": 3 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_catalog());
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
