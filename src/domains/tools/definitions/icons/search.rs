//! Icon search tool definition.
//!
//! Case-insensitive substring search over icon names, either across every
//! library (`arrow`) or inside one library (`fa:user`).

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{
    catalog_error_result, default_search_limit, text_result, validate_search_limit, yaml_result,
};
#[cfg(feature = "http")]
use super::common::{http_response, parse_http_params};
use crate::domains::catalog::IconCatalog;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the icon search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchIconsParams {
    /// The search query.
    #[schemars(
        description = "The search query. Can be a simple term like 'arrow' or library-specific like 'fa:user'"
    )]
    pub query: String,

    /// Maximum number of results to return.
    #[schemars(description = "Maximum number of results to return (default: 20, max: 100)")]
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Icon search tool.
pub struct SearchIconsTool;

impl SearchIconsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_icons";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for icons by name across all icon libraries or within a specific library. Use 'prefix:term' (e.g. 'fa:user') to search one library.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(query = %params.query))]
    pub fn execute(params: &SearchIconsParams, catalog: &IconCatalog) -> CallToolResult {
        info!("Searching for icons matching: {}", params.query);

        let limit = validate_search_limit(params.limit);
        match catalog.try_search(&params.query, limit) {
            Ok(icons) if icons.is_empty() => text_result(format!(
                "No icons found matching '{}'. Try a different search term or check the library prefix.",
                params.query
            )),
            Ok(icons) => {
                info!("Found {} icons", icons.len());
                yaml_result(&icons)
            }
            Err(e) => catalog_error_result("searching for icons", &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<IconCatalog>,
    ) -> Result<serde_json::Value, String> {
        let params: SearchIconsParams = parse_http_params(arguments)?;
        Ok(http_response(Self::execute(&params, &catalog)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchIconsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(catalog: Arc<IconCatalog>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let catalog = catalog.clone();
            async move {
                let params: SearchIconsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
