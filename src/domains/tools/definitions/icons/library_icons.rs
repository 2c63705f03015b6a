//! Library icons tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{catalog_error_result, default_library_limit, text_result, yaml_result};
#[cfg(feature = "http")]
use super::common::{http_response, parse_http_params};
use crate::domains::catalog::{IconCatalog, IconRecord, LibraryInfo};

/// Parameters for the library icons tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LibraryIconsParams {
    /// Library prefix (e.g. "fa").
    #[schemars(
        description = "The library prefix (e.g., 'fa' for Font Awesome, 'md' for Material Design, etc.)"
    )]
    pub library_prefix: String,

    /// Maximum number of icons to return.
    #[schemars(description = "Maximum number of icons to return (default: 50)")]
    #[serde(default = "default_library_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LibraryIconsResponse<'a> {
    library: &'a LibraryInfo,
    total_icons: usize,
    icons: &'a [IconRecord],
}

/// Library icons tool - lists the icons of one library.
pub struct LibraryIconsTool;

impl LibraryIconsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_library_icons";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get all icons from a specific icon library";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(prefix = %params.library_prefix))]
    pub fn execute(params: &LibraryIconsParams, catalog: &IconCatalog) -> CallToolResult {
        info!("Fetching icons from library: {}", params.library_prefix);

        let Some(library) = catalog.get_library(&params.library_prefix) else {
            return text_result(format!(
                "Library with prefix '{}' not found. Available prefixes: {}",
                params.library_prefix,
                catalog.prefixes().join(", ")
            ));
        };

        let icons = match catalog.try_list_icons(&library.prefix) {
            Ok(icons) => icons,
            Err(e) => return catalog_error_result("fetching icons from library", &e),
        };

        let shown = &icons[..icons.len().min(params.limit)];
        info!("Returning {} of {} icons", shown.len(), icons.len());

        yaml_result(&LibraryIconsResponse {
            library,
            total_icons: icons.len(),
            icons: shown,
        })
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<IconCatalog>,
    ) -> Result<serde_json::Value, String> {
        let params: LibraryIconsParams = parse_http_params(arguments)?;
        Ok(http_response(Self::execute(&params, &catalog)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<LibraryIconsParams>(),
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
                let params: LibraryIconsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}
