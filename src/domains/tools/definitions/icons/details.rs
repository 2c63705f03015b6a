//! Icon details tool definition.
//!
//! Resolves one icon by exact name and returns import/JSX snippets for it.

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

use super::common::{catalog_error_result, text_result, yaml_result};
#[cfg(feature = "http")]
use super::common::{http_response, parse_http_params};
use crate::domains::catalog::{IconCatalog, IconRecord, LibraryInfo};

/// Parameters for the icon details tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IconDetailsParams {
    /// Library prefix (e.g. "fa").
    #[schemars(description = "The library prefix (e.g., 'fa' for Font Awesome)")]
    pub library_prefix: String,

    /// Exact icon name (e.g. "FaUser").
    #[schemars(description = "The name of the icon (e.g., 'FaUser')")]
    pub icon_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IconUsage {
    import: String,
    jsx: String,
    with_props: String,
}

impl IconUsage {
    fn new(prefix: &str, icon: &str) -> Self {
        Self {
            import: format!("import {{ {} }} from \"react-icons/{}\";", icon, prefix),
            jsx: format!("<{} />", icon),
            with_props: format!("<{} size={{24}} color=\"blue\" />", icon),
        }
    }
}

#[derive(Debug, Serialize)]
struct IconDetailsResponse<'a> {
    icon: &'a IconRecord,
    library: Option<&'a LibraryInfo>,
    usage: IconUsage,
}

/// Icon details tool.
pub struct IconDetailsTool;

impl IconDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_icon_details";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed information about a specific icon";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(prefix = %params.library_prefix, icon = %params.icon_name))]
    pub fn execute(params: &IconDetailsParams, catalog: &IconCatalog) -> CallToolResult {
        info!(
            "Fetching details for icon: {}/{}",
            params.library_prefix, params.icon_name
        );

        let icon = match catalog.try_icon_details(&params.library_prefix, &params.icon_name) {
            Ok(Some(icon)) => icon,
            Ok(None) => {
                return text_result(format!(
                    "Icon '{}' not found in library '{}'.",
                    params.icon_name, params.library_prefix
                ));
            }
            Err(e) => return catalog_error_result("fetching icon details", &e),
        };

        yaml_result(&IconDetailsResponse {
            library: catalog.get_library(icon.package_name()),
            usage: IconUsage::new(icon.package_name(), icon.icon_name()),
            icon: &icon,
        })
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<IconCatalog>,
    ) -> Result<serde_json::Value, String> {
        let params: IconDetailsParams = parse_http_params(arguments)?;
        Ok(http_response(Self::execute(&params, &catalog)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<IconDetailsParams>(),
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
                let params: IconDetailsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}
