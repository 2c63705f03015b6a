//! Icon libraries tool definition.
//!
//! Lists every icon library the server knows about.

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

use super::common::yaml_result;
#[cfg(feature = "http")]
use super::common::{http_response, parse_http_params};
use crate::domains::catalog::IconCatalog;

/// Parameters for the icon libraries tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct IconLibrariesParams {}

/// Icon libraries tool - lists library metadata.
pub struct IconLibrariesTool;

impl IconLibrariesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_icon_libraries";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get information about all icon libraries available in react-icons";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(_params: &IconLibrariesParams, catalog: &IconCatalog) -> CallToolResult {
        info!("Fetching icon libraries information");
        let libraries = catalog.list_libraries();
        info!("Returning {} libraries", libraries.len());
        yaml_result(libraries)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<IconCatalog>,
    ) -> Result<serde_json::Value, String> {
        let params: IconLibrariesParams = if arguments.is_null() {
            IconLibrariesParams::default()
        } else {
            parse_http_params(arguments)?
        };
        Ok(http_response(Self::execute(&params, &catalog)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<IconLibrariesParams>(),
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
                let params: IconLibrariesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}
