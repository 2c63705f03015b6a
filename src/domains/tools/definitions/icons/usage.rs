//! Icon usage examples tool definition.

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

use super::common::{catalog_error_result, yaml_result};
#[cfg(feature = "http")]
use super::common::{http_response, parse_http_params};
use crate::domains::catalog::IconCatalog;

const FALLBACK_PREFIX: &str = "fa";
const FALLBACK_ICON: &str = "FaUser";
const FALLBACK_LIBRARY: &str = "Font Awesome 5";

/// Parameters for the usage examples tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsageExamplesParams {
    /// Library to tailor the examples to.
    #[schemars(description = "The library prefix to get specific examples for (optional)")]
    #[serde(default)]
    pub library_prefix: Option<String>,
}

#[derive(Debug, Serialize)]
struct Example {
    title: &'static str,
    description: String,
    code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UsageExamples {
    basic: Example,
    with_props: Example,
    with_context: Example,
    dynamic_import: Example,
}

impl UsageExamples {
    fn new(prefix: &str, icon: &str, library_name: &str) -> Self {
        let import = format!("import {{ {icon} }} from \"react-icons/{prefix}\";");

        Self {
            basic: Example {
                title: "Basic Usage",
                description: format!("Import and use a {library_name} icon"),
                code: format!(
                    "{import}\n\nfunction MyComponent() {{\n  return (\n    <div>\n      <{icon} />\n      <p>This is my content with an icon</p>\n    </div>\n  );\n}}"
                ),
            },
            with_props: Example {
                title: "Customizing Icons",
                description: "Customize icon size, color, and other properties".to_string(),
                code: format!(
                    "{import}\n\nfunction MyComponent() {{\n  return (\n    <div>\n      <{icon}\n        size={{24}}\n        color=\"blue\"\n        className=\"my-icon\"\n        onClick={{() => alert('Icon clicked!')}}\n      />\n    </div>\n  );\n}}"
                ),
            },
            with_context: Example {
                title: "Using IconContext",
                description: "Set default properties for all icons within a context".to_string(),
                code: format!(
                    "{import}\nimport {{ IconContext }} from \"react-icons\";\n\nfunction MyComponent() {{\n  return (\n    <IconContext.Provider value={{{{ color: \"blue\", size: \"1.5em\", className: \"global-icon\" }}}}>\n      <div>\n        <{icon} /> {{/* This icon will be blue, 1.5em, and have class \"global-icon\" */}}\n        <p>This is my content</p>\n        <{icon} color=\"red\" /> {{/* This will override the context color */}}\n      </div>\n    </IconContext.Provider>\n  );\n}}"
                ),
            },
            dynamic_import: Example {
                title: "Dynamic Import",
                description: "Import icons dynamically based on conditions".to_string(),
                code: DYNAMIC_IMPORT_CODE.to_string(),
            },
        }
    }
}

const DYNAMIC_IMPORT_CODE: &str = r#"import React from 'react';
import { IconContext } from "react-icons";
// Import different icon types
import { FaUser, FaCog } from "react-icons/fa";
import { MdHome } from "react-icons/md";

function DynamicIcon({ type }) {
  // Map icon types to components
  const icons = {
    user: FaUser,
    settings: FaCog,
    home: MdHome,
  };

  // Get the appropriate icon or default to FaUser
  const IconComponent = icons[type] || FaUser;

  return <IconComponent />;
}

function App() {
  return (
    <div>
      <DynamicIcon type="user" />
      <DynamicIcon type="settings" />
      <DynamicIcon type="home" />
    </div>
  );
}"#;

/// Usage examples tool - code snippets for using react-icons.
pub struct UsageExamplesTool;

impl UsageExamplesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_icon_usage_examples";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get code examples for using react-icons in different contexts";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    ///
    /// A known library supplies its name and first icon; anything else
    /// falls back to `FaUser`. The import path always uses the requested
    /// prefix when one is given.
    #[instrument(skip_all, fields(prefix = ?params.library_prefix))]
    pub fn execute(params: &UsageExamplesParams, catalog: &IconCatalog) -> CallToolResult {
        let prefix = params
            .library_prefix
            .as_deref()
            .filter(|p| !p.is_empty());
        match prefix {
            Some(p) => info!("Generating usage examples for {}", p),
            None => info!("Generating usage examples"),
        }

        let mut icon = FALLBACK_ICON.to_string();
        let mut library_name = FALLBACK_LIBRARY;

        if let Some(library) = prefix.and_then(|p| catalog.get_library(p)) {
            library_name = library.name.as_str();
            match catalog.try_list_icons(&library.prefix) {
                Ok(icons) => {
                    if let Some(first) = icons.first() {
                        icon = first.icon_name().to_string();
                    }
                }
                Err(e) => return catalog_error_result("generating usage examples", &e),
            }
        }

        yaml_result(&UsageExamples::new(
            prefix.unwrap_or(FALLBACK_PREFIX),
            &icon,
            library_name,
        ))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<IconCatalog>,
    ) -> Result<serde_json::Value, String> {
        let params: UsageExamplesParams = if arguments.is_null() {
            UsageExamplesParams::default()
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
            input_schema: cached_schema_for_type::<UsageExamplesParams>(),
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
                let params: UsageExamplesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::{broken_catalog, fixture_catalog, is_error, text_of};
    use super::*;

    fn run(prefix: Option<&str>, catalog: &IconCatalog) -> serde_yaml::Value {
        let params = UsageExamplesParams {
            library_prefix: prefix.map(str::to_string),
        };
        let result = UsageExamplesTool::execute(&params, catalog);
        assert!(!is_error(&result));
        serde_yaml::from_str(text_of(&result)).unwrap()
    }

    #[test]
    fn test_usage_default() {
        let catalog = fixture_catalog();
        let examples = run(None, &catalog);

        let basic = examples["basic"]["code"].as_str().unwrap();
        assert!(basic.starts_with("import { FaUser } from \"react-icons/fa\";"));
        assert_eq!(
            examples["basic"]["description"].as_str(),
            Some("Import and use a Font Awesome 5 icon")
        );
        assert!(examples["withProps"].is_mapping());
        assert!(examples["withContext"]["code"]
            .as_str()
            .unwrap()
            .contains("<IconContext.Provider value={{ color: \"blue\""));
        assert!(examples["dynamicImport"]["code"]
            .as_str()
            .unwrap()
            .contains("import { MdHome } from \"react-icons/md\";"));
    }

    #[test]
    fn test_usage_known_library_uses_first_icon() {
        let catalog = fixture_catalog();
        let examples = run(Some("md"), &catalog);

        let basic = examples["basic"]["code"].as_str().unwrap();
        assert!(basic.starts_with("import { MdHome } from \"react-icons/md\";"));
        assert_eq!(
            examples["basic"]["description"].as_str(),
            Some("Import and use a Material Design Icons icon")
        );
    }

    #[test]
    fn test_usage_unknown_library_keeps_prefix() {
        let catalog = fixture_catalog();
        let examples = run(Some("zz"), &catalog);

        let basic = examples["basic"]["code"].as_str().unwrap();
        assert!(basic.starts_with("import { FaUser } from \"react-icons/zz\";"));
    }

    #[test]
    fn test_usage_source_failure() {
        let catalog = broken_catalog();
        let params = UsageExamplesParams {
            library_prefix: Some("fa".to_string()),
        };
        let result = UsageExamplesTool::execute(&params, &catalog);
        assert!(is_error(&result));
        assert!(text_of(&result).starts_with("Error generating usage examples:"));
    }
}
