//! Common utilities shared across icon tools.
//!
//! Tool output is YAML text. "Not found" outcomes are plain text results;
//! only a failing symbol source produces an error-flagged result.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::catalog::{CatalogError, DEFAULT_SEARCH_LIMIT, SEARCH_SCAN_CAP};

/// Default limit for `search_icons`.
pub fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

/// Default limit for `get_library_icons`.
pub fn default_library_limit() -> usize {
    50
}

/// Clamp a search limit to the allowed range (1-100).
pub fn validate_search_limit(limit: usize) -> usize {
    limit.clamp(1, SEARCH_SCAN_CAP)
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn text_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Serialize `value` as YAML into a success result.
pub fn yaml_result<T: Serialize + ?Sized>(value: &T) -> CallToolResult {
    match serde_yaml::to_string(value) {
        Ok(yaml) => text_result(yaml),
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Error result for a symbol source failure while doing `action`.
pub fn catalog_error_result(action: &str, error: &CatalogError) -> CallToolResult {
    error_result(&format!("Error {}: {}", action, error))
}

/// JSON body returned by the HTTP transport for a tool result.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Parse tool arguments for the HTTP transport.
#[cfg(feature = "http")]
pub fn parse_http_params<T: serde::de::DeserializeOwned>(
    arguments: serde_json::Value,
) -> Result<T, String> {
    serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {}", e))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_search_limit() {
        assert_eq!(validate_search_limit(20), 20);
        assert_eq!(validate_search_limit(0), 1);
        assert_eq!(validate_search_limit(500), 100);
    }

    #[test]
    fn test_yaml_result() {
        let result = yaml_result(&vec!["FaUser", "FaHome"]);
        assert!(!test_support::is_error(&result));
        assert_eq!(test_support::text_of(&result), "- FaUser\n- FaHome\n");
    }

    #[test]
    fn test_catalog_error_result() {
        let error = CatalogError::source("fa", "boom");
        let result = catalog_error_result("searching for icons", &error);
        assert!(test_support::is_error(&result));
        assert_eq!(
            test_support::text_of(&result),
            "Error searching for icons: Symbol source failed for 'fa': boom"
        );
    }
}
