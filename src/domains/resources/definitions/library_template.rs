//! Per-library resource template: `icons://library/{prefix}`.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

/// Template resolving to one library and its icons.
pub struct LibraryResourceTemplate;

impl LibraryResourceTemplate {
    /// RFC 6570 URI template.
    pub const URI_TEMPLATE: &'static str = "icons://library/{prefix}";
    const URI_PREFIX: &'static str = "icons://library/";

    /// Template metadata for listing.
    pub fn to_template() -> ResourceTemplate {
        RawResourceTemplate {
            uri_template: Self::URI_TEMPLATE.to_string(),
            name: "Library Icons".to_string(),
            title: Some("Icons of one library".to_string()),
            description: Some(
                "Library metadata and every icon it exports, by library prefix (e.g. 'fa')"
                    .to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation()
    }

    /// Prefix captured by the template, if `uri` is an instance of it.
    ///
    /// Returns `Some("")` for `icons://library/` so callers can reject it.
    pub fn match_uri(uri: &str) -> Option<&str> {
        uri.strip_prefix(Self::URI_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_uri() {
        assert_eq!(
            LibraryResourceTemplate::match_uri("icons://library/fa"),
            Some("fa")
        );
        assert_eq!(LibraryResourceTemplate::match_uri("icons://library/"), Some(""));
        assert_eq!(LibraryResourceTemplate::match_uri("icons://libraries"), None);
    }

    #[test]
    fn test_template_metadata() {
        let template = LibraryResourceTemplate::to_template();
        assert_eq!(template.raw.uri_template, "icons://library/{prefix}");
        assert_eq!(template.raw.mime_type.as_deref(), Some("application/json"));
    }
}
