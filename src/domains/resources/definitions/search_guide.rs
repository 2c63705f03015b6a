//! Search syntax guide resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// How to query the catalog (static Markdown).
pub struct SearchGuideResource;

impl ResourceDefinition for SearchGuideResource {
    const URI: &'static str = "icons://docs/search";
    const NAME: &'static str = "Search Guide";
    const DESCRIPTION: &'static str = "How icon search queries are matched";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(GUIDE.to_string())
    }
}

const GUIDE: &str = r#"# Searching react-icons

Queries match icon names by case-insensitive substring.

- `arrow` searches every library. Popular libraries (fa, md, ai, bs, fa6,
  hi2, io5, lu) are searched first, and scanning stops once 100 matches
  have been collected.
- `fa:user` searches only the library with prefix `fa`. If the prefix is
  not a known library, the whole query (`fa:user`) is searched everywhere.

Results are capped by `limit` (default 20, at most 100).

Use `get_icon_libraries` to list prefixes, `get_library_icons` to browse a
library, and `get_icon_details` for import snippets.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_guide_is_static_markdown() {
        assert_eq!(SearchGuideResource::MIME_TYPE, "text/markdown");
        match SearchGuideResource::content() {
            ResourceContent::Text(text) => assert!(text.contains("`fa:user`")),
            other => panic!("Expected static text, got {:?}", other),
        }
    }
}
