//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::catalog::IconCatalog;

use super::definitions::{
    IconDetailsTool, IconLibrariesTool, LibraryIconsTool, SearchIconsTool, UsageExamplesTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(catalog: Arc<IconCatalog>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(IconLibrariesTool::create_route(catalog.clone()))
        .with_route(SearchIconsTool::create_route(catalog.clone()))
        .with_route(LibraryIconsTool::create_route(catalog.clone()))
        .with_route(IconDetailsTool::create_route(catalog.clone()))
        .with_route(UsageExamplesTool::create_route(catalog))
}
