//! Icon libraries resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Every known icon library as a JSON array (dynamic).
pub struct LibrariesResource;

impl ResourceDefinition for LibrariesResource {
    const URI: &'static str = "icons://libraries";
    const NAME: &'static str = "Icon Libraries";
    const DESCRIPTION: &'static str = "All icon libraries available in react-icons";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Libraries)
    }
}
