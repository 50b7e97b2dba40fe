//! Component Metadata Provider Port
//!
//! Defines the contract for serving component metadata.

use crate::component::ComponentDescriptor;
use crate::error::Result;
use crate::value_objects::ComponentMetadata;
use async_trait::async_trait;
use std::sync::Arc;

/// Serves the value injected for the component-metadata role
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Provider name for diagnostics
    fn provider_name(&self) -> &'static str;

    /// Resolve metadata for the component being activated
    async fn metadata_for(&self, component: &ComponentDescriptor) -> Result<Arc<ComponentMetadata>>;
}
