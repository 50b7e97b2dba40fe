//! Module Context Provider Port
//!
//! Defines the contract for serving the enclosing module context.

use crate::component::ComponentDescriptor;
use crate::error::Result;
use crate::value_objects::ComponentContext;
use async_trait::async_trait;
use std::sync::Arc;

/// Serves the value injected for the component-context role
#[async_trait]
pub trait ContextProvider: Send + Sync {
    /// Provider name for diagnostics
    fn provider_name(&self) -> &'static str;

    /// Resolve the module context for the component being activated
    async fn context_for(&self, component: &ComponentDescriptor) -> Result<Arc<ComponentContext>>;
}
