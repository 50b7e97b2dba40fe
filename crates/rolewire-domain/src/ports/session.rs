//! Session Identifier Provider Port
//!
//! Defines the contract for serving session identifiers.

use crate::component::ComponentDescriptor;
use crate::error::Result;
use crate::value_objects::SessionId;
use async_trait::async_trait;

/// Serves the value injected for the session-id role
#[async_trait]
pub trait SessionIdProvider: Send + Sync {
    /// Provider name for diagnostics
    fn provider_name(&self) -> &'static str;

    /// Resolve the session id for the component being activated
    async fn session_for(&self, component: &ComponentDescriptor) -> Result<SessionId>;
}
