//! UUID session provider
//!
//! Serves a fresh v4 UUID per request. Each activation that consumes
//! the session-id role gets its own id; members within one activation
//! share it, because the container resolves the role once.

use async_trait::async_trait;
use rolewire_container::ports::registry::{ProviderConfig, SessionProviderEntry, SESSION_PROVIDERS};
use rolewire_domain::component::ComponentDescriptor;
use rolewire_domain::error::Result;
use rolewire_domain::ports::SessionIdProvider;
use rolewire_domain::value_objects::SessionId;
use std::sync::Arc;
use uuid::Uuid;

/// Session-id provider backed by random UUIDs
#[derive(Debug, Default)]
pub struct UuidSessionProvider;

impl UuidSessionProvider {
    /// Create a new UUID session provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SessionIdProvider for UuidSessionProvider {
    fn provider_name(&self) -> &'static str {
        "uuid"
    }

    async fn session_for(&self, _component: &ComponentDescriptor) -> Result<SessionId> {
        Ok(SessionId::new(Uuid::new_v4().to_string()))
    }
}

fn uuid_factory(
    _config: &ProviderConfig,
) -> std::result::Result<Arc<dyn SessionIdProvider>, String> {
    Ok(Arc::new(UuidSessionProvider::new()))
}

#[linkme::distributed_slice(SESSION_PROVIDERS)]
static UUID_PROVIDER: SessionProviderEntry = SessionProviderEntry {
    name: "uuid",
    description: "Fresh v4 UUID per activation",
    factory: uuid_factory,
};
