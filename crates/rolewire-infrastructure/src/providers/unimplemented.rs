//! Always-failing capability providers
//!
//! These are the default wiring for all three capability slots. A
//! component whose plan never consumes the corresponding role is
//! unaffected; one that does gets an unimplemented-capability error at
//! activation.

use async_trait::async_trait;
use rolewire_container::ports::registry::{
    ContextProviderEntry, MetadataProviderEntry, ProviderConfig, SessionProviderEntry,
    CONTEXT_PROVIDERS, METADATA_PROVIDERS, SESSION_PROVIDERS,
};
use rolewire_domain::component::ComponentDescriptor;
use rolewire_domain::error::{Error, Result};
use rolewire_domain::ports::{ContextProvider, MetadataProvider, SessionIdProvider};
use rolewire_domain::value_objects::{ComponentContext, ComponentMetadata, Role, SessionId};
use std::sync::Arc;

/// Metadata provider that has no backing source
#[derive(Debug, Default)]
pub struct UnimplementedMetadataProvider;

impl UnimplementedMetadataProvider {
    /// Create a new unimplemented metadata provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetadataProvider for UnimplementedMetadataProvider {
    fn provider_name(&self) -> &'static str {
        "unimplemented"
    }

    async fn metadata_for(
        &self,
        _component: &ComponentDescriptor,
    ) -> Result<Arc<ComponentMetadata>> {
        Err(Error::unimplemented(Role::ComponentMetadata))
    }
}

/// Context provider that has no backing source
#[derive(Debug, Default)]
pub struct UnimplementedContextProvider;

impl UnimplementedContextProvider {
    /// Create a new unimplemented context provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContextProvider for UnimplementedContextProvider {
    fn provider_name(&self) -> &'static str {
        "unimplemented"
    }

    async fn context_for(&self, _component: &ComponentDescriptor) -> Result<Arc<ComponentContext>> {
        Err(Error::unimplemented(Role::ComponentContext))
    }
}

/// Session-id provider that has no backing source
#[derive(Debug, Default)]
pub struct UnimplementedSessionProvider;

impl UnimplementedSessionProvider {
    /// Create a new unimplemented session provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SessionIdProvider for UnimplementedSessionProvider {
    fn provider_name(&self) -> &'static str {
        "unimplemented"
    }

    async fn session_for(&self, _component: &ComponentDescriptor) -> Result<SessionId> {
        Err(Error::unimplemented(Role::SessionId))
    }
}

fn unimplemented_metadata_factory(
    _config: &ProviderConfig,
) -> std::result::Result<Arc<dyn MetadataProvider>, String> {
    Ok(Arc::new(UnimplementedMetadataProvider::new()))
}

#[linkme::distributed_slice(METADATA_PROVIDERS)]
static UNIMPLEMENTED_METADATA: MetadataProviderEntry = MetadataProviderEntry {
    name: "unimplemented",
    description: "Fails with an unimplemented-capability error (default)",
    factory: unimplemented_metadata_factory,
};

fn unimplemented_context_factory(
    _config: &ProviderConfig,
) -> std::result::Result<Arc<dyn ContextProvider>, String> {
    Ok(Arc::new(UnimplementedContextProvider::new()))
}

#[linkme::distributed_slice(CONTEXT_PROVIDERS)]
static UNIMPLEMENTED_CONTEXT: ContextProviderEntry = ContextProviderEntry {
    name: "unimplemented",
    description: "Fails with an unimplemented-capability error (default)",
    factory: unimplemented_context_factory,
};

fn unimplemented_session_factory(
    _config: &ProviderConfig,
) -> std::result::Result<Arc<dyn SessionIdProvider>, String> {
    Ok(Arc::new(UnimplementedSessionProvider::new()))
}

#[linkme::distributed_slice(SESSION_PROVIDERS)]
static UNIMPLEMENTED_SESSION: SessionProviderEntry = SessionProviderEntry {
    name: "unimplemented",
    description: "Fails with an unimplemented-capability error (default)",
    factory: unimplemented_session_factory,
};
