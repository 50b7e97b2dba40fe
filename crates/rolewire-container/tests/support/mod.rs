//! Shared test fixtures: stub capability providers and probe components
#![allow(dead_code)] // not every test target uses every fixture

use async_trait::async_trait;
use rolewire_container::{ContextValues, Registry};
use rolewire_domain::component::{Component, ComponentDescriptor};
use rolewire_domain::error::{Error, Result};
use rolewire_domain::ports::{ContextProvider, MetadataProvider, SessionIdProvider};
use rolewire_domain::value_objects::{
    ComponentContext, ComponentMetadata, ComponentName, Role, SessionId,
};
use std::sync::Arc;

pub const TEST_MODULE: &str = "test-module";
pub const TEST_SESSION: &str = "session-1";

/// Metadata provider assembling metadata from the descriptor
#[derive(Debug)]
pub struct StubMetadataProvider;

#[async_trait]
impl MetadataProvider for StubMetadataProvider {
    fn provider_name(&self) -> &'static str {
        "stub"
    }

    async fn metadata_for(&self, component: &ComponentDescriptor) -> Result<Arc<ComponentMetadata>> {
        Ok(Arc::new(ComponentMetadata {
            name: component.name.clone(),
            type_name: component.type_name.to_string(),
            bindings: component.bindings.clone(),
        }))
    }
}

/// Context provider serving a fixed test module
#[derive(Debug)]
pub struct StubContextProvider;

#[async_trait]
impl ContextProvider for StubContextProvider {
    fn provider_name(&self) -> &'static str {
        "stub"
    }

    async fn context_for(&self, _component: &ComponentDescriptor) -> Result<Arc<ComponentContext>> {
        Ok(Arc::new(ComponentContext::new(TEST_MODULE)))
    }
}

/// Session provider serving a fixed id
#[derive(Debug)]
pub struct StubSessionProvider;

#[async_trait]
impl SessionIdProvider for StubSessionProvider {
    fn provider_name(&self) -> &'static str {
        "stub"
    }

    async fn session_for(&self, _component: &ComponentDescriptor) -> Result<SessionId> {
        Ok(SessionId::new(TEST_SESSION))
    }
}

/// Metadata provider that always fails
#[derive(Debug)]
pub struct FailingMetadataProvider;

#[async_trait]
impl MetadataProvider for FailingMetadataProvider {
    fn provider_name(&self) -> &'static str {
        "failing"
    }

    async fn metadata_for(
        &self,
        _component: &ComponentDescriptor,
    ) -> Result<Arc<ComponentMetadata>> {
        Err(Error::unimplemented(Role::ComponentMetadata))
    }
}

/// Context provider that always fails
#[derive(Debug)]
pub struct FailingContextProvider;

#[async_trait]
impl ContextProvider for FailingContextProvider {
    fn provider_name(&self) -> &'static str {
        "failing"
    }

    async fn context_for(&self, _component: &ComponentDescriptor) -> Result<Arc<ComponentContext>> {
        Err(Error::unimplemented(Role::ComponentContext))
    }
}

/// Session provider that always fails
#[derive(Debug)]
pub struct FailingSessionProvider;

#[async_trait]
impl SessionIdProvider for FailingSessionProvider {
    fn provider_name(&self) -> &'static str {
        "failing"
    }

    async fn session_for(&self, _component: &ComponentDescriptor) -> Result<SessionId> {
        Err(Error::unimplemented(Role::SessionId))
    }
}

/// Capability slots with working stub providers
pub fn stub_values() -> ContextValues {
    ContextValues::new(
        Arc::new(StubMetadataProvider),
        Arc::new(StubContextProvider),
        Arc::new(StubSessionProvider),
    )
}

/// Capability slots where every contextual provider fails
pub fn failing_values() -> ContextValues {
    ContextValues::new(
        Arc::new(FailingMetadataProvider),
        Arc::new(FailingContextProvider),
        Arc::new(FailingSessionProvider),
    )
}

/// Registry backed by working stub providers
pub fn stub_registry() -> Registry {
    Registry::new(stub_values())
}

/// Registry where every contextual provider fails
pub fn failing_registry() -> Registry {
    Registry::new(failing_values())
}

/// Component with one member per role plus an ordered event log
#[derive(Debug, Default)]
pub struct Probe {
    pub name: Option<ComponentName>,
    pub name_from_setter: Option<String>,
    pub metadata: Option<Arc<ComponentMetadata>>,
    pub context: Option<Arc<ComponentContext>>,
    pub session: Option<SessionId>,
    pub events: Vec<String>,
}

impl Component for Probe {}
