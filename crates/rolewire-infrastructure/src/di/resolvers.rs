//! Provider Resolvers
//!
//! One resolver per capability slot. Each turns the application
//! configuration into a registry lookup and returns the provider
//! instance the configuration names.
//!
//! ## Pattern
//!
//! ```text
//! AppConfig → Resolver → linkme registry → Arc<dyn Provider>
//! ```

use crate::config::{AppConfig, ProviderSelection};
use rolewire_container::ports::registry::{
    list_context_providers, list_metadata_providers, list_session_providers,
    resolve_context_provider, resolve_metadata_provider, resolve_session_provider, ProviderConfig,
};
use rolewire_domain::ports::{ContextProvider, MetadataProvider, SessionIdProvider};
use std::sync::Arc;

fn registry_config(selection: &ProviderSelection, module: &str) -> ProviderConfig {
    let mut config = ProviderConfig::new(&selection.provider).with_module(module);
    for (key, value) in &selection.extra {
        config = config.with_extra(key.clone(), value.clone());
    }
    config
}

// ============================================================================
// Metadata Provider Resolver
// ============================================================================

/// Resolver for metadata providers
pub struct MetadataProviderResolver {
    config: Arc<AppConfig>,
}

impl MetadataProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve the provider the configuration names
    pub fn resolve_from_config(&self) -> Result<Arc<dyn MetadataProvider>, String> {
        let registry_config =
            registry_config(&self.config.providers.metadata, &self.config.container.module);
        resolve_metadata_provider(&registry_config)
    }

    /// List available metadata providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_metadata_providers()
    }
}

impl std::fmt::Debug for MetadataProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataProviderResolver").finish()
    }
}

// ============================================================================
// Context Provider Resolver
// ============================================================================

/// Resolver for module context providers
pub struct ContextProviderResolver {
    config: Arc<AppConfig>,
}

impl ContextProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve the provider the configuration names
    pub fn resolve_from_config(&self) -> Result<Arc<dyn ContextProvider>, String> {
        let registry_config =
            registry_config(&self.config.providers.context, &self.config.container.module);
        resolve_context_provider(&registry_config)
    }

    /// List available context providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_context_providers()
    }
}

impl std::fmt::Debug for ContextProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextProviderResolver").finish()
    }
}

// ============================================================================
// Session Provider Resolver
// ============================================================================

/// Resolver for session-id providers
pub struct SessionProviderResolver {
    config: Arc<AppConfig>,
}

impl SessionProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve the provider the configuration names
    pub fn resolve_from_config(&self) -> Result<Arc<dyn SessionIdProvider>, String> {
        let registry_config =
            registry_config(&self.config.providers.session, &self.config.container.module);
        resolve_session_provider(&registry_config)
    }

    /// List available session-id providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_session_providers()
    }
}

impl std::fmt::Debug for SessionProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionProviderResolver").finish()
    }
}
