//! Context Provider Registries
//!
//! Auto-registration for the three capability providers using linkme
//! distributed slices. Provider implementations register themselves via
//! `#[linkme::distributed_slice]` and are resolved by name at runtime.
//!
//! These slices collect *factories*, not instances; the component
//! registry itself stays an explicit value assembled at bootstrap.

use std::collections::HashMap;

/// Module context provider registry
pub mod context;
/// Component metadata provider registry
pub mod metadata;
/// Session identifier provider registry
pub mod session;

pub use context::{list_context_providers, resolve_context_provider, ContextProviderEntry, CONTEXT_PROVIDERS};
pub use metadata::{
    list_metadata_providers, resolve_metadata_provider, MetadataProviderEntry, METADATA_PROVIDERS,
};
pub use session::{
    list_session_providers, resolve_session_provider, SessionProviderEntry, SESSION_PROVIDERS,
};

/// Configuration for context provider creation
///
/// Shared across the three capability registries; providers use what
/// they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Provider name (e.g., "manifest", "uuid", "unimplemented")
    pub provider: String,
    /// Module name, for providers that serve module context
    pub module: Option<String>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl ProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the module name
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
