//! Context Provider Registry
//!
//! Auto-registration system for module context providers using linkme
//! distributed slices.

use super::ProviderConfig;
use rolewire_domain::ports::ContextProvider;
use std::sync::Arc;

/// Registry entry for context providers
///
/// Each implementation registers itself with
/// `#[linkme::distributed_slice(CONTEXT_PROVIDERS)]`.
pub struct ContextProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&ProviderConfig) -> Result<Arc<dyn ContextProvider>, String>,
}

/// All context providers linked into the binary
#[linkme::distributed_slice]
pub static CONTEXT_PROVIDERS: [ContextProviderEntry] = [..];

/// Resolve a context provider by name from the registry
pub fn resolve_context_provider(
    config: &ProviderConfig,
) -> Result<Arc<dyn ContextProvider>, String> {
    for entry in CONTEXT_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CONTEXT_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown context provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered context providers as (name, description) pairs
pub fn list_context_providers() -> Vec<(&'static str, &'static str)> {
    CONTEXT_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
