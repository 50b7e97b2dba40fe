//! Session Provider Registry
//!
//! Auto-registration system for session-id providers using linkme
//! distributed slices.

use super::ProviderConfig;
use rolewire_domain::ports::SessionIdProvider;
use std::sync::Arc;

/// Registry entry for session-id providers
///
/// Each implementation registers itself with
/// `#[linkme::distributed_slice(SESSION_PROVIDERS)]`.
pub struct SessionProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&ProviderConfig) -> Result<Arc<dyn SessionIdProvider>, String>,
}

/// All session-id providers linked into the binary
#[linkme::distributed_slice]
pub static SESSION_PROVIDERS: [SessionProviderEntry] = [..];

/// Resolve a session-id provider by name from the registry
pub fn resolve_session_provider(
    config: &ProviderConfig,
) -> Result<Arc<dyn SessionIdProvider>, String> {
    for entry in SESSION_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = SESSION_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown session provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered session-id providers as (name, description) pairs
pub fn list_session_providers() -> Vec<(&'static str, &'static str)> {
    SESSION_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
