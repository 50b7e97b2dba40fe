//! Metadata Provider Registry
//!
//! Auto-registration system for metadata providers using linkme
//! distributed slices.

use super::ProviderConfig;
use rolewire_domain::ports::MetadataProvider;
use std::sync::Arc;

/// Registry entry for metadata providers
///
/// Each implementation registers itself with
/// `#[linkme::distributed_slice(METADATA_PROVIDERS)]`.
pub struct MetadataProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&ProviderConfig) -> Result<Arc<dyn MetadataProvider>, String>,
}

/// All metadata providers linked into the binary
#[linkme::distributed_slice]
pub static METADATA_PROVIDERS: [MetadataProviderEntry] = [..];

/// Resolve a metadata provider by name from the registry
pub fn resolve_metadata_provider(
    config: &ProviderConfig,
) -> Result<Arc<dyn MetadataProvider>, String> {
    for entry in METADATA_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = METADATA_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown metadata provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered metadata providers as (name, description) pairs
pub fn list_metadata_providers() -> Vec<(&'static str, &'static str)> {
    METADATA_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
