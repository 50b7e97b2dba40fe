//! Container-facing ports
//!
//! Currently just the compile-time provider registries.

/// Compile-time context provider registries
pub mod registry;

pub use registry::{
    list_context_providers, list_metadata_providers, list_session_providers,
    resolve_context_provider, resolve_metadata_provider, resolve_session_provider,
    ContextProviderEntry, MetadataProviderEntry, ProviderConfig, SessionProviderEntry,
    CONTEXT_PROVIDERS, METADATA_PROVIDERS, SESSION_PROVIDERS,
};
