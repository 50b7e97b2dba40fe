//! Configuration types and loading

/// Configuration loader built on figment
pub mod loader;
/// Configuration type definitions
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ContainerSettings, LogFormat, LoggingConfig, ProviderSelection, ProvidersConfig};
