//! Configuration type definitions

use crate::constants::{DEFAULT_MODULE_NAME, UNIMPLEMENTED_PROVIDER};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Container-wide settings
    pub container: ContainerSettings,
    /// Context provider selection per capability
    pub providers: ProvidersConfig,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Container-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSettings {
    /// Name of the module this container hosts, served by the static
    /// context provider
    pub module: String,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE_NAME.to_string(),
        }
    }
}

/// Context provider selection per capability
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Metadata provider selection
    pub metadata: ProviderSelection,
    /// Module context provider selection
    pub context: ProviderSelection,
    /// Session-id provider selection
    pub session: ProviderSelection,
}

/// Selection of one provider by name, with provider-specific settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSelection {
    /// Registered provider name
    pub provider: String,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl Default for ProviderSelection {
    fn default() -> Self {
        Self {
            provider: UNIMPLEMENTED_PROVIDER.to_string(),
            extra: HashMap::new(),
        }
    }
}
