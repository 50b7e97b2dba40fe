//! # rolewire-infrastructure
//!
//! Cross-cutting technical concerns for rolewire: configuration loading,
//! structured logging, the built-in context providers, and the bootstrap
//! that assembles a [`di::ContainerRuntime`] from configuration.

/// Configuration types and loading
pub mod config;

/// Infrastructure constants
pub mod constants;

/// Runtime assembly - provider resolution and bootstrap
pub mod di;

/// Structured logging with tracing
pub mod logging;

/// Built-in context provider implementations
pub mod providers;

pub use config::{AppConfig, ConfigLoader, ContainerSettings, LogFormat, LoggingConfig};
pub use di::{bootstrap, ContainerRuntime};
pub use logging::init_logging;
