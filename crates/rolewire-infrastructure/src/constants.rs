//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "ROLEWIRE";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "rolewire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "rolewire";

/// Environment variable consulted for the log filter
pub const LOG_ENV_VAR: &str = "ROLEWIRE_LOG";

/// Provider name used when no real capability provider is configured
pub const UNIMPLEMENTED_PROVIDER: &str = "unimplemented";

/// Module name used when none is configured
pub const DEFAULT_MODULE_NAME: &str = "default";
