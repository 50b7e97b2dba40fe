//! Bootstrap
//!
//! Assembles a [`ContainerRuntime`] from configuration: resolves the
//! three capability providers through their registries and constructs
//! an empty component registry around them. The registry is an explicit
//! value owned by the runtime; callers pass it by reference.

use crate::config::AppConfig;
use crate::di::resolvers::{
    ContextProviderResolver, MetadataProviderResolver, SessionProviderResolver,
};
use rolewire_container::{ContextValues, Registry};
use rolewire_domain::error::{Error, Result};
use std::sync::Arc;
use tracing::info;

/// A fully assembled container runtime
pub struct ContainerRuntime {
    config: Arc<AppConfig>,
    registry: Arc<Registry>,
}

impl ContainerRuntime {
    /// The configuration the runtime was assembled from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The component registry
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl std::fmt::Debug for ContainerRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerRuntime")
            .field("module", &self.config.container.module)
            .field("registry", &self.registry)
            .finish()
    }
}

/// Build a container runtime from the given configuration
///
/// Resolves each capability provider by its configured name; an unknown
/// name is a configuration error naming the capability.
pub fn bootstrap(config: AppConfig) -> Result<ContainerRuntime> {
    let config = Arc::new(config);

    let metadata_resolver = MetadataProviderResolver::new(Arc::clone(&config));
    let context_resolver = ContextProviderResolver::new(Arc::clone(&config));
    let session_resolver = SessionProviderResolver::new(Arc::clone(&config));

    let metadata_provider = metadata_resolver
        .resolve_from_config()
        .map_err(|e| Error::configuration(format!("Metadata: {e}")))?;

    let context_provider = context_resolver
        .resolve_from_config()
        .map_err(|e| Error::configuration(format!("Context: {e}")))?;

    let session_provider = session_resolver
        .resolve_from_config()
        .map_err(|e| Error::configuration(format!("Session: {e}")))?;

    info!(
        module = %config.container.module,
        metadata = metadata_provider.provider_name(),
        context = context_provider.provider_name(),
        session = session_provider.provider_name(),
        "Resolved context providers"
    );

    let values = ContextValues::new(metadata_provider, context_provider, session_provider);
    let registry = Arc::new(Registry::new(values));

    info!(module = %config.container.module, "Container runtime assembled");

    Ok(ContainerRuntime { config, registry })
}
