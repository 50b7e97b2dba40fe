//! Manifest metadata provider
//!
//! Serves metadata assembled from the component's own definition: its
//! registered name, concrete type, and declared binding names. Needs no
//! external source, so it always works.

use async_trait::async_trait;
use rolewire_container::ports::registry::{
    MetadataProviderEntry, ProviderConfig, METADATA_PROVIDERS,
};
use rolewire_domain::component::ComponentDescriptor;
use rolewire_domain::error::Result;
use rolewire_domain::ports::MetadataProvider;
use rolewire_domain::value_objects::ComponentMetadata;
use std::sync::Arc;

/// Metadata provider backed by the component's own definition
#[derive(Debug, Default)]
pub struct ManifestMetadataProvider;

impl ManifestMetadataProvider {
    /// Create a new manifest metadata provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetadataProvider for ManifestMetadataProvider {
    fn provider_name(&self) -> &'static str {
        "manifest"
    }

    async fn metadata_for(&self, component: &ComponentDescriptor) -> Result<Arc<ComponentMetadata>> {
        Ok(Arc::new(ComponentMetadata {
            name: component.name.clone(),
            type_name: component.type_name.to_string(),
            bindings: component.bindings.clone(),
        }))
    }
}

fn manifest_factory(
    _config: &ProviderConfig,
) -> std::result::Result<Arc<dyn MetadataProvider>, String> {
    Ok(Arc::new(ManifestMetadataProvider::new()))
}

#[linkme::distributed_slice(METADATA_PROVIDERS)]
static MANIFEST_PROVIDER: MetadataProviderEntry = MetadataProviderEntry {
    name: "manifest",
    description: "Metadata assembled from the component's own definition",
    factory: manifest_factory,
};
