//! Static context provider
//!
//! Serves one module context fixed at bootstrap: the configured module
//! name plus any extra attributes from the provider selection.

use async_trait::async_trait;
use rolewire_container::ports::registry::{ContextProviderEntry, ProviderConfig, CONTEXT_PROVIDERS};
use rolewire_domain::component::ComponentDescriptor;
use rolewire_domain::error::Result;
use rolewire_domain::ports::ContextProvider;
use rolewire_domain::value_objects::ComponentContext;
use std::sync::Arc;

/// Context provider serving a fixed module context
#[derive(Debug)]
pub struct StaticContextProvider {
    context: Arc<ComponentContext>,
}

impl StaticContextProvider {
    /// Create a provider serving the given context
    pub fn new(context: ComponentContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }
}

#[async_trait]
impl ContextProvider for StaticContextProvider {
    fn provider_name(&self) -> &'static str {
        "static"
    }

    async fn context_for(&self, _component: &ComponentDescriptor) -> Result<Arc<ComponentContext>> {
        Ok(Arc::clone(&self.context))
    }
}

fn static_factory(
    config: &ProviderConfig,
) -> std::result::Result<Arc<dyn ContextProvider>, String> {
    let module = config
        .module
        .clone()
        .ok_or_else(|| "static context provider requires a module name".to_string())?;

    let mut context = ComponentContext::new(module);
    for (key, value) in &config.extra {
        context = context.with_attribute(key.clone(), value.clone());
    }

    Ok(Arc::new(StaticContextProvider::new(context)))
}

#[linkme::distributed_slice(CONTEXT_PROVIDERS)]
static STATIC_PROVIDER: ContextProviderEntry = ContextProviderEntry {
    name: "static",
    description: "Fixed module context from configuration",
    factory: static_factory,
};
