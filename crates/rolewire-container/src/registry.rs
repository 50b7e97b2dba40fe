//! Component registry and lifecycle operations
//!
//! The registry tracks definitions (name, declared configuration,
//! wiring plan) and live instances. It never constructs or drops
//! component values itself: callers hand it instances at activation,
//! and deactivation runs the destroyers on the instance before letting
//! go of it.
//!
//! Validation walks definitions only. It can run any time after
//! `define`, with or without live instances, mirroring factory-wide
//! post-processing.

use crate::activation::ContextValues;
use crate::wiring::erased::ErasedPlan;
use crate::wiring::plan::WiringPlan;
use dashmap::DashMap;
use rolewire_domain::component::{Component, ComponentDescriptor};
use rolewire_domain::error::{Error, Result};
use rolewire_domain::value_objects::{ComponentName, DeclaredConfig};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Shared handle to a live, type-erased component instance
pub type ComponentHandle = Arc<RwLock<dyn Component>>;

/// Where a named component currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Defined but not yet activated
    Defined,
    /// Activated and in service
    Active,
}

#[derive(Debug)]
struct Definition {
    name: ComponentName,
    declared: DeclaredConfig,
    plan: ErasedPlan,
}

impl Definition {
    fn descriptor(&self) -> ComponentDescriptor {
        ComponentDescriptor::new(self.name.clone(), self.plan.type_name(), &self.declared)
    }
}

/// The component registry
///
/// An explicit value: construct it at bootstrap and pass it by
/// reference. Instance writes during activation happen under the
/// instance's own write lock, so two threads never run the injection
/// pass for the same instance concurrently.
pub struct Registry {
    definitions: DashMap<String, Arc<Definition>>,
    instances: DashMap<String, ComponentHandle>,
    /// Definition order, for deterministic validation and reverse-order
    /// shutdown
    order: Mutex<Vec<ComponentName>>,
    values: Arc<ContextValues>,
}

impl Registry {
    /// Create a registry backed by the given capability providers
    pub fn new(values: ContextValues) -> Self {
        Self {
            definitions: DashMap::new(),
            instances: DashMap::new(),
            order: Mutex::new(Vec::new()),
            values: Arc::new(values),
        }
    }

    /// The capability providers this registry resolves role values with
    pub fn context_values(&self) -> &ContextValues {
        &self.values
    }

    /// Define a component: name, declared bindings, and the wiring plan
    /// for its type
    pub fn define<T: Component>(
        &self,
        name: impl Into<ComponentName>,
        declared: DeclaredConfig,
        plan: WiringPlan<T>,
    ) -> Result<()> {
        let name = name.into();
        if self.definitions.contains_key(name.as_str()) {
            return Err(Error::already_exists(name.as_str()));
        }

        let definition = Definition {
            name: name.clone(),
            declared,
            plan: ErasedPlan::from_plan(plan),
        };
        debug!(component = %name, type_name = definition.plan.type_name(), "Defined component");

        self.definitions
            .insert(name.as_str().to_string(), Arc::new(definition));
        self.order
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(name);
        Ok(())
    }

    /// Validate every definition's required bindings
    ///
    /// Static check: inspects declared configuration, never live
    /// instances. The first missing binding aborts with an error naming
    /// the property.
    pub fn validate(&self) -> Result<()> {
        let names = self.definition_order();
        for name in &names {
            self.validate_one(name.as_str())?;
        }
        debug!(count = names.len(), "Validated all component definitions");
        Ok(())
    }

    /// Validate a single definition's required bindings
    pub fn validate_one(&self, name: &str) -> Result<()> {
        let definition = self.definition(name)?;
        for required in definition.plan.required() {
            if !definition.declared.contains(&required.property) {
                warn!(
                    component = %definition.name,
                    property = %required.property,
                    "Missing mandatory binding"
                );
                return Err(Error::missing_binding(
                    required.property.clone(),
                    required.kind,
                ));
            }
        }
        Ok(())
    }

    /// Activate an instance under a defined name
    ///
    /// Resolves a value for each role the type's plan consumes, then
    /// runs initializers and the injection pass before the instance
    /// becomes reachable through [`Registry::get`]. Any failure leaves
    /// the component inactive.
    pub async fn activate<T: Component>(&self, name: &str, component: T) -> Result<()> {
        let definition = self.definition(name)?;
        if self.instances.contains_key(name) {
            return Err(Error::lifecycle(name, "component is already active"));
        }

        let values = self
            .values
            .resolve(&definition.descriptor(), definition.plan.roles())
            .await?;

        let handle: ComponentHandle = Arc::new(RwLock::new(component));
        {
            let mut guard = handle.write().await;
            definition.plan.activate(&definition.name, &mut *guard, &values)?;
        }

        self.instances.insert(name.to_string(), handle);
        info!(component = %definition.name, "Component activated");
        Ok(())
    }

    /// Get the handle of an active component
    pub fn get(&self, name: &str) -> Result<ComponentHandle> {
        self.instances
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::not_found(name))
    }

    /// Deactivate an active component
    ///
    /// Runs the type's destroyers exactly once and drops the registry's
    /// handle. Destroyer failures propagate; the component still leaves
    /// service.
    pub async fn deactivate(&self, name: &str) -> Result<()> {
        let definition = self.definition(name)?;
        let (_, handle) = self
            .instances
            .remove(name)
            .ok_or_else(|| Error::lifecycle(name, "component is not active"))?;

        let mut guard = handle.write().await;
        definition.plan.destroy(&definition.name, &mut *guard)?;
        info!(component = %definition.name, "Component deactivated");
        Ok(())
    }

    /// Deactivate every active component, in reverse definition order
    ///
    /// Failures are reported per component; one failing destroyer does
    /// not stop the rest from being torn down.
    pub async fn shutdown(&self) -> Vec<(ComponentName, Result<()>)> {
        let mut names = self.definition_order();
        names.reverse();

        let mut results = Vec::new();
        for name in names {
            if !self.instances.contains_key(name.as_str()) {
                continue;
            }
            let result = self.deactivate(name.as_str()).await;
            if let Err(error) = &result {
                warn!(component = %name, %error, "Destroyer failed during shutdown");
            }
            results.push((name, result));
        }
        results
    }

    /// Whether a definition exists under the given name
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// The lifecycle phase of a defined component, if any
    pub fn phase(&self, name: &str) -> Option<Phase> {
        if !self.definitions.contains_key(name) {
            return None;
        }
        if self.instances.contains_key(name) {
            Some(Phase::Active)
        } else {
            Some(Phase::Defined)
        }
    }

    /// All defined names, in definition order
    pub fn names(&self) -> Vec<ComponentName> {
        self.definition_order()
    }

    /// Number of definitions
    pub fn count(&self) -> usize {
        self.definitions.len()
    }

    /// Number of active instances
    pub fn active_count(&self) -> usize {
        self.instances.len()
    }

    fn definition(&self, name: &str) -> Result<Arc<Definition>> {
        // Clone the Arc out of the map so no shard lock is held across
        // await points
        self.definitions
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::not_found(name))
    }

    fn definition_order(&self) -> Vec<ComponentName> {
        self.order
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("definitions", &self.definitions.len())
            .field("active", &self.instances.len())
            .finish()
    }
}
