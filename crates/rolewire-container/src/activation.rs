//! Role value resolution and the activation/destruction passes
//!
//! Activation resolves one value per role the plan consumes, then runs
//! the synchronous injection pass under the instance's write lock:
//! initializers first, then field points, then setter points. Each
//! matching point receives a clone of the same resolved value, so the
//! field path and the setter path always agree on what a role produces
//! for a given component.

use crate::wiring::plan::WiringPlan;
use crate::wiring::point::Site;
use rolewire_domain::component::ComponentDescriptor;
use rolewire_domain::error::{Error, Result};
use rolewire_domain::ports::{ContextProvider, MetadataProvider, SessionIdProvider};
use rolewire_domain::value_objects::{
    ComponentContext, ComponentMetadata, ComponentName, Role, SessionId,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Values resolved for one component activation
///
/// The component name is always present; the other slots are filled
/// only when the plan consumes the corresponding role.
#[derive(Debug, Clone)]
pub struct RoleValueSet {
    name: ComponentName,
    metadata: Option<Arc<ComponentMetadata>>,
    context: Option<Arc<ComponentContext>>,
    session: Option<SessionId>,
}

impl RoleValueSet {
    /// The component's registered name
    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    pub(crate) fn metadata(&self, member: &str) -> Result<&Arc<ComponentMetadata>> {
        self.metadata.as_ref().ok_or_else(|| {
            Error::internal(format!("metadata was not resolved for member '{member}'"))
        })
    }

    pub(crate) fn context(&self, member: &str) -> Result<&Arc<ComponentContext>> {
        self.context.as_ref().ok_or_else(|| {
            Error::internal(format!("context was not resolved for member '{member}'"))
        })
    }

    pub(crate) fn session(&self, member: &str) -> Result<&SessionId> {
        self.session.as_ref().ok_or_else(|| {
            Error::internal(format!("session id was not resolved for member '{member}'"))
        })
    }
}

/// The three capability providers behind the contextual roles
///
/// Constructed once at bootstrap and shared by the registry. Which
/// providers sit behind the slots is a configuration concern; the
/// container only asks them for values, and only for roles a plan
/// actually consumes.
pub struct ContextValues {
    metadata: Arc<dyn MetadataProvider>,
    context: Arc<dyn ContextProvider>,
    session: Arc<dyn SessionIdProvider>,
}

impl ContextValues {
    /// Assemble the capability slots
    pub fn new(
        metadata: Arc<dyn MetadataProvider>,
        context: Arc<dyn ContextProvider>,
        session: Arc<dyn SessionIdProvider>,
    ) -> Self {
        Self {
            metadata,
            context,
            session,
        }
    }

    /// Name of the metadata provider, for diagnostics
    pub fn metadata_provider_name(&self) -> &'static str {
        self.metadata.provider_name()
    }

    /// Name of the context provider, for diagnostics
    pub fn context_provider_name(&self) -> &'static str {
        self.context.provider_name()
    }

    /// Name of the session-id provider, for diagnostics
    pub fn session_provider_name(&self) -> &'static str {
        self.session.provider_name()
    }

    /// Resolve a value for each of the given roles
    ///
    /// Resolution is lazy per role: providers for roles outside the set
    /// are never consulted, so a failing session provider does not
    /// block a component that never asks for a session id.
    pub async fn resolve(
        &self,
        component: &ComponentDescriptor,
        roles: &BTreeSet<Role>,
    ) -> Result<RoleValueSet> {
        let mut values = RoleValueSet {
            name: component.name.clone(),
            metadata: None,
            context: None,
            session: None,
        };

        for role in roles {
            match role {
                Role::ComponentName => {}
                Role::ComponentMetadata => {
                    values.metadata = Some(self.metadata.metadata_for(component).await?);
                }
                Role::ComponentContext => {
                    values.context = Some(self.context.context_for(component).await?);
                }
                Role::SessionId => {
                    values.session = Some(self.session.session_for(component).await?);
                }
            }
        }

        Ok(values)
    }
}

impl std::fmt::Debug for ContextValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextValues")
            .field("metadata", &self.metadata.provider_name())
            .field("context", &self.context.provider_name())
            .field("session", &self.session.provider_name())
            .finish()
    }
}

/// Run the injection pass for one instance
///
/// Initializer failures propagate unchanged and abort the pass before
/// any injection point fires.
pub(crate) fn run_activation<T>(
    plan: &WiringPlan<T>,
    name: &ComponentName,
    target: &mut T,
    values: &RoleValueSet,
) -> Result<()> {
    for hook in plan.initializers() {
        debug!(component = %name, hook = hook.name, "Running initializer");
        (hook.run)(target)?;
    }

    // Field pass before setter pass, matching the declared contract
    for point in plan.points().iter().filter(|p| p.site == Site::Field) {
        debug!(component = %name, member = point.member, role = %point.role(), "Injecting field");
        point.apply(target, values)?;
    }
    for point in plan.points().iter().filter(|p| p.site == Site::Setter) {
        debug!(component = %name, member = point.member, role = %point.role(), "Invoking setter");
        point.apply(target, values)?;
    }

    Ok(())
}

/// Run the destruction pass for one instance
///
/// Destroyer failures propagate unchanged; remaining hooks are not run.
pub(crate) fn run_destruction<T>(
    plan: &WiringPlan<T>,
    name: &ComponentName,
    target: &mut T,
) -> Result<()> {
    for hook in plan.destroyers() {
        debug!(component = %name, hook = hook.name, "Running destroyer");
        (hook.run)(target)?;
    }
    Ok(())
}
