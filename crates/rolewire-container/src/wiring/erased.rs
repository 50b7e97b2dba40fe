//! Type-erased plan wrapper
//!
//! The registry stores components as `dyn Component`; this wrapper
//! closes a typed [`WiringPlan`] over its concrete type so the registry
//! can run the activation and destruction passes without knowing `T`.

use crate::activation::{run_activation, run_destruction, RoleValueSet};
use crate::wiring::plan::{RequiredBinding, WiringPlan};
use rolewire_domain::component::Component;
use rolewire_domain::error::{Error, Result};
use rolewire_domain::value_objects::{ComponentName, Role};
use std::collections::BTreeSet;
use std::sync::Arc;

type ActivateFn = dyn Fn(&ComponentName, &mut dyn Component, &RoleValueSet) -> Result<()>
    + Send
    + Sync;
type DestroyFn = dyn Fn(&ComponentName, &mut dyn Component) -> Result<()> + Send + Sync;

pub(crate) struct ErasedPlan {
    type_name: &'static str,
    roles: BTreeSet<Role>,
    required: Vec<RequiredBinding>,
    activate: Arc<ActivateFn>,
    destroy: Arc<DestroyFn>,
}

impl ErasedPlan {
    pub(crate) fn from_plan<T: Component>(plan: WiringPlan<T>) -> Self {
        let type_name = std::any::type_name::<T>();
        let roles = plan.roles();
        let required = plan.required().to_vec();
        let plan = Arc::new(plan);

        let activate = {
            let plan = Arc::clone(&plan);
            Arc::new(
                move |name: &ComponentName, target: &mut dyn Component, values: &RoleValueSet| {
                    let target = downcast_target::<T>(name, target)?;
                    run_activation(&plan, name, target, values)
                },
            ) as Arc<ActivateFn>
        };

        let destroy = Arc::new(
            move |name: &ComponentName, target: &mut dyn Component| {
                let target = downcast_target::<T>(name, target)?;
                run_destruction(&plan, name, target)
            },
        ) as Arc<DestroyFn>;

        Self {
            type_name,
            roles,
            required,
            activate,
            destroy,
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }

    pub(crate) fn required(&self) -> &[RequiredBinding] {
        &self.required
    }

    pub(crate) fn activate(
        &self,
        name: &ComponentName,
        target: &mut dyn Component,
        values: &RoleValueSet,
    ) -> Result<()> {
        (self.activate)(name, target, values)
    }

    pub(crate) fn destroy(&self, name: &ComponentName, target: &mut dyn Component) -> Result<()> {
        (self.destroy)(name, target)
    }
}

impl std::fmt::Debug for ErasedPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErasedPlan")
            .field("type_name", &self.type_name)
            .field("roles", &self.roles)
            .field("required", &self.required.len())
            .finish()
    }
}

fn downcast_target<'a, T: Component>(
    name: &ComponentName,
    target: &'a mut dyn Component,
) -> Result<&'a mut T> {
    let expected = std::any::type_name::<T>();
    target.downcast_mut::<T>().ok_or_else(|| {
        Error::internal(format!(
            "component '{name}' is not a {expected}"
        ))
    })
}
