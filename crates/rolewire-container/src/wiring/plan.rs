//! The wiring plan and its builder
//!
//! Built once per component type, reused for every instance. The
//! builder records members in declaration order; activation replays
//! initializers, then field points, then setter points, in that order.

use crate::wiring::point::{Applicator, InjectionPoint, Site};
use rolewire_domain::error::Result;
use rolewire_domain::value_objects::{BindingKind, Role};
use std::collections::BTreeSet;
use std::sync::Arc;

/// A named initializer or destroyer hook
pub struct LifecycleHook<T> {
    /// Hook name, for diagnostics
    pub name: &'static str,
    pub(crate) run: Arc<dyn Fn(&mut T) -> Result<()> + Send + Sync>,
}

impl<T> LifecycleHook<T> {
    fn new(name: &'static str, run: impl Fn(&mut T) -> Result<()> + Send + Sync + 'static) -> Self {
        Self {
            name,
            run: Arc::new(run),
        }
    }
}

impl<T> Clone for LifecycleHook<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> std::fmt::Debug for LifecycleHook<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LifecycleHook").field(&self.name).finish()
    }
}

/// A property that must have a binding in the component's declared
/// configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredBinding {
    /// Property name the binding must appear under
    pub property: String,
    /// Whether the member was marked as a property or a reference
    pub kind: BindingKind,
}

/// Per-type injection descriptor table
///
/// Maps each role-carrying member of `T` to an applicator, and records
/// the type's lifecycle hooks and required bindings.
#[derive(Debug)]
pub struct WiringPlan<T> {
    points: Vec<InjectionPoint<T>>,
    initializers: Vec<LifecycleHook<T>>,
    destroyers: Vec<LifecycleHook<T>>,
    required: Vec<RequiredBinding>,
}

impl<T> WiringPlan<T> {
    /// Start building a plan
    pub fn builder() -> WiringPlanBuilder<T> {
        WiringPlanBuilder {
            plan: WiringPlan {
                points: Vec::new(),
                initializers: Vec::new(),
                destroyers: Vec::new(),
                required: Vec::new(),
            },
        }
    }

    /// An empty plan: no points, no hooks, no required bindings
    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// All injection points, in declaration order
    pub fn points(&self) -> &[InjectionPoint<T>] {
        &self.points
    }

    /// Initializer hooks, in declaration order
    pub fn initializers(&self) -> &[LifecycleHook<T>] {
        &self.initializers
    }

    /// Destroyer hooks, in declaration order
    pub fn destroyers(&self) -> &[LifecycleHook<T>] {
        &self.destroyers
    }

    /// Required bindings, in declaration order
    pub fn required(&self) -> &[RequiredBinding] {
        &self.required
    }

    /// The set of roles this plan consumes
    ///
    /// Activation resolves values for exactly these roles; capability
    /// providers for roles outside the set are never consulted.
    pub fn roles(&self) -> BTreeSet<Role> {
        self.points.iter().map(InjectionPoint::role).collect()
    }
}

impl<T> Clone for WiringPlan<T> {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
            initializers: self.initializers.clone(),
            destroyers: self.destroyers.clone(),
            required: self.required.clone(),
        }
    }
}

/// Builder for [`WiringPlan`]
#[derive(Debug)]
pub struct WiringPlanBuilder<T> {
    plan: WiringPlan<T>,
}

impl<T> WiringPlanBuilder<T> {
    /// Declare a field-site injection point
    pub fn field(mut self, member: &'static str, applicator: Applicator<T>) -> Self {
        self.plan.points.push(InjectionPoint {
            member,
            site: Site::Field,
            applicator,
        });
        self
    }

    /// Declare a setter-site injection point
    pub fn setter(mut self, member: &'static str, applicator: Applicator<T>) -> Self {
        self.plan.points.push(InjectionPoint {
            member,
            site: Site::Setter,
            applicator,
        });
        self
    }

    /// Declare an initializer hook, run before any injection point fires
    pub fn initializer(
        mut self,
        name: &'static str,
        run: impl Fn(&mut T) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.plan.initializers.push(LifecycleHook::new(name, run));
        self
    }

    /// Declare a destroyer hook, run when the component leaves service
    pub fn destroyer(
        mut self,
        name: &'static str,
        run: impl Fn(&mut T) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.plan.destroyers.push(LifecycleHook::new(name, run));
        self
    }

    /// Require a property binding in the declared configuration
    pub fn requires_property(mut self, property: impl Into<String>) -> Self {
        self.plan.required.push(RequiredBinding {
            property: property.into(),
            kind: BindingKind::Property,
        });
        self
    }

    /// Require a reference binding in the declared configuration
    pub fn requires_reference(mut self, property: impl Into<String>) -> Self {
        self.plan.required.push(RequiredBinding {
            property: property.into(),
            kind: BindingKind::Reference,
        });
        self
    }

    /// Fold an embedded struct's plan into this one
    ///
    /// Every point, hook, and required binding of the base plan is
    /// re-projected through `project`, so a role declared on an embedded
    /// struct is honored even when the outer type declares nothing of
    /// its own.
    pub fn embed<B: 'static>(mut self, project: fn(&mut T) -> &mut B, base: &WiringPlan<B>) -> Self
    where
        T: 'static,
    {
        for point in &base.points {
            let applicator = match &point.applicator {
                Applicator::Name(f) => {
                    let f = Arc::clone(f);
                    Applicator::name(move |t: &mut T, v| f(project(t), v))
                }
                Applicator::Metadata(f) => {
                    let f = Arc::clone(f);
                    Applicator::metadata(move |t: &mut T, v| f(project(t), v))
                }
                Applicator::Context(f) => {
                    let f = Arc::clone(f);
                    Applicator::context(move |t: &mut T, v| f(project(t), v))
                }
                Applicator::Session(f) => {
                    let f = Arc::clone(f);
                    Applicator::session(move |t: &mut T, v| f(project(t), v))
                }
            };
            self.plan.points.push(InjectionPoint {
                member: point.member,
                site: point.site,
                applicator,
            });
        }
        for hook in &base.initializers {
            let run = Arc::clone(&hook.run);
            self.plan
                .initializers
                .push(LifecycleHook::new(hook.name, move |t: &mut T| {
                    run(project(t))
                }));
        }
        for hook in &base.destroyers {
            let run = Arc::clone(&hook.run);
            self.plan
                .destroyers
                .push(LifecycleHook::new(hook.name, move |t: &mut T| {
                    run(project(t))
                }));
        }
        self.plan.required.extend(base.required.iter().cloned());
        self
    }

    /// Finish the plan
    pub fn build(self) -> WiringPlan<T> {
        self.plan
    }
}
