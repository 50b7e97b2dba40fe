//! Injection points and role-typed applicators
//!
//! An injection point pairs a member with the role it carries and a
//! closure that writes the resolved value into that member. Points on
//! the same member are independent: a member listed under two roles
//! receives two writes, and a role present on both a field and a setter
//! writes twice. Nothing is deduplicated.

use crate::activation::RoleValueSet;
use rolewire_domain::error::Result;
use rolewire_domain::value_objects::{
    ComponentContext, ComponentMetadata, ComponentName, Role, SessionId,
};
use std::sync::Arc;

/// Where a value lands: written into state directly, or handed to a
/// write accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    /// Direct state write, bypassing accessors
    Field,
    /// Write-accessor invocation
    Setter,
}

/// A role-typed write closure for a component type
///
/// The variant fixes which role the member carries; the injector hands
/// the closure a clone of the value resolved for that role.
pub enum Applicator<T> {
    /// Member receives the component's registered name
    Name(Arc<dyn Fn(&mut T, ComponentName) + Send + Sync>),
    /// Member receives the component metadata
    Metadata(Arc<dyn Fn(&mut T, Arc<ComponentMetadata>) + Send + Sync>),
    /// Member receives the module context
    Context(Arc<dyn Fn(&mut T, Arc<ComponentContext>) + Send + Sync>),
    /// Member receives the session id
    Session(Arc<dyn Fn(&mut T, SessionId) + Send + Sync>),
}

impl<T> Applicator<T> {
    /// Applicator for the component-name role
    pub fn name(f: impl Fn(&mut T, ComponentName) + Send + Sync + 'static) -> Self {
        Self::Name(Arc::new(f))
    }

    /// Applicator for the component-metadata role
    pub fn metadata(f: impl Fn(&mut T, Arc<ComponentMetadata>) + Send + Sync + 'static) -> Self {
        Self::Metadata(Arc::new(f))
    }

    /// Applicator for the component-context role
    pub fn context(f: impl Fn(&mut T, Arc<ComponentContext>) + Send + Sync + 'static) -> Self {
        Self::Context(Arc::new(f))
    }

    /// Applicator for the session-id role
    pub fn session(f: impl Fn(&mut T, SessionId) + Send + Sync + 'static) -> Self {
        Self::Session(Arc::new(f))
    }

    /// The role this applicator consumes
    pub fn role(&self) -> Role {
        match self {
            Applicator::Name(_) => Role::ComponentName,
            Applicator::Metadata(_) => Role::ComponentMetadata,
            Applicator::Context(_) => Role::ComponentContext,
            Applicator::Session(_) => Role::SessionId,
        }
    }
}

impl<T> Clone for Applicator<T> {
    fn clone(&self) -> Self {
        match self {
            Applicator::Name(f) => Applicator::Name(Arc::clone(f)),
            Applicator::Metadata(f) => Applicator::Metadata(Arc::clone(f)),
            Applicator::Context(f) => Applicator::Context(Arc::clone(f)),
            Applicator::Session(f) => Applicator::Session(Arc::clone(f)),
        }
    }
}

impl<T> std::fmt::Debug for Applicator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Applicator").field(&self.role()).finish()
    }
}

/// One member of a component type together with the role it carries
pub struct InjectionPoint<T> {
    /// Member name, for diagnostics
    pub member: &'static str,
    /// Field or setter site
    pub site: Site,
    pub(crate) applicator: Applicator<T>,
}

impl<T> Clone for InjectionPoint<T> {
    fn clone(&self) -> Self {
        Self {
            member: self.member,
            site: self.site,
            applicator: self.applicator.clone(),
        }
    }
}

impl<T> std::fmt::Debug for InjectionPoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectionPoint")
            .field("member", &self.member)
            .field("site", &self.site)
            .field("role", &self.role())
            .finish()
    }
}

impl<T> InjectionPoint<T> {
    /// The role this point consumes
    pub fn role(&self) -> Role {
        self.applicator.role()
    }

    /// Write the resolved value for this point's role into the member
    pub(crate) fn apply(&self, target: &mut T, values: &RoleValueSet) -> Result<()> {
        match &self.applicator {
            Applicator::Name(f) => f(target, values.name().clone()),
            Applicator::Metadata(f) => f(target, Arc::clone(values.metadata(self.member)?)),
            Applicator::Context(f) => f(target, Arc::clone(values.context(self.member)?)),
            Applicator::Session(f) => f(target, values.session(self.member)?.clone()),
        }
        Ok(())
    }
}
