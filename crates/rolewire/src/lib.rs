//! # rolewire
//!
//! Role-driven component wiring for container-managed components.
//!
//! A component type declares a [`container::WiringPlan`]: which members
//! receive the component's registered name, its metadata, the module
//! context, or a session id, plus initializer/destroyer hooks and the
//! bindings its declared configuration must contain. The
//! [`container::Registry`] reuses that plan for every instance of the
//! type: it validates required bindings against declared configuration,
//! runs initializers and the injection pass at activation, and runs
//! destroyers at deactivation.
//!
//! ## Example
//!
//! ```ignore
//! use rolewire::container::{Applicator, Registry, WiringPlan};
//! use rolewire::domain::{Component, ComponentName, DeclaredConfig};
//!
//! #[derive(Debug, Default)]
//! struct Greeter {
//!     name: Option<ComponentName>,
//! }
//! impl Component for Greeter {}
//!
//! let plan = WiringPlan::builder()
//!     .field("name", Applicator::name(|g: &mut Greeter, v| g.name = Some(v)))
//!     .build();
//!
//! registry.define("greeter", DeclaredConfig::new(), plan)?;
//! registry.activate("greeter", Greeter::default()).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - component model, roles, declared configuration, ports
//! - `container` - wiring plans, injection pass, registry, validation
//! - `infrastructure` - configuration, logging, providers, bootstrap

/// Domain layer - component model, roles, and provider ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use rolewire_domain::*;
}

/// Container layer - wiring plans, injection, registry, validation
///
/// Re-exports from the container crate for convenience
pub mod container {
    pub use rolewire_container::*;
}

/// Infrastructure layer - config, logging, providers, and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use rolewire_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use container::{Applicator, ContextValues, Registry, Site, WiringPlan};
pub use domain::{
    Component, ComponentName, DeclaredConfig, Error, Result, Role,
};
pub use infrastructure::{bootstrap, AppConfig, ConfigLoader, ContainerRuntime};
