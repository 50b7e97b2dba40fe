//! # rolewire-container
//!
//! The component container: per-type wiring plans, the activation pass
//! that injects role values, mandatory-binding validation, and the
//! registry that tracks definitions and live instances.
//!
//! ## Architecture
//!
//! ```text
//! WiringPlan<T> (per type)      Registry (per process)
//! ────────────────────────      ──────────────────────
//! injection points         →    define(name, declared, plan)
//! initializers/destroyers            ↓
//! required bindings              validate()        (definitions only)
//!                                    ↓
//!                                activate(name, instance)
//!                                    │  resolve role values (once per role)
//!                                    │  initializers → fields → setters
//!                                    ↓
//!                                get(name) / deactivate(name) / shutdown()
//! ```
//!
//! The registry is an explicit value constructed at bootstrap and passed
//! by reference; nothing in this crate is a process-wide global. The
//! linkme registries under [`ports`] hold provider *factories* collected
//! at compile time, resolved by name when a runtime is assembled.

/// Role value resolution and the activation/destruction passes
pub mod activation;

/// Compile-time provider registries
pub mod ports;

/// Component registry and lifecycle operations
pub mod registry;

/// Wiring plans - the per-type injection descriptor tables
pub mod wiring;

// Re-export the working surface
pub use activation::{ContextValues, RoleValueSet};
pub use registry::{Phase, Registry};
pub use wiring::{
    Applicator, InjectionPoint, LifecycleHook, RequiredBinding, Site, WiringPlan,
    WiringPlanBuilder,
};
