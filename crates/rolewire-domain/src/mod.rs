//! # rolewire-domain
//!
//! Domain layer for rolewire: the component model, the closed set of
//! injection roles, declared configuration bindings, and the ports that
//! contextual value providers implement.
//!
//! This crate is pure: no I/O, no runtime, no container mechanics. The
//! container lives in `rolewire-container`, provider implementations in
//! `rolewire-infrastructure`.

/// Error handling types
pub mod error;

/// Component marker trait and descriptor
pub mod component;

/// Contextual value provider ports
pub mod ports;

/// Domain value objects
pub mod value_objects;

// Re-export commonly used types
pub use component::{Component, ComponentDescriptor};
pub use error::{Error, Result};
pub use value_objects::{
    BindingKind, BindingSource, ComponentContext, ComponentMetadata, ComponentName,
    DeclaredConfig, Role, RoleValue, SessionId,
};
