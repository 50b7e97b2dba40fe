//! Runtime assembly
//!
//! Resolvers turn configuration into concrete capability providers via
//! the linkme registries; bootstrap wires the resolved providers and an
//! empty component registry into a [`ContainerRuntime`].

/// Bootstrap - assemble a runtime from configuration
pub mod bootstrap;
/// Per-capability provider resolvers
pub mod resolvers;

pub use bootstrap::{bootstrap, ContainerRuntime};
pub use resolvers::{ContextProviderResolver, MetadataProviderResolver, SessionProviderResolver};
