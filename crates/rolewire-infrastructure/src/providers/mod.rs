//! Built-in context provider implementations
//!
//! Each provider implements a port (trait) defined in `rolewire-domain`
//! and registers itself in the matching linkme registry.
//!
//! | Capability | Port | Implementations |
//! |------------|------|-----------------|
//! | Metadata | `MetadataProvider` | Manifest, Unimplemented |
//! | Context | `ContextProvider` | Static, Unimplemented |
//! | Session | `SessionIdProvider` | Uuid, Unimplemented |
//!
//! The `unimplemented` providers are the default wiring: they fail with
//! an unimplemented-capability error when a component actually asks for
//! the value, matching the behavior of an unwired host container.

/// Metadata assembled from the component's own definition
pub mod manifest;
/// Module context fixed at bootstrap
pub mod static_context;
/// Always-failing defaults for all three capabilities
pub mod unimplemented;
/// Random session identifiers
pub mod uuid_session;

pub use manifest::ManifestMetadataProvider;
pub use static_context::StaticContextProvider;
pub use unimplemented::{
    UnimplementedContextProvider, UnimplementedMetadataProvider, UnimplementedSessionProvider,
};
pub use uuid_session::UuidSessionProvider;
