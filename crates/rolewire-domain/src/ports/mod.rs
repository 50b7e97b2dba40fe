//! Contextual Value Provider Ports
//!
//! One port per capability slot. The container resolves a value through
//! these ports only when a component's wiring plan actually carries the
//! corresponding role; a component that never asks for a session id
//! never touches the session provider.
//!
//! Default implementations in the infrastructure layer fail with an
//! unimplemented-capability error; real providers are selected by name
//! through configuration.

/// Module context provider port
pub mod context;
/// Component metadata provider port
pub mod metadata;
/// Session identifier provider port
pub mod session;

pub use context::ContextProvider;
pub use metadata::MetadataProvider;
pub use session::SessionIdProvider;
