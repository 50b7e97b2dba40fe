//! Domain Value Objects
//!
//! Immutable value objects for the component model. Value objects are
//! defined by their attributes and can be compared for equality.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ComponentName`] | Unique name of a component within its registry |
//! | [`Role`] | One of the four injection roles |
//! | [`RoleValue`] | The value resolved for a role during activation |
//! | [`ComponentMetadata`] | Descriptive metadata served to components |
//! | [`ComponentContext`] | Module context served to components |
//! | [`SessionId`] | Session identifier served to components |
//! | [`DeclaredConfig`] | Named value bindings declared for a component |

/// Component identity, metadata, context, and session values
pub mod component;
/// Declared configuration bindings
pub mod declared;
/// Injection roles and role values
pub mod role;

pub use component::{ComponentContext, ComponentMetadata, ComponentName, SessionId};
pub use declared::{BindingKind, BindingSource, DeclaredConfig};
pub use role::{Role, RoleValue};
