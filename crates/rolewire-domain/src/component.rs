//! Component marker trait and descriptor

use crate::value_objects::{ComponentName, DeclaredConfig};
use downcast_rs::{impl_downcast, DowncastSync};
use std::fmt::Debug;

/// Marker trait for container-managed component instances
///
/// Components are arbitrary user types; the container stores them
/// type-erased and downcasts back to the concrete type when applying a
/// wiring plan or when a caller asks for typed access.
pub trait Component: DowncastSync + Debug {}
impl_downcast!(sync Component);

/// A read-only view of a component's definition, handed to contextual
/// value providers
///
/// Providers see the component's identity and its declared binding
/// names, never the live instance.
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    /// The component's registered name
    pub name: ComponentName,
    /// Rust type name of the component
    pub type_name: &'static str,
    /// Names of the declared bindings
    pub bindings: Vec<String>,
}

impl ComponentDescriptor {
    /// Build a descriptor from a name, type name, and declared configuration
    pub fn new(
        name: ComponentName,
        type_name: &'static str,
        declared: &DeclaredConfig,
    ) -> Self {
        Self {
            name,
            type_name,
            bindings: declared.names().map(str::to_string).collect(),
        }
    }
}
