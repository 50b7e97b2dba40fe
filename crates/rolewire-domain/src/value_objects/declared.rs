//! Declared configuration bindings
//!
//! A component's declared configuration is supplied by the registry
//! before injection runs. The injector only checks binding presence for
//! mandatory-dependency validation; it never writes bindings.

use crate::value_objects::component::ComponentName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Whether a required member was marked as a plain property or a
/// reference to another component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    /// A plain configuration property
    Property,
    /// A reference to another component
    Reference,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKind::Property => f.write_str("property"),
            BindingKind::Reference => f.write_str("reference"),
        }
    }
}

/// The source of a declared binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingSource {
    /// A literal configuration value
    Value(serde_json::Value),
    /// A reference to another component by name
    Reference(ComponentName),
}

/// Named value bindings declared for a component
///
/// Read-only from the injector's point of view: validation queries
/// bindings by name, nothing here is mutated during activation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclaredConfig {
    bindings: BTreeMap<String, BindingSource>,
}

impl DeclaredConfig {
    /// Create an empty declared configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a literal value binding
    pub fn with_value(
        mut self,
        property: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.bindings
            .insert(property.into(), BindingSource::Value(value.into()));
        self
    }

    /// Declare a reference binding to another component
    pub fn with_reference(
        mut self,
        property: impl Into<String>,
        target: impl Into<ComponentName>,
    ) -> Self {
        self.bindings
            .insert(property.into(), BindingSource::Reference(target.into()));
        self
    }

    /// Whether a binding exists under the given property name
    pub fn contains(&self, property: &str) -> bool {
        self.bindings.contains_key(property)
    }

    /// Look up a binding by property name
    pub fn get(&self, property: &str) -> Option<&BindingSource> {
        self.bindings.get(property)
    }

    /// Names of all declared bindings
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Number of declared bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no bindings are declared
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
