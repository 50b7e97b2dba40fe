//! Component identity and the contextual values injected into components

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Unique name of a component within its registry
///
/// Assigned at definition time and injected into members carrying the
/// component-name role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    /// Create a new component name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComponentName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Descriptive metadata about a component, served by a metadata provider
///
/// The component-metadata role resolves to one of these per activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    /// The component's registered name
    pub name: ComponentName,
    /// Rust type name of the component
    pub type_name: String,
    /// Names of the bindings declared for the component
    pub bindings: Vec<String>,
}

/// Module context served by a context provider
///
/// Carries the enclosing module's name plus free-form attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentContext {
    /// Name of the enclosing module
    pub module: String,
    /// Free-form context attributes
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ComponentContext {
    /// Create a context for the given module name
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add a context attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Session identifier served by a session-id provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_name_round_trips() {
        let name = ComponentName::from("wine-service");
        assert_eq!(name.as_str(), "wine-service");
        assert_eq!(name.to_string(), "wine-service");
    }

    #[test]
    fn context_attributes_accumulate() {
        let ctx = ComponentContext::new("orders")
            .with_attribute("region", "eu")
            .with_attribute("tier", "gold");
        assert_eq!(ctx.module, "orders");
        assert_eq!(ctx.attributes.len(), 2);
        assert_eq!(ctx.attributes["region"], "eu");
    }
}
