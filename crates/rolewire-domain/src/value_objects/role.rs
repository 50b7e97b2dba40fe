//! Injection roles and role values
//!
//! The four roles are a closed set. Each role resolves to exactly one
//! value per component activation; every member carrying the role
//! receives a clone of that value, whether the member is a field or a
//! setter.

use crate::value_objects::component::{
    ComponentContext, ComponentMetadata, ComponentName, SessionId,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The closed set of injection roles a member can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// The component's registered name
    ComponentName,
    /// Descriptive metadata about the component
    ComponentMetadata,
    /// The enclosing module context
    ComponentContext,
    /// The current session identifier
    SessionId,
}

impl Role {
    /// Stable string form of the role
    pub fn as_str(self) -> &'static str {
        match self {
            Role::ComponentName => "component-name",
            Role::ComponentMetadata => "component-metadata",
            Role::ComponentContext => "component-context",
            Role::SessionId => "session-id",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value resolved for a role during a component activation
#[derive(Debug, Clone)]
pub enum RoleValue {
    /// Value for [`Role::ComponentName`]
    Name(ComponentName),
    /// Value for [`Role::ComponentMetadata`]
    Metadata(Arc<ComponentMetadata>),
    /// Value for [`Role::ComponentContext`]
    Context(Arc<ComponentContext>),
    /// Value for [`Role::SessionId`]
    Session(SessionId),
}

impl RoleValue {
    /// The role this value satisfies
    pub fn role(&self) -> Role {
        match self {
            RoleValue::Name(_) => Role::ComponentName,
            RoleValue::Metadata(_) => Role::ComponentMetadata,
            RoleValue::Context(_) => Role::ComponentContext,
            RoleValue::Session(_) => Role::SessionId,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_string_forms_are_stable() {
        assert_eq!(Role::ComponentName.as_str(), "component-name");
        assert_eq!(Role::ComponentMetadata.as_str(), "component-metadata");
        assert_eq!(Role::ComponentContext.as_str(), "component-context");
        assert_eq!(Role::SessionId.as_str(), "session-id");
    }

    #[test]
    fn role_value_reports_its_role() {
        let value = RoleValue::Name(ComponentName::from("a"));
        assert_eq!(value.role(), Role::ComponentName);

        let value = RoleValue::Session(SessionId::new("s-1"));
        assert_eq!(value.role(), Role::SessionId);
    }
}
