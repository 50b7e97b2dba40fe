//! Error handling types

use crate::value_objects::{BindingKind, Role};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rolewire
///
/// Every failure aborts the current component's processing. There is no
/// local recovery, no retry, and no recoverable/fatal distinction.
#[derive(Error, Debug)]
pub enum Error {
    /// A required property or reference has no binding in the declared
    /// configuration
    #[error("Mandatory {kind}: {property} not specified")]
    MissingBinding {
        /// Name of the property whose binding is missing
        property: String,
        /// Whether the member was marked as a property or a reference
        kind: BindingKind,
    },

    /// A contextual value was requested but no real provider is wired
    #[error("No provider wired for capability: {capability}")]
    UnimplementedCapability {
        /// The role whose value could not be produced
        capability: Role,
    },

    /// Component not registered under the given name
    #[error("Component not found: {component}")]
    NotFound {
        /// The name that was looked up
        component: String,
    },

    /// A component is already registered under the given name
    #[error("Component already registered: {component}")]
    AlreadyExists {
        /// The conflicting name
        component: String,
    },

    /// A lifecycle operation was attempted in the wrong phase
    #[error("Lifecycle error for component '{component}': {message}")]
    Lifecycle {
        /// The component the operation targeted
        component: String,
        /// Description of the phase violation
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a missing-binding error for a required property or reference
    pub fn missing_binding<S: Into<String>>(property: S, kind: BindingKind) -> Self {
        Self::MissingBinding {
            property: property.into(),
            kind,
        }
    }

    /// Create an unimplemented-capability error for a role
    pub fn unimplemented(capability: Role) -> Self {
        Self::UnimplementedCapability { capability }
    }

    /// Create a not-found error
    pub fn not_found<S: Into<String>>(component: S) -> Self {
        Self::NotFound {
            component: component.into(),
        }
    }

    /// Create an already-exists error
    pub fn already_exists<S: Into<String>>(component: S) -> Self {
        Self::AlreadyExists {
            component: component.into(),
        }
    }

    /// Create a lifecycle phase error
    pub fn lifecycle<C: Into<String>, M: Into<String>>(component: C, message: M) -> Self {
        Self::Lifecycle {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binding_names_the_property() {
        let err = Error::missing_binding("endpoint", BindingKind::Reference);
        assert_eq!(err.to_string(), "Mandatory reference: endpoint not specified");

        let err = Error::missing_binding("size", BindingKind::Property);
        assert_eq!(err.to_string(), "Mandatory property: size not specified");
    }

    #[test]
    fn unimplemented_capability_names_the_role() {
        let err = Error::unimplemented(Role::SessionId);
        assert!(err.to_string().contains("session-id"));
    }
}
