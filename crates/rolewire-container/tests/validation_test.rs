//! Mandatory-binding validation tests
//!
//! Validation is static: it inspects declared configuration against the
//! plan's required bindings, never live instances.

mod support;

use rolewire_container::WiringPlan;
use rolewire_domain::error::Error;
use rolewire_domain::value_objects::{BindingKind, DeclaredConfig};
use support::{failing_registry, stub_registry, Probe};

/// A required reference with no declared binding fails, naming the
/// property; with the binding present, validation passes
#[tokio::test]
async fn missing_required_reference_names_the_property() {
    let registry = stub_registry();
    let plan = WiringPlan::<Probe>::builder()
        .requires_reference("endpoint")
        .build();
    registry.define("bar", DeclaredConfig::new(), plan).unwrap();

    let error = registry.validate_one("bar").unwrap_err();
    match &error {
        Error::MissingBinding { property, kind } => {
            assert_eq!(property, "endpoint");
            assert_eq!(*kind, BindingKind::Reference);
        }
        other => panic!("expected missing binding, got {other:?}"),
    }
    assert!(error.to_string().contains("endpoint"));

    let registry = stub_registry();
    let plan = WiringPlan::<Probe>::builder()
        .requires_reference("endpoint")
        .build();
    let declared = DeclaredConfig::new().with_reference("endpoint", "gateway");
    registry.define("bar", declared, plan).unwrap();
    assert!(registry.validate_one("bar").is_ok());
}

/// Required properties use the property wording in the error
#[tokio::test]
async fn missing_required_property_uses_property_wording() {
    let registry = stub_registry();
    let plan = WiringPlan::<Probe>::builder()
        .requires_property("size")
        .build();
    registry.define("sized", DeclaredConfig::new(), plan).unwrap();

    let error = registry.validate_one("sized").unwrap_err();
    assert_eq!(error.to_string(), "Mandatory property: size not specified");
}

/// Factory-wide validation walks every definition
#[tokio::test]
async fn validate_walks_all_definitions() {
    let registry = stub_registry();

    let good = WiringPlan::<Probe>::builder()
        .requires_property("size")
        .build();
    registry
        .define("good", DeclaredConfig::new().with_value("size", 1), good)
        .unwrap();

    let bad = WiringPlan::<Probe>::builder()
        .requires_property("limit")
        .build();
    registry.define("bad", DeclaredConfig::new(), bad).unwrap();

    let error = registry.validate().unwrap_err();
    assert!(error.to_string().contains("limit"));
}

/// Validation needs no instances and touches no providers
#[tokio::test]
async fn validation_is_static() {
    // Failing providers never get in the way: validation reads
    // declared configuration only
    let registry = failing_registry();
    let plan = WiringPlan::<Probe>::builder()
        .requires_property("size")
        .build();
    registry
        .define("static", DeclaredConfig::new().with_value("size", 9), plan)
        .unwrap();

    assert!(registry.validate().is_ok());
    assert_eq!(registry.active_count(), 0);
}

/// Validating an unknown name is not-found
#[tokio::test]
async fn validating_unknown_component_is_not_found() {
    let registry = stub_registry();
    assert!(matches!(
        registry.validate_one("ghost"),
        Err(Error::NotFound { .. })
    ));
}
