//! Registry operation tests: definitions, phases, typed access

mod support;

use rolewire_container::{Applicator, Phase, WiringPlan};
use rolewire_domain::component::Component;
use rolewire_domain::error::Error;
use rolewire_domain::value_objects::DeclaredConfig;
use support::{stub_registry, Probe};

/// Component with an accessor-style name, mirroring a property write
#[derive(Debug, Default)]
struct Foo {
    name: Option<String>,
}

impl Foo {
    fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Component for Foo {}

/// Registering `Foo` under "bar" and reading the name back through its
/// accessor returns "bar"
#[tokio::test]
async fn setter_injected_name_reads_back_through_accessor() {
    let registry = stub_registry();
    let plan = WiringPlan::builder()
        .setter(
            "name",
            Applicator::name(|f: &mut Foo, v| f.set_name(v.to_string())),
        )
        .build();

    registry.define("bar", DeclaredConfig::new(), plan).unwrap();
    registry.activate("bar", Foo::default()).await.unwrap();

    let handle = registry.get("bar").unwrap();
    let guard = handle.read().await;
    let foo = guard.downcast_ref::<Foo>().unwrap();
    assert_eq!(foo.name(), Some("bar"));
}

/// Defining the same name twice is rejected
#[test]
fn duplicate_definition_is_rejected() {
    let registry = stub_registry();
    registry
        .define("dup", DeclaredConfig::new(), WiringPlan::<Probe>::empty())
        .unwrap();

    let result = registry.define("dup", DeclaredConfig::new(), WiringPlan::<Probe>::empty());
    assert!(matches!(result, Err(Error::AlreadyExists { .. })));
}

/// Looking up a name with no live instance is not-found
#[test]
fn get_without_activation_is_not_found() {
    let registry = stub_registry();
    registry
        .define("defined-only", DeclaredConfig::new(), WiringPlan::<Probe>::empty())
        .unwrap();
    assert!(matches!(
        registry.get("defined-only"),
        Err(Error::NotFound { .. })
    ));
}

/// Phases track define → activate → deactivate
#[tokio::test]
async fn phase_follows_the_lifecycle() {
    let registry = stub_registry();
    assert_eq!(registry.phase("c"), None);

    registry
        .define("c", DeclaredConfig::new(), WiringPlan::<Probe>::empty())
        .unwrap();
    assert_eq!(registry.phase("c"), Some(Phase::Defined));

    registry.activate("c", Probe::default()).await.unwrap();
    assert_eq!(registry.phase("c"), Some(Phase::Active));

    registry.deactivate("c").await.unwrap();
    assert_eq!(registry.phase("c"), Some(Phase::Defined));
}

/// Names come back in definition order; counts track both maps
#[tokio::test]
async fn names_and_counts_reflect_definitions_and_instances() {
    let registry = stub_registry();
    for name in ["one", "two", "three"] {
        registry
            .define(name, DeclaredConfig::new(), WiringPlan::<Probe>::empty())
            .unwrap();
    }
    registry.activate("two", Probe::default()).await.unwrap();

    let names: Vec<String> = registry.names().iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["one", "two", "three"]);
    assert_eq!(registry.count(), 3);
    assert_eq!(registry.active_count(), 1);
    assert!(registry.contains("one"));
    assert!(!registry.contains("four"));
}

/// Activating an instance of the wrong type is an internal error
#[tokio::test]
async fn activating_wrong_type_is_an_internal_error() {
    let registry = stub_registry();
    let plan = WiringPlan::<Foo>::builder()
        .setter(
            "name",
            Applicator::name(|f: &mut Foo, v| f.set_name(v.to_string())),
        )
        .build();
    registry.define("typed", DeclaredConfig::new(), plan).unwrap();

    let result = registry.activate("typed", Probe::default()).await;
    assert!(matches!(result, Err(Error::Internal { .. })));
}
