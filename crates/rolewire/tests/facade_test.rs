//! Facade smoke test: the public API end to end

use rolewire::{bootstrap, Applicator, AppConfig, Component, DeclaredConfig, WiringPlan};

#[derive(Debug, Default)]
struct WineService {
    id: Option<String>,
    name: Option<String>,
}

impl WineService {
    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

impl Component for WineService {}

/// Define, validate, activate, read back, deactivate - all through the
/// facade re-exports
#[tokio::test]
async fn wiring_a_component_through_the_facade() {
    let runtime = bootstrap(AppConfig::default()).expect("bootstrap failed");
    let registry = runtime.registry();

    let plan = WiringPlan::builder()
        .setter(
            "id",
            Applicator::name(|w: &mut WineService, v| w.set_id(v.to_string())),
        )
        .field(
            "name",
            Applicator::name(|w: &mut WineService, v| w.name = Some(v.to_string())),
        )
        .requires_property("grape")
        .build();

    let declared = DeclaredConfig::new().with_value("grape", "amarone");
    registry.define("wine-service", declared, plan).unwrap();
    registry.validate().unwrap();
    registry
        .activate("wine-service", WineService::default())
        .await
        .unwrap();

    {
        let handle = registry.get("wine-service").unwrap();
        let guard = handle.read().await;
        let wine = guard.downcast_ref::<WineService>().unwrap();
        assert_eq!(wine.id.as_deref(), Some("wine-service"));
        assert_eq!(wine.name.as_deref(), Some("wine-service"));
    }

    registry.deactivate("wine-service").await.unwrap();
    assert!(registry.get("wine-service").is_err());
}
