//! Bootstrap and provider resolution tests
//!
//! These exercise the linkme registries end to end: configuration names
//! a provider, the resolver finds its factory, and the assembled
//! runtime serves role values through it.

use rolewire_container::ports::registry::{
    list_context_providers, list_metadata_providers, list_session_providers,
};
use rolewire_container::{Applicator, WiringPlan};
use rolewire_domain::component::Component;
use rolewire_domain::error::Error;
use rolewire_domain::value_objects::{ComponentContext, ComponentMetadata, DeclaredConfig, SessionId};
use rolewire_infrastructure::config::AppConfig;
use rolewire_infrastructure::di::bootstrap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Subject {
    metadata: Option<Arc<ComponentMetadata>>,
    context: Option<Arc<ComponentContext>>,
    session: Option<SessionId>,
}

impl Component for Subject {}

fn real_provider_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.container.module = "orders".to_string();
    config.providers.metadata.provider = "manifest".to_string();
    config.providers.context.provider = "static".to_string();
    config.providers.session.provider = "uuid".to_string();
    config
}

/// The default configuration bootstraps with the always-failing
/// providers in every slot
#[test]
fn bootstrap_defaults_to_unimplemented_providers() {
    let runtime = bootstrap(AppConfig::default()).expect("bootstrap failed");
    let values = runtime.registry().context_values();

    assert_eq!(values.metadata_provider_name(), "unimplemented");
    assert_eq!(values.context_provider_name(), "unimplemented");
    assert_eq!(values.session_provider_name(), "unimplemented");
}

/// Every built-in provider shows up in its registry listing
#[test]
fn built_in_providers_are_registered() {
    let metadata: Vec<&str> = list_metadata_providers().iter().map(|(n, _)| *n).collect();
    assert!(metadata.contains(&"unimplemented"));
    assert!(metadata.contains(&"manifest"));

    let context: Vec<&str> = list_context_providers().iter().map(|(n, _)| *n).collect();
    assert!(context.contains(&"unimplemented"));
    assert!(context.contains(&"static"));

    let session: Vec<&str> = list_session_providers().iter().map(|(n, _)| *n).collect();
    assert!(session.contains(&"unimplemented"));
    assert!(session.contains(&"uuid"));
}

/// An unknown provider name is a configuration error naming the
/// capability
#[test]
fn unknown_provider_name_is_a_configuration_error() {
    let mut config = AppConfig::default();
    config.providers.metadata.provider = "nonexistent".to_string();

    let error = bootstrap(config).unwrap_err();
    match &error {
        Error::Configuration { message, .. } => {
            assert!(message.starts_with("Metadata:"), "unexpected: {message}");
            assert!(message.contains("nonexistent"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

/// Real providers serve role values through an assembled runtime
#[tokio::test]
async fn configured_real_providers_serve_role_values() {
    let runtime = bootstrap(real_provider_config()).expect("bootstrap failed");
    let registry = runtime.registry();

    let plan = WiringPlan::builder()
        .field(
            "metadata",
            Applicator::metadata(|s: &mut Subject, v| s.metadata = Some(v)),
        )
        .field(
            "context",
            Applicator::context(|s: &mut Subject, v| s.context = Some(v)),
        )
        .field(
            "session",
            Applicator::session(|s: &mut Subject, v| s.session = Some(v)),
        )
        .build();

    let declared = DeclaredConfig::new().with_value("size", 5);
    registry.define("subject", declared, plan).unwrap();
    registry.activate("subject", Subject::default()).await.unwrap();

    let handle = registry.get("subject").unwrap();
    let guard = handle.read().await;
    let subject = guard.downcast_ref::<Subject>().unwrap();

    let metadata = subject.metadata.as_ref().unwrap();
    assert_eq!(metadata.name.as_str(), "subject");
    assert_eq!(metadata.bindings, vec!["size".to_string()]);

    assert_eq!(subject.context.as_ref().unwrap().module, "orders");
    assert!(!subject.session.as_ref().unwrap().as_str().is_empty());
}

/// With the default wiring, a component that consumes a contextual role
/// fails activation with an unimplemented-capability error
#[tokio::test]
async fn default_wiring_preserves_the_unimplemented_failure() {
    let runtime = bootstrap(AppConfig::default()).expect("bootstrap failed");
    let registry = runtime.registry();

    let plan = WiringPlan::builder()
        .field(
            "session",
            Applicator::session(|s: &mut Subject, v| s.session = Some(v)),
        )
        .build();
    registry.define("needy", DeclaredConfig::new(), plan).unwrap();

    let result = registry.activate("needy", Subject::default()).await;
    assert!(matches!(
        result,
        Err(Error::UnimplementedCapability { .. })
    ));
}

/// Static context providers pick up extra attributes from the selection
#[tokio::test]
async fn static_context_carries_extra_attributes() {
    let mut config = real_provider_config();
    config
        .providers
        .context
        .extra
        .insert("region".to_string(), "eu".to_string());

    let runtime = bootstrap(config).expect("bootstrap failed");
    let registry = runtime.registry();

    let plan = WiringPlan::builder()
        .field(
            "context",
            Applicator::context(|s: &mut Subject, v| s.context = Some(v)),
        )
        .build();
    registry.define("regional", DeclaredConfig::new(), plan).unwrap();
    registry.activate("regional", Subject::default()).await.unwrap();

    let handle = registry.get("regional").unwrap();
    let guard = handle.read().await;
    let context = guard
        .downcast_ref::<Subject>()
        .unwrap()
        .context
        .clone()
        .unwrap();
    assert_eq!(context.module, "orders");
    assert_eq!(context.attributes["region"], "eu");
}
