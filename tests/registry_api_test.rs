//! Integration tests for custom backend registration.

use paramchain::collection::DataSourceCollection;
use paramchain::datasource::{DataSource, MemorySource};
use paramchain::registry::{self, BackendRegistry};
use paramchain::{ParamError, Value};

/// Backend that parses `name=value;name=@pointer` locations.
fn inline_backend(location: &str) -> anyhow::Result<Box<dyn DataSource>> {
    let mut source = MemorySource::new(format!("inline:{location}"));
    for pair in location.split(';').filter(|p| !p.is_empty()) {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected name=value, got {pair:?}"))?;
        let value = match value.strip_prefix('@') {
            Some(target) => Value::pointer(target),
            None => Value::from(value),
        };
        source = source.with(name, value);
    }
    Ok(Box::new(source))
}

#[test]
fn custom_registry_builds_collection() {
    let mut registry = BackendRegistry::new();
    registry.register("inline", inline_backend).unwrap();

    let collection = DataSourceCollection::with_registry(
        &registry,
        ["inline:Alias=@Real", "inline:Real=value;Alias=shadowed"],
    )
    .unwrap();

    assert_eq!(collection.len(), 2);
    assert_eq!(
        collection.get_parameter_recursive("Alias").unwrap(),
        Value::from("value")
    );
}

#[test]
fn custom_registry_does_not_know_builtins() {
    let mut registry = BackendRegistry::new();
    registry.register("inline", inline_backend).unwrap();

    let err = DataSourceCollection::with_registry(&registry, ["yaml:x.yml"]).unwrap_err();
    match err {
        ParamError::UnknownScheme { scheme, known } => {
            assert_eq!(scheme, "yaml");
            assert_eq!(known, vec!["inline"]);
        }
        other => panic!("Expected UnknownScheme, got {other:?}"),
    }
}

#[test]
fn backend_error_is_propagated_with_location() {
    let mut registry = BackendRegistry::new();
    registry.register("inline", inline_backend).unwrap();

    let err = DataSourceCollection::with_registry(&registry, ["inline:broken"]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("inline:broken"));
    assert!(msg.contains("expected name=value"));
}

#[test]
fn global_registration_is_visible_to_new_collections() {
    registry::register_global("inline-global", inline_backend).unwrap();

    let collection = DataSourceCollection::new(["inline-global:Greeting=hello"]).unwrap();
    assert_eq!(
        collection.get_parameter("Greeting").unwrap(),
        &Value::from("hello")
    );
}

#[test]
fn global_registration_rejects_invalid_scheme() {
    let err = registry::register_global("has space", inline_backend).unwrap_err();
    assert!(matches!(err, ParamError::InvalidSchemeName { .. }));
}
