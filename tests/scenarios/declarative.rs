//! Test: pipelines assembled from YAML and the built-in registry

use pipethrough::steps::text_registry;
use pipethrough::{PipelineConfig, PipelineError};
use std::sync::Arc;

#[test]
fn test_yaml_chain_with_builtin_steps() {
    let yaml = r#"
name: "Main guard"
steps:
  - use: reverse
  - use: lowercase
  - use: wrap
    args: ["__"]
"#;

    let config = PipelineConfig::from_yaml(yaml).unwrap();
    let registry = Arc::new(text_registry());
    config.validate_against(&*registry).unwrap();

    let result = config
        .to_pipeline("NIAM".to_string(), registry)
        .run()
        .wait()
        .unwrap();
    assert_eq!(result, "__main__");
}

#[tokio::test]
async fn test_yaml_chain_with_async_builtin() {
    let yaml = r#"
steps:
  - use: produce
    args: ["hello"]
  - use: delay
    args: ["5"]
  - use: replace
    args: ["l+", "L"]
  - use: uppercase
"#;

    let config = PipelineConfig::from_yaml(yaml).unwrap();
    let result = config
        .to_pipeline(String::new(), Arc::new(text_registry()))
        .run_async()
        .await
        .unwrap();
    assert_eq!(result, "HELO");
}

#[test]
fn test_bad_arguments_surface_as_configuration_error() {
    let yaml = r#"
steps:
  - use: replace
    args: ["(", "x"]
"#;

    let config = PipelineConfig::from_yaml(yaml).unwrap();
    let err = config
        .to_pipeline("text".to_string(), Arc::new(text_registry()))
        .run()
        .wait()
        .unwrap_err();

    let pipeline_error = err.downcast_ref::<PipelineError>().unwrap();
    assert!(pipeline_error.is_configuration());
    assert!(matches!(pipeline_error, PipelineError::InvalidArguments { name, .. } if name == "replace"));
}

#[test]
fn test_unknown_step_fails_validation() {
    let config = PipelineConfig::from_yaml("steps:\n  - use: teleport\n").unwrap();
    let err = config.validate_against(&text_registry()).unwrap_err();
    assert!(err.to_string().contains("teleport"));
}
