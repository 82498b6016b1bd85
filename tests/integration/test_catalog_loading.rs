use argoforge::core::catalog::TemplateCatalog;
use argoforge::core::types::ErrorCategory;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"
Containers:
  - name: runner
    image: repo/runner:1
    command: ["run"]
    parameters: ["input-path"]
Resources:
  - name: job
    action: create
    successCondition: status.state=DONE
    failureCondition: status.state=ERROR
"#;

#[test]
fn loads_catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    fs::write(&path, CATALOG).unwrap();

    let catalog = TemplateCatalog::load(&path).unwrap();
    assert_eq!(catalog.container_entries().len(), 1);
    assert_eq!(catalog.resource_template_bases().len(), 1);

    let templates = catalog.container_templates();
    assert_eq!(templates[0].name.as_deref(), Some("runner"));
    assert_eq!(
        templates[0].container.as_ref().unwrap().image,
        "repo/runner:1"
    );
    assert_eq!(
        templates[0].inputs.as_ref().unwrap().parameters[0].name,
        "input-path"
    );
}

#[test]
fn missing_catalog_is_a_config_load_error() {
    let result = TemplateCatalog::load(Path::new("/nonexistent/catalog.yaml"));
    let err = result.err().unwrap();
    assert_eq!(err.category, ErrorCategory::ConfigLoadError);
    assert!(err.message.contains("failed to read catalog"));
}

#[test]
fn unparseable_catalog_is_a_config_load_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    fs::write(&path, "Containers: {broken: [").unwrap();

    let result = TemplateCatalog::load(&path);
    let err = result.err().unwrap();
    assert_eq!(err.category, ErrorCategory::ConfigLoadError);
    assert!(err.message.contains("failed to parse catalog"));
}

#[test]
fn wrong_shape_is_a_config_load_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    fs::write(&path, "Containers: 42").unwrap();

    let result = TemplateCatalog::load(&path);
    assert!(result.is_err());
}
