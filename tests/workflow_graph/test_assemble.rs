use argoforge::core::catalog::TemplateCatalog;
use argoforge::core::types::ErrorCategory;
use argoforge::core::workflow_graph::assemble::{assemble, generate_name};
use argoforge::core::workflow_graph::builder::TaskGraphBuilder;
use indexmap::IndexMap;

const CATALOG: &str = r#"
Containers:
  - name: runner
    image: repo/runner:1
    command: ["run"]
Resources:
  - name: job
    action: create
    successCondition: status.state=DONE
    failureCondition: status.state=ERROR
"#;

fn manifest(text: &str) -> serde_yaml::Value {
    serde_yaml::from_str(text).unwrap()
}

#[test]
fn assembles_composite_document_from_catalog_and_tasks() {
    let catalog = TemplateCatalog::from_yaml(CATALOG).unwrap();
    let mut builder = TaskGraphBuilder::new();
    builder.add_compute_job("crunch", "job", manifest("{foo: bar}"), None);

    let (workflow, report) = assemble("Daily Report Job", "argo", &builder, &catalog);

    assert_eq!(workflow.metadata.generate_name, "daily-report-job-");
    assert_eq!(workflow.metadata.namespace, "argo");
    assert_eq!(workflow.spec.entrypoint, "main");
    assert!(!report.arity_mismatch());

    // Templates: main DAG, then containers, then merged resources.
    let names: Vec<&str> = workflow
        .spec
        .templates
        .iter()
        .map(|t| t.name.as_deref().unwrap())
        .collect();
    assert_eq!(names, vec!["main", "runner", "job"]);

    assert_eq!(workflow.entrypoint_dag().len(), 1);
    assert_eq!(workflow.entrypoint_dag()[0].template, "job");

    let job = &workflow.spec.templates[2];
    let resource = job.resource.as_ref().unwrap();
    assert_eq!(resource.action.as_deref(), Some("create"));
    assert_eq!(resource.manifest, Some(manifest("{foo: bar}")));

    assert!(workflow.validate().is_ok());
}

#[test]
fn task_order_matches_declaration_order() {
    let catalog = TemplateCatalog::from_yaml("Containers: []").unwrap();
    let mut builder = TaskGraphBuilder::new();
    for name in ["one", "two", "three", "four"] {
        builder.add_generic_job(name, IndexMap::new(), None);
    }

    let (workflow, _) = assemble("ordering", "argo", &builder, &catalog);
    let names: Vec<&str> = workflow
        .entrypoint_dag()
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["one", "two", "three", "four"]);
}

#[test]
fn unresolved_template_reference_fails_validation() {
    let catalog = TemplateCatalog::from_yaml("Containers: []").unwrap();
    let mut builder = TaskGraphBuilder::new();
    builder.add_generic_job("orphan", IndexMap::new(), None);

    let (workflow, _) = assemble("broken", "argo", &builder, &catalog);
    let err = workflow.validate().err().unwrap();
    assert_eq!(err.category, ErrorCategory::TemplateResolutionError);
    assert!(err.message.contains("unknown template"));
}

#[test]
fn duplicate_task_names_fail_validation() {
    let catalog = TemplateCatalog::from_yaml(CATALOG).unwrap();
    let mut builder = TaskGraphBuilder::new();
    builder.add_compute_job("same", "job", manifest("{a: 1}"), None);
    builder.add_compute_job("same", "job", manifest("{a: 2}"), None);

    let (workflow, report) = assemble("dupes", "argo", &builder, &catalog);
    // Two overrides against one base still merge, one pair padded.
    assert_eq!(report.padded, 1);
    let err = workflow.validate().err().unwrap();
    assert_eq!(err.category, ErrorCategory::ValidationError);
    assert!(err.message.contains("duplicate task name"));
}

#[test]
fn sanitized_yaml_strips_empty_fields() {
    let catalog = TemplateCatalog::from_yaml(CATALOG).unwrap();
    let mut builder = TaskGraphBuilder::new();
    builder.add_compute_job("crunch", "job", manifest("{foo: bar}"), None);

    let (workflow, _) = assemble("Daily Report Job", "argo", &builder, &catalog);
    let yaml = workflow.to_yaml().unwrap();

    assert!(!yaml.contains("null"));
    assert!(yaml.contains("generateName: daily-report-job-"));
    assert!(yaml.contains("apiVersion: argoproj.io/v1alpha1"));
    assert!(yaml.contains("strategy: OnWorkflowSuccess"));
    // The DAG task carried no dependencies or arguments, so neither key
    // survives sanitization.
    assert!(!yaml.contains("dependencies"));
    assert!(!yaml.contains("arguments"));
}

#[test]
fn sanitize_round_trip_is_stable() {
    let catalog = TemplateCatalog::from_yaml(CATALOG).unwrap();
    let mut builder = TaskGraphBuilder::new();
    builder.add_generic_job(
        "step",
        IndexMap::from([("key".to_string(), "value".to_string())]),
        None,
    );
    builder.add_compute_job("crunch", "job", manifest("{foo: bar}"), Some("step".into()));

    let (workflow, _) = assemble("stable", "argo", &builder, &catalog);
    let once = workflow.sanitized().unwrap();
    let twice = argoforge::core::workflow_graph::sanitize::strip_empty(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn generate_name_examples() {
    assert_eq!(generate_name("Daily Report Job"), "daily-report-job-");
    assert_eq!(generate_name("nightly"), "nightly-");
}
