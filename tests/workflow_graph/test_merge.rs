use argoforge::core::catalog::merge::merge_resources;
use argoforge::core::catalog::{ManifestOverride, TemplateCatalog};

const TWO_BASES: &str = r#"
Resources:
  - name: batch
    action: create
    successCondition: status.state=DONE
    failureCondition: status.state=ERROR
  - name: stream
    action: apply
    successCondition: status.ready=true
    failureCondition: status.failed=true
"#;

fn manifest(text: &str) -> serde_yaml::Value {
    serde_yaml::from_str(text).unwrap()
}

#[test]
fn two_bases_three_overrides_yield_three_templates() {
    let catalog = TemplateCatalog::from_yaml(TWO_BASES).unwrap();
    let overrides = vec![
        ManifestOverride {
            manifest: Some(manifest("{kind: Job, id: 1}")),
            ..Default::default()
        },
        ManifestOverride {
            manifest: Some(manifest("{kind: Job, id: 2}")),
            ..Default::default()
        },
        ManifestOverride {
            name: Some("extra".to_string()),
            manifest: Some(manifest("{kind: Job, id: 3}")),
            ..Default::default()
        },
    ];

    let (merged, report) = merge_resources(catalog.resource_template_bases(), &overrides);

    assert_eq!(merged.len(), 3);
    assert_eq!(report.base_count, 2);
    assert_eq!(report.override_count, 3);
    assert_eq!(report.padded, 1);
    assert!(report.arity_mismatch());

    // Catalog defaults survive where the override is silent.
    assert_eq!(merged[0].name.as_deref(), Some("batch"));
    assert_eq!(merged[0].action.as_deref(), Some("create"));
    assert_eq!(merged[1].name.as_deref(), Some("stream"));
    assert_eq!(merged[1].action.as_deref(), Some("apply"));

    // The third pair has a placeholder base: no catalog defaults at all.
    assert_eq!(merged[2].name.as_deref(), Some("extra"));
    assert!(merged[2].action.is_none());
    assert!(merged[2].success_condition.is_none());
    assert!(merged[2].failure_condition.is_none());
    assert_eq!(merged[2].manifest, Some(manifest("{kind: Job, id: 3}")));
}

#[test]
fn fewer_overrides_than_bases_pads_overrides() {
    let catalog = TemplateCatalog::from_yaml(TWO_BASES).unwrap();
    let overrides = vec![ManifestOverride {
        manifest: Some(manifest("{kind: Job}")),
        ..Default::default()
    }];

    let (merged, report) = merge_resources(catalog.resource_template_bases(), &overrides);

    assert_eq!(merged.len(), 2);
    assert_eq!(report.padded, 1);
    assert_eq!(merged[0].manifest, Some(manifest("{kind: Job}")));
    // The second base keeps its catalog defaults but has no manifest.
    assert_eq!(merged[1].name.as_deref(), Some("stream"));
    assert!(merged[1].manifest.is_none());
}

#[test]
fn equal_arity_produces_no_padding() {
    let catalog = TemplateCatalog::from_yaml(TWO_BASES).unwrap();
    let overrides = vec![ManifestOverride::default(), ManifestOverride::default()];

    let (merged, report) = merge_resources(catalog.resource_template_bases(), &overrides);

    assert_eq!(merged.len(), 2);
    assert_eq!(report.padded, 0);
    assert!(!report.arity_mismatch());
}

#[test]
fn empty_inputs_merge_to_empty_output() {
    let (merged, report) = merge_resources(&[], &[]);
    assert!(merged.is_empty());
    assert_eq!(report.padded, 0);
}
