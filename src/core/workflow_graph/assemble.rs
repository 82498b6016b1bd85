//! Composition of the final workflow document from the task list, the
//! template catalog, and the merged resource templates.

use crate::core::catalog::merge::{merge_resources, MergeReport};
use crate::core::catalog::TemplateCatalog;
use crate::core::workflow_graph::builder::TaskGraphBuilder;
use crate::core::workflow_graph::schema::{
    DagTemplate, Metadata, PodGc, ResourceSpec, Template, WorkflowManifest, WorkflowSpec,
    API_VERSION, ENTRYPOINT, KIND, POD_GC_STRATEGY,
};

/// Derive the `generateName` prefix from a workflow name: lowercase,
/// hyphenated at word boundaries, with a trailing separator.
pub fn generate_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    let mut prev_lower = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
        } else if ch.is_uppercase() {
            if prev_lower && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    if !out.ends_with('-') {
        out.push('-');
    }
    out
}

/// Assemble the composite workflow document: the entrypoint DAG built from
/// the declared tasks, followed by the catalog's container templates,
/// followed by the merged resource templates.
pub fn assemble(
    name: &str,
    namespace: &str,
    builder: &TaskGraphBuilder,
    catalog: &TemplateCatalog,
) -> (WorkflowManifest, MergeReport) {
    let (resources, report) = merge_resources(
        catalog.resource_template_bases(),
        builder.manifest_overrides(),
    );

    let mut templates = Vec::with_capacity(1 + catalog.container_entries().len() + resources.len());
    templates.push(Template {
        name: Some(ENTRYPOINT.to_string()),
        dag: Some(DagTemplate {
            tasks: builder.tasks().to_vec(),
        }),
        ..Default::default()
    });
    templates.extend(catalog.container_templates());
    templates.extend(resources.into_iter().map(|merged| Template {
        name: merged.name,
        resource: Some(ResourceSpec {
            action: merged.action,
            success_condition: merged.success_condition,
            failure_condition: merged.failure_condition,
            manifest: merged.manifest,
        }),
        ..Default::default()
    }));

    let manifest = WorkflowManifest {
        api_version: API_VERSION.to_string(),
        kind: KIND.to_string(),
        metadata: Metadata {
            name: String::new(),
            generate_name: generate_name(name),
            namespace: namespace.to_string(),
        },
        spec: WorkflowSpec {
            entrypoint: ENTRYPOINT.to_string(),
            pod_gc: PodGc {
                strategy: POD_GC_STRATEGY.to_string(),
            },
            templates,
        },
    };

    tracing::info!(
        workflow = name,
        tasks = builder.tasks().len(),
        templates = manifest.spec.templates.len(),
        "workflow assembled"
    );

    (manifest, report)
}
