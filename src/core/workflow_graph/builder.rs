//! Accumulates task declarations into an ordered task list, a manifest
//! override list, and a dependency index.

use crate::core::catalog::ManifestOverride;
use crate::core::workflow_graph::schema::{Arguments, DagTask, Dependencies, Parameter};
use indexmap::IndexMap;

/// Container template executed by generic jobs.
pub const GENERIC_RUNNER_TEMPLATE: &str = "runner";
/// Container template executed by data jobs.
pub const DATA_VIEWER_TEMPLATE: &str = "data-viewer";
/// Container template executed by monitoring jobs.
pub const METRICS_RUNNER_TEMPLATE: &str = "metrics-runner";

/// Builder for one workflow's task graph. Owned by a single construction
/// session; tasks are immutable once added and declaration order is kept.
/// Duplicate task names are preserved as declared; they are rejected later
/// by manifest validation, never silently dropped here.
#[derive(Debug, Default)]
pub struct TaskGraphBuilder {
    tasks: Vec<DagTask>,
    overrides: Vec<ManifestOverride>,
    dependency_index: Vec<(String, Option<Dependencies>)>,
}

impl TaskGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a compute job backed by a catalog resource template. The
    /// manifest becomes the positional override for that template.
    pub fn add_compute_job(
        &mut self,
        name: &str,
        resource_template: &str,
        manifest: serde_yaml::Value,
        dependencies: Option<Dependencies>,
    ) -> String {
        self.overrides.push(ManifestOverride {
            name: Some(resource_template.to_string()),
            manifest: Some(manifest),
            ..Default::default()
        });
        self.push_task(name, resource_template, dependencies, None)
    }

    /// Declare a generic container job.
    pub fn add_generic_job(
        &mut self,
        name: &str,
        parameters: IndexMap<String, String>,
        dependencies: Option<Dependencies>,
    ) -> String {
        self.push_task(
            name,
            GENERIC_RUNNER_TEMPLATE,
            dependencies,
            Some(parameters),
        )
    }

    /// Declare a data inspection job.
    pub fn add_data_job(
        &mut self,
        name: &str,
        parameters: IndexMap<String, String>,
        dependencies: Option<Dependencies>,
    ) -> String {
        self.push_task(name, DATA_VIEWER_TEMPLATE, dependencies, Some(parameters))
    }

    /// Declare a monitoring job.
    pub fn add_monitoring_job(
        &mut self,
        name: &str,
        parameters: IndexMap<String, String>,
        dependencies: Option<Dependencies>,
    ) -> String {
        self.push_task(name, METRICS_RUNNER_TEMPLATE, dependencies, Some(parameters))
    }

    fn push_task(
        &mut self,
        name: &str,
        template: &str,
        dependencies: Option<Dependencies>,
        parameters: Option<IndexMap<String, String>>,
    ) -> String {
        self.dependency_index
            .push((name.to_string(), dependencies.clone()));
        let arguments = parameters.map(|params| Arguments {
            parameters: params
                .into_iter()
                .map(|(name, value)| Parameter {
                    name,
                    value: Some(value),
                })
                .collect(),
        });
        self.tasks.push(DagTask {
            name: name.to_string(),
            dependencies,
            template: template.to_string(),
            arguments,
        });
        tracing::debug!(task = name, template, "task added");
        format!("task {} added", name)
    }

    /// Declared tasks, in declaration order.
    pub fn tasks(&self) -> &[DagTask] {
        &self.tasks
    }

    /// Manifest overrides recorded by compute jobs, in declaration order.
    pub fn manifest_overrides(&self) -> &[ManifestOverride] {
        &self.overrides
    }

    /// The dependency index: one `(name, dependencies)` entry per declared
    /// task, duplicates included.
    pub fn dependency_index(&self) -> &[(String, Option<Dependencies>)] {
        &self.dependency_index
    }
}
