#![allow(clippy::result_large_err)] // Manifest APIs return AppError to preserve structured validation context without boxing.

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::core::workflow_graph::sanitize::strip_empty;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const API_VERSION: &str = "argoproj.io/v1alpha1";
pub const KIND: &str = "Workflow";
pub const ENTRYPOINT: &str = "main";
pub const POD_GC_STRATEGY: &str = "OnWorkflowSuccess";

/// Root document for an assembled workflow manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowManifest {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: WorkflowSpec,
}

/// Workflow identity metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "generateName")]
    pub generate_name: String,
    pub namespace: String,
}

/// Workflow-level configuration plus the full template set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowSpec {
    pub entrypoint: String,
    #[serde(rename = "podGC")]
    pub pod_gc: PodGc,
    #[serde(default)]
    pub templates: Vec<Template>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PodGc {
    pub strategy: String,
}

/// One entry in the workflow template set. Exactly one of `dag`,
/// `container`, or `resource` is populated; the sanitizer drops the nulls
/// before the document leaves this crate.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Template {
    pub name: Option<String>,
    pub dag: Option<DagTemplate>,
    pub inputs: Option<Inputs>,
    pub container: Option<ContainerSpec>,
    pub resource: Option<ResourceSpec>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DagTemplate {
    #[serde(default)]
    pub tasks: Vec<DagTask>,
}

/// One node in the workflow graph.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DagTask {
    pub name: String,
    pub dependencies: Option<Dependencies>,
    pub template: String,
    pub arguments: Option<Arguments>,
}

/// Upstream dependencies of a task. A single name and a sequence of names
/// are both accepted and normalize to the same set of graph edges.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Dependencies {
    One(String),
    Many(Vec<String>),
}

impl Dependencies {
    /// Dependency names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Dependencies::One(name) => vec![name.as_str()],
            Dependencies::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Dependencies {
    fn from(name: &str) -> Self {
        Dependencies::One(name.to_string())
    }
}

impl From<Vec<String>> for Dependencies {
    fn from(names: Vec<String>) -> Self {
        Dependencies::Many(names)
    }
}

impl From<Vec<&str>> for Dependencies {
    fn from(names: Vec<&str>) -> Self {
        Dependencies::Many(names.into_iter().map(str::to_string).collect())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Arguments {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// Input parameter declarations of a container template.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Inputs {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// Named parameter. Declarations carry no value; arguments do.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Parameter {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContainerSpec {
    pub image: String,
    #[serde(default)]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResourceSpec {
    pub action: Option<String>,
    #[serde(rename = "successCondition")]
    pub success_condition: Option<String>,
    #[serde(rename = "failureCondition")]
    pub failure_condition: Option<String>,
    pub manifest: Option<serde_yaml::Value>,
}

impl WorkflowManifest {
    /// Tasks of the entrypoint DAG, in declaration order.
    pub fn entrypoint_dag(&self) -> &[DagTask] {
        self.spec
            .templates
            .iter()
            .find(|t| t.name.as_deref() == Some(ENTRYPOINT))
            .and_then(|t| t.dag.as_ref())
            .map(|dag| dag.tasks.as_slice())
            .unwrap_or(&[])
    }

    /// Validate the document before it is handed to the submission boundary:
    /// task names must be unique, every template must be named and uniquely
    /// so, and every task's template reference must resolve.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut task_names = HashSet::new();
        for task in self.entrypoint_dag() {
            if !task_names.insert(task.name.clone()) {
                return Err(AppError::new(
                    ErrorCategory::ValidationError,
                    format!("duplicate task name: {}", task.name),
                ));
            }
        }

        let mut template_names = HashSet::new();
        for template in &self.spec.templates {
            let name = template.name.as_deref().ok_or_else(|| {
                AppError::new(
                    ErrorCategory::ValidationError,
                    "template is missing a name",
                )
            })?;
            if !template_names.insert(name.to_string()) {
                return Err(AppError::new(
                    ErrorCategory::ValidationError,
                    format!("duplicate template name: {}", name),
                ));
            }
        }

        for task in self.entrypoint_dag() {
            if !template_names.contains(&task.template) {
                return Err(AppError::new(
                    ErrorCategory::TemplateResolutionError,
                    format!(
                        "task '{}' references unknown template: {}",
                        task.name, task.template
                    ),
                ));
            }
        }

        Ok(())
    }

    /// The document with null fields recursively removed, the form handed to
    /// the submission boundary.
    pub fn sanitized(&self) -> Result<serde_yaml::Value, AppError> {
        let value = serde_yaml::to_value(self).map_err(|err| {
            AppError::new(
                ErrorCategory::SerializationError,
                format!("failed to convert workflow to value: {}", err),
            )
        })?;
        Ok(strip_empty(value))
    }

    /// Sanitized YAML rendering of the document.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(&self.sanitized()?).map_err(|err| {
            AppError::new(
                ErrorCategory::SerializationError,
                format!("failed to render workflow YAML: {}", err),
            )
        })
    }
}
