#![allow(clippy::result_large_err)] // Catalog APIs return AppError to preserve structured load context without boxing.

pub mod merge;

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::core::workflow_graph::schema::{ContainerSpec, Inputs, Parameter, Template};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw catalog document: the externally-declared, read-only set of reusable
/// templates available to a deployment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogData {
    #[serde(rename = "Containers", default)]
    pub containers: Vec<ContainerEntry>,
    #[serde(rename = "Resources", default)]
    pub resources: Vec<ResourceTemplateBase>,
}

/// Catalog declaration of a container-backed template.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContainerEntry {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub command: Vec<String>,
    /// Declared input parameter names; absent in source means no inputs.
    #[serde(default)]
    pub parameters: Vec<String>,
}

/// Catalog declaration of a resource-backed template. Fields are
/// catalog-level defaults; the manifest body arrives per run (see `merge`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResourceTemplateBase {
    pub name: Option<String>,
    pub action: Option<String>,
    #[serde(rename = "successCondition")]
    pub success_condition: Option<String>,
    #[serde(rename = "failureCondition")]
    pub failure_condition: Option<String>,
}

/// Per-run override for one resource template. Any field present here wins
/// over the catalog base at the same position.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ManifestOverride {
    pub name: Option<String>,
    pub action: Option<String>,
    #[serde(rename = "successCondition")]
    pub success_condition: Option<String>,
    #[serde(rename = "failureCondition")]
    pub failure_condition: Option<String>,
    pub manifest: Option<serde_yaml::Value>,
}

/// Loaded, indexed template catalog. One instance is loaded fresh per
/// workflow construction and treated as read-only thereafter.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    data: CatalogData,
}

impl TemplateCatalog {
    /// Load a catalog from a YAML file. Failure leaves no partial state
    /// behind: either a full catalog is returned or an error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|err| {
            AppError::new(
                ErrorCategory::ConfigLoadError,
                format!("failed to read catalog {}: {}", path.display(), err),
            )
        })?;
        Self::from_yaml(&text).map_err(|err| err.with_context(path.display().to_string()))
    }

    /// Parse a catalog from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, AppError> {
        let data: CatalogData = serde_yaml::from_str(text).map_err(|err| {
            AppError::new(
                ErrorCategory::ConfigLoadError,
                format!("failed to parse catalog: {}", err),
            )
        })?;
        Ok(Self { data })
    }

    /// The catalog's resource-template entries, verbatim.
    pub fn resource_template_bases(&self) -> &[ResourceTemplateBase] {
        &self.data.resources
    }

    /// The catalog's raw container entries.
    pub fn container_entries(&self) -> &[ContainerEntry] {
        &self.data.containers
    }

    /// Fully-formed container templates ready for the workflow template set.
    pub fn container_templates(&self) -> Vec<Template> {
        self.data
            .containers
            .iter()
            .map(Template::from_container_entry)
            .collect()
    }
}

impl Template {
    /// Build a container template from a catalog entry. Input parameters
    /// default to an empty declaration list when absent in source data.
    pub fn from_container_entry(entry: &ContainerEntry) -> Template {
        Template {
            name: Some(entry.name.clone()),
            dag: None,
            inputs: Some(Inputs {
                parameters: entry
                    .parameters
                    .iter()
                    .map(|name| Parameter {
                        name: name.clone(),
                        value: None,
                    })
                    .collect(),
            }),
            container: Some(ContainerSpec {
                image: entry.image.clone(),
                command: entry.command.clone(),
            }),
            resource: None,
        }
    }
}
