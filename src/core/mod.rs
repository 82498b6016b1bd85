pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod workflow_graph;

pub use catalog::{ContainerEntry, ManifestOverride, ResourceTemplateBase, TemplateCatalog};
pub use client::ArgoClient;
pub use config::ForgeConfig;
pub use error::AppError;
pub use types::{ErrorCategory, ErrorSeverity};
pub use workflow_graph::builder::TaskGraphBuilder;
pub use workflow_graph::schema::WorkflowManifest;
