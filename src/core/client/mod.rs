#![allow(clippy::result_large_err)]

//! HTTP boundary to the Argo server: workflow submission and status lookup.

use crate::core::config::ServerConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::core::workflow_graph::schema::WorkflowManifest;
use serde_json::Value;
use url::Url;

/// HTTP client targeting the configured Argo server.
#[derive(Clone)]
pub struct ArgoClient {
    http: reqwest::Client,
    base_url: Url,
    namespace: String,
    auth_token: Option<String>,
}

impl ArgoClient {
    /// Build a new client from the resolved server configuration.
    pub fn new(config: &ServerConfig) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.url).map_err(|err| {
            AppError::new(
                ErrorCategory::ConfigLoadError,
                format!("invalid Argo server URL {}: {}", config.url, err),
            )
        })?;
        Ok(ArgoClient {
            http: reqwest::Client::new(),
            base_url,
            namespace: config.namespace.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                AppError::new(
                    ErrorCategory::ConfigLoadError,
                    format!("Argo server URL cannot carry paths: {}", self.base_url),
                )
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Submit an assembled workflow. The document is validated and sanitized
    /// locally first, so template-reference mistakes fail fast here instead
    /// of surfacing as unrelated orchestrator rejections. Returns the
    /// server-assigned run name.
    pub async fn submit(&self, manifest: &WorkflowManifest) -> Result<String, AppError> {
        manifest.validate()?;
        let body = serde_json::json!({ "workflow": manifest.sanitized()? });

        let url = self.endpoint(&["api", "v1", "workflows", &self.namespace])?;
        let response = self
            .request(self.http.post(url))
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                AppError::new(
                    ErrorCategory::SubmissionError,
                    format!("failed to reach Argo server: {}", err),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::new(
                ErrorCategory::SubmissionError,
                format!("Argo server rejected workflow ({}): {}", status, detail),
            ));
        }

        let created: Value = response.json().await.map_err(|err| {
            AppError::new(
                ErrorCategory::SubmissionError,
                format!("failed to parse Argo server response: {}", err),
            )
        })?;
        let run_name = created
            .pointer("/metadata/name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AppError::new(
                    ErrorCategory::SubmissionError,
                    "Argo server response is missing metadata.name",
                )
            })?
            .to_string();

        tracing::info!(run = %run_name, namespace = %self.namespace, "workflow submitted");
        Ok(run_name)
    }

    /// Fetch the status document of a previously submitted run. The contents
    /// are passed through uninterpreted.
    pub async fn workflow_status(&self, run_name: &str) -> Result<Value, AppError> {
        let url = self.endpoint(&["api", "v1", "workflows", &self.namespace, run_name])?;
        let response = self
            .request(self.http.get(url))
            .send()
            .await
            .map_err(|err| {
                AppError::new(
                    ErrorCategory::SubmissionError,
                    format!("failed to reach Argo server: {}", err),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::new(
                ErrorCategory::SubmissionError,
                format!("Argo server status query failed ({}): {}", status, detail),
            ));
        }

        let workflow: Value = response.json().await.map_err(|err| {
            AppError::new(
                ErrorCategory::SubmissionError,
                format!("failed to parse Argo server response: {}", err),
            )
        })?;
        Ok(workflow.get("status").cloned().unwrap_or(Value::Null))
    }
}
