//! Positional merge of catalog resource-template bases with per-run
//! manifest overrides.
//!
//! The i-th base is paired with the i-th override; the shorter side is padded
//! with empty records. Within a pair the override wins field by field. This
//! is an ordering contract, not name matching: callers must supply overrides
//! in the same order the catalog declares its resource templates.

use crate::core::catalog::{ManifestOverride, ResourceTemplateBase};
use serde::{Deserialize, Serialize};

/// One merged resource template, exactly one per positional pair.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResourceTemplate {
    pub name: Option<String>,
    pub action: Option<String>,
    pub success_condition: Option<String>,
    pub failure_condition: Option<String>,
    /// Submission payload; a catalog base alone carries no manifest.
    pub manifest: Option<serde_yaml::Value>,
}

/// Advisory arity diagnostic. A base/override count mismatch is not an
/// error by policy, but callers can inspect this to detect positional drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    pub base_count: usize,
    pub override_count: usize,
    /// Number of pairs where one side was an empty-record placeholder.
    pub padded: usize,
}

impl MergeReport {
    pub fn arity_mismatch(&self) -> bool {
        self.base_count != self.override_count
    }
}

/// Merge catalog bases with per-run overrides by position, padding the
/// shorter sequence with empty records.
pub fn merge_resources(
    bases: &[ResourceTemplateBase],
    overrides: &[ManifestOverride],
) -> (Vec<ResourceTemplate>, MergeReport) {
    let count = bases.len().max(overrides.len());
    let report = MergeReport {
        base_count: bases.len(),
        override_count: overrides.len(),
        padded: count - bases.len().min(overrides.len()),
    };
    if report.arity_mismatch() {
        tracing::warn!(
            bases = report.base_count,
            overrides = report.override_count,
            "resource merge arity mismatch, padding shorter side with empty records"
        );
    }

    let merged = (0..count)
        .map(|i| {
            let base = bases.get(i).cloned().unwrap_or_default();
            let over = overrides.get(i).cloned().unwrap_or_default();
            ResourceTemplate {
                name: over.name.or(base.name),
                action: over.action.or(base.action),
                success_condition: over.success_condition.or(base.success_condition),
                failure_condition: over.failure_condition.or(base.failure_condition),
                manifest: over.manifest,
            }
        })
        .collect();

    (merged, report)
}
