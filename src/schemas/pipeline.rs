//! Pipeline schema - Step definitions, fallback rules and resolved steps
//!
//! These are the plain serde shapes. Validation happens when a
//! [`PipelineSpec`] is turned into a `domain::PipelineDefinition`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One step of a pipeline, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Canonical label shown in the UI (e.g. "Quotation Ready")
    pub label: String,

    /// Text shown while the step is not completed
    #[serde(alias = "defaultDescription")]
    pub default_description: String,
}

impl StepDefinition {
    pub fn new(label: impl Into<String>, default_description: impl Into<String>) -> Self {
        StepDefinition {
            label: label.into(),
            default_description: default_description.into(),
        }
    }
}

/// A step that is also satisfied by evidence of a different status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackRule {
    /// Label of the step this rule completes
    pub target: String,

    /// Raw status code (case-insensitive) whose first event completes the target
    pub evidence: String,
}

impl FallbackRule {
    pub fn new(target: impl Into<String>, evidence: impl Into<String>) -> Self {
        FallbackRule {
            target: target.into(),
            evidence: evidence.into(),
        }
    }
}

/// Serializable description of a pipeline, as found in config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Ordered steps; must not be empty
    pub steps: Vec<StepDefinition>,

    /// Raw status code -> canonical step label
    #[serde(default)]
    pub synonyms: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallback_rules: Vec<FallbackRule>,
}

/// Per-step rendering state derived from a status history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStep {
    pub label: String,
    pub is_completed: bool,
    pub is_current: bool,
    /// Formatted timestamp when completed, otherwise the default description
    pub description: String,
}

impl ResolvedStep {
    /// A completed step described by its formatted timestamp
    pub fn completed(step: &StepDefinition, is_current: bool, description: String) -> Self {
        ResolvedStep {
            label: step.label.clone(),
            is_completed: true,
            is_current,
            description,
        }
    }

    /// A step with no matching event
    pub fn pending(step: &StepDefinition) -> Self {
        ResolvedStep {
            label: step.label.clone(),
            is_completed: false,
            is_current: false,
            description: step.default_description.clone(),
        }
    }
}
