//! Pipeline definitions
//!
//! A pipeline is a fixed, ordered list of steps plus the synonym table that
//! maps backend status codes onto those steps. Each tracked domain is one
//! pipeline value; the resolver never special-cases a domain.
//!
//! The built-in pipelines follow a linear progression:
//! - shopping request: Requested → Quotation Ready → Quotation Confirmed →
//!   Invoiced → Pending Payment Approval → Payment Approved → Order Placed
//! - pickup request: Requested → Quotation Ready → Confirmed → Picked
//! - shipment: Ship Request → Payment Pending → Payment Approved → Ready To Ship

use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::{Result, TracklineError};
use crate::schemas::{Config, FallbackRule, PipelineSpec, StatusEvent, StepDefinition};

use super::synonyms::{labels_match, StatusSynonymTable};

/// The tracked domains with a built-in pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainKind {
    ShoppingRequest,
    PickupRequest,
    Shipment,
}

impl DomainKind {
    pub const ALL: [DomainKind; 3] = [
        DomainKind::ShoppingRequest,
        DomainKind::PickupRequest,
        DomainKind::Shipment,
    ];

    /// Registry name of the domain's pipeline
    pub fn pipeline_name(self) -> &'static str {
        match self {
            DomainKind::ShoppingRequest => "shopping-request",
            DomainKind::PickupRequest => "pickup-request",
            DomainKind::Shipment => "shipment",
        }
    }
}

impl std::fmt::Display for DomainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pipeline_name())
    }
}

impl std::str::FromStr for DomainKind {
    type Err = TracklineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shopping" | "shopping-request" | "assisted-shopping" => Ok(DomainKind::ShoppingRequest),
            "pickup" | "pickup-request" => Ok(DomainKind::PickupRequest),
            "shipment" => Ok(DomainKind::Shipment),
            _ => Err(TracklineError::UnknownDomain(s.to_string())),
        }
    }
}

/// A validated pipeline: non-empty ordered steps, synonyms, fallback rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineDefinition {
    name: String,
    steps: Vec<StepDefinition>,
    synonyms: StatusSynonymTable,
    fallback_rules: Vec<FallbackRule>,
}

impl PipelineDefinition {
    /// Build a pipeline, rejecting an empty step list.
    ///
    /// # Errors
    /// * `InvalidPipeline` - If `steps` is empty or a fallback rule targets an
    ///   unknown step
    pub fn new(
        name: impl Into<String>,
        steps: Vec<StepDefinition>,
        synonyms: StatusSynonymTable,
        fallback_rules: Vec<FallbackRule>,
    ) -> Result<Self> {
        let name = name.into();
        if steps.is_empty() {
            return Err(TracklineError::InvalidPipeline(format!(
                "pipeline '{}' has no steps",
                name
            )));
        }
        if let Some(rule) = fallback_rules
            .iter()
            .find(|rule| !steps.iter().any(|s| labels_match(&s.label, &rule.target)))
        {
            return Err(TracklineError::InvalidPipeline(format!(
                "pipeline '{}' has a fallback rule for unknown step '{}'",
                name, rule.target
            )));
        }
        Ok(PipelineDefinition {
            name,
            steps,
            synonyms,
            fallback_rules,
        })
    }

    /// Build a pipeline from its config-file shape
    pub fn from_spec(name: impl Into<String>, spec: &PipelineSpec) -> Result<Self> {
        let synonyms = StatusSynonymTable::from_pairs(
            spec.synonyms.iter().map(|(raw, label)| (raw, label.clone())),
        );
        Self::new(name, spec.steps.clone(), synonyms, spec.fallback_rules.clone())
    }

    /// Convert back to the config-file shape
    pub fn to_spec(&self) -> PipelineSpec {
        let mut synonyms = BTreeMap::new();
        for step in &self.steps {
            for code in self.synonyms.codes_for(&step.label) {
                synonyms.insert(code.to_string(), step.label.clone());
            }
        }
        PipelineSpec {
            steps: self.steps.clone(),
            synonyms,
            fallback_rules: self.fallback_rules.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn synonyms(&self) -> &StatusSynonymTable {
        &self.synonyms
    }

    pub fn fallback_rules(&self) -> &[FallbackRule] {
        &self.fallback_rules
    }

    /// Canonical step label for a raw status
    pub fn canonical(&self, raw: &str) -> Option<&str> {
        self.synonyms.canonical(raw)
    }

    /// Position of the first step with the given label
    pub fn step_index(&self, label: &str) -> Option<usize> {
        self.steps.iter().position(|s| labels_match(&s.label, label))
    }

    /// First event that satisfies a fallback rule for `label`, if any
    pub fn fallback_event<'e>(&self, label: &str, events: &'e [StatusEvent]) -> Option<&'e StatusEvent> {
        self.fallback_rules
            .iter()
            .filter(|rule| labels_match(&rule.target, label))
            .find_map(|rule| {
                let evidence = rule.evidence.to_uppercase();
                events.iter().find(|e| e.status.to_uppercase() == evidence)
            })
    }
}

/// Shopping request pipeline.
///
/// "Quotation Confirmed" is also satisfied by an INVOICED event: confirming a
/// quotation submits INVOICED directly, so the confirmation step never gets
/// its own event.
pub fn shopping_request_pipeline() -> PipelineDefinition {
    PipelineDefinition {
        name: DomainKind::ShoppingRequest.pipeline_name().to_string(),
        steps: vec![
            StepDefinition::new("Requested", "Requested by User"),
            StepDefinition::new("Quotation Ready", "Quotation is not ready yet!"),
            StepDefinition::new("Quotation Confirmed", "Quotation is not confirmed yet!"),
            StepDefinition::new("Invoiced", "Waiting for confirmation!"),
            StepDefinition::new("Pending Payment Approval", "Waiting for confirmation!"),
            StepDefinition::new("Payment Approved", "Waiting for payment approval"),
            StepDefinition::new("Order Placed", "Waiting for complete"),
        ],
        synonyms: StatusSynonymTable::from_pairs([
            ("REQUESTED", "Requested"),
            ("QUOTED", "Quotation Ready"),
            ("QUOTATION_READY", "Quotation Ready"),
            ("QUOTATION_CONFIRMED", "Quotation Confirmed"),
            ("INVOICED", "Invoiced"),
            ("PAYMENT_PENDING", "Pending Payment Approval"),
            ("PAYMENT_APPROVED", "Payment Approved"),
            ("ORDER_PLACED", "Order Placed"),
        ]),
        fallback_rules: vec![FallbackRule::new("Quotation Confirmed", "INVOICED")],
    }
}

/// Pickup request pipeline
pub fn pickup_request_pipeline() -> PipelineDefinition {
    PipelineDefinition {
        name: DomainKind::PickupRequest.pipeline_name().to_string(),
        steps: vec![
            StepDefinition::new("Requested", "Awaiting confirmation"),
            StepDefinition::new("Quotation Ready", "Quotation is not ready yet!"),
            StepDefinition::new("Confirmed", "Waiting for user confirmation!"),
            StepDefinition::new("Picked", "Package has not been picked up yet."),
        ],
        synonyms: StatusSynonymTable::from_pairs([
            ("REQUESTED", "Requested"),
            ("QUOTED", "Quotation Ready"),
            ("CONFIRMED", "Confirmed"),
            ("PICKED", "Picked"),
        ]),
        fallback_rules: vec![],
    }
}

/// Shipment pipeline.
///
/// Shipment statuses arrive as display strings ("Payment Pending"), so every
/// label maps to itself alongside the two backend aliases.
pub fn shipment_pipeline() -> PipelineDefinition {
    PipelineDefinition {
        name: DomainKind::Shipment.pipeline_name().to_string(),
        steps: vec![
            StepDefinition::new("Ship Request", "Requested by User"),
            StepDefinition::new("Payment Pending", "Waiting for confirmation!"),
            StepDefinition::new("Payment Approved", "Waiting for payment approval"),
            StepDefinition::new("Ready To Ship", "Waiting for ready to ship"),
        ],
        synonyms: StatusSynonymTable::from_pairs([
            ("REQUEST SHIP", "Ship Request"),
            ("DEPARTED", "Ready To Ship"),
            ("SHIP REQUEST", "Ship Request"),
            ("PAYMENT PENDING", "Payment Pending"),
            ("PAYMENT APPROVED", "Payment Approved"),
            ("READY TO SHIP", "Ready To Ship"),
        ]),
        fallback_rules: vec![],
    }
}

/// Built-in pipeline for a domain
pub fn builtin_pipeline(kind: DomainKind) -> PipelineDefinition {
    match kind {
        DomainKind::ShoppingRequest => shopping_request_pipeline(),
        DomainKind::PickupRequest => pickup_request_pipeline(),
        DomainKind::Shipment => shipment_pipeline(),
    }
}

/// Named pipelines: the built-ins, overlaid with any from config
#[derive(Debug, Clone)]
pub struct PipelineRegistry {
    pipelines: BTreeMap<String, PipelineDefinition>,
}

impl PipelineRegistry {
    /// Registry holding only the built-in pipelines
    pub fn with_builtins() -> Self {
        let pipelines = DomainKind::ALL
            .iter()
            .map(|&kind| (kind.pipeline_name().to_string(), builtin_pipeline(kind)))
            .collect();
        PipelineRegistry { pipelines }
    }

    /// Built-ins plus config pipelines; a config entry replaces a built-in
    /// of the same name.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::with_builtins();
        for (name, spec) in &config.pipelines {
            let pipeline = PipelineDefinition::from_spec(name.clone(), spec)?;
            if registry.pipelines.contains_key(name) {
                debug!(pipeline = %name, "config overrides built-in pipeline");
            }
            registry.pipelines.insert(name.clone(), pipeline);
        }
        Ok(registry)
    }

    /// Look up a pipeline by name
    ///
    /// # Errors
    /// * `UnknownPipeline` - If no pipeline has that name
    pub fn get(&self, name: &str) -> Result<&PipelineDefinition> {
        self.pipelines
            .get(name)
            .ok_or_else(|| TracklineError::UnknownPipeline(name.to_string()))
    }

    /// The (possibly overridden) pipeline for a domain
    pub fn for_domain(&self, kind: DomainKind) -> Result<&PipelineDefinition> {
        self.get(kind.pipeline_name())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pipelines.keys().map(String::as_str)
    }
}
