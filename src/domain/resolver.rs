//! Status pipeline resolver
//!
//! Pure functions that turn a status history into per-step rendering state.
//! Nothing here fails: unmapped statuses simply match no step.

use serde::Serialize;
use tracing::trace;

use crate::errors::Result;
use crate::schemas::{Config, EventOrder, ResolvedStep, StatusEvent};

use super::datetime::DateFormatter;
use super::pipelines::PipelineDefinition;
use super::synonyms::labels_match;

/// Knobs for a resolution call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// How events are ordered before the current step is picked
    pub order: EventOrder,
    /// Formatter for completed-step descriptions
    pub formatter: DateFormatter,
}

impl ResolveOptions {
    /// Options taken from a loaded config
    ///
    /// # Errors
    /// * `ConfigError` - If the configured UTC offset is out of range
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(ResolveOptions {
            order: config.event_order,
            formatter: DateFormatter::from_offset_minutes(config.utc_offset_minutes)?,
        })
    }

    pub fn with_order(mut self, order: EventOrder) -> Self {
        self.order = order;
        self
    }
}

/// Resolve a pipeline against a status history.
///
/// - A step is completed when some event's canonical label equals its label,
///   or when one of the pipeline's fallback rules finds its evidence event.
/// - The current step is the one matching the canonical label of the last
///   event. With [`EventOrder::AsGiven`] "last" means last in the list, not
///   latest by timestamp. The order only picks the current step; matching
///   always walks the list as given.
/// - A completed step is described by the first matching event's timestamp;
///   other steps keep their default description.
///
/// Returns one entry per step, in step order.
pub fn resolve_pipeline(
    pipeline: &PipelineDefinition,
    events: &[StatusEvent],
    options: &ResolveOptions,
) -> Vec<ResolvedStep> {
    let canonical: Vec<Option<&str>> = events
        .iter()
        .map(|event| {
            let label = pipeline.canonical(&event.status);
            if label.is_none() {
                trace!(pipeline = pipeline.name(), status = %event.status, "unmapped status ignored");
            }
            label
        })
        .collect();

    let last = match options.order {
        EventOrder::AsGiven => canonical.last(),
        // max_by_key keeps the later entry on equal timestamps
        EventOrder::Chronological => events
            .iter()
            .zip(&canonical)
            .max_by_key(|(event, _)| event.created_at)
            .map(|(_, label)| label),
    };
    let current = last
        .copied()
        .flatten()
        .and_then(|label| pipeline.step_index(label));

    pipeline
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let matched = events
                .iter()
                .zip(&canonical)
                .find(|(_, label)| label.is_some_and(|l| labels_match(l, &step.label)))
                .map(|(event, _)| event)
                .or_else(|| pipeline.fallback_event(&step.label, events));

            match matched {
                Some(event) => ResolvedStep::completed(
                    step,
                    current == Some(index),
                    options.formatter.format(event.created_at),
                ),
                None => ResolvedStep::pending(step),
            }
        })
        .collect()
}

/// Resolve a pipeline from a single current status.
///
/// Used where the backend reports no history, only the status an entity is
/// in now and when it was created. Every step up to and including the
/// current one is completed and described by `created_at`. The status goes
/// through the synonym table first; an unmapped status is compared against
/// step labels directly. An unknown status leaves every step pending.
pub fn resolve_current_status(
    pipeline: &PipelineDefinition,
    status: &str,
    created_at: i64,
    options: &ResolveOptions,
) -> Vec<ResolvedStep> {
    let label = pipeline.canonical(status).unwrap_or(status);
    let current = pipeline.step_index(label);
    if current.is_none() {
        trace!(pipeline = pipeline.name(), status, "status matches no step");
    }

    pipeline
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| match current {
            Some(current) if index <= current => ResolvedStep::completed(
                step,
                index == current,
                options.formatter.format(created_at),
            ),
            _ => ResolvedStep::pending(step),
        })
        .collect()
}

/// Summary of a resolved pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineProgress {
    pub completed: usize,
    pub total: usize,
    /// Label of the current step, if any
    pub current: Option<String>,
    /// Whether the last step is completed
    pub finished: bool,
}

impl PipelineProgress {
    pub fn from_steps(steps: &[ResolvedStep]) -> Self {
        PipelineProgress {
            completed: steps.iter().filter(|s| s.is_completed).count(),
            total: steps.len(),
            current: steps.iter().find(|s| s.is_current).map(|s| s.label.clone()),
            finished: steps.last().is_some_and(|s| s.is_completed),
        }
    }
}
