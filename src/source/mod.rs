//! Status sources: where status histories come from and where updates go
//!
//! The backend API is an external collaborator. These traits are the seam it
//! is reached through; the resolver itself never touches a source.

mod json_file;
mod memory;

pub use json_file::JsonRecordSource;
pub use memory::{MemorySource, StatusUpdate};

use tracing::debug;

use crate::domain::{
    resolve_current_status, resolve_pipeline, DomainKind, PipelineDefinition, ResolveOptions,
};
use crate::errors::Result;
use crate::schemas::{ResolvedStep, StatusEvent, TrackedRecord};

/// What a source knows about an entity's status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusHistory {
    /// Every status change, in the order the backend returned them
    Events(Vec<StatusEvent>),
    /// Only the status the entity is in now (shipments)
    Current { status: String, created_at: i64 },
}

impl StatusHistory {
    pub fn of(record: &TrackedRecord) -> Self {
        match record.history() {
            Some(events) => StatusHistory::Events(events.to_vec()),
            None => StatusHistory::Current {
                status: record.status().to_string(),
                created_at: record.created_at(),
            },
        }
    }

    /// Resolve through [`resolve_pipeline`] or [`resolve_current_status`]
    pub fn resolve(
        &self,
        pipeline: &PipelineDefinition,
        options: &ResolveOptions,
    ) -> Vec<ResolvedStep> {
        match self {
            StatusHistory::Events(events) => resolve_pipeline(pipeline, events, options),
            StatusHistory::Current { status, created_at } => {
                resolve_current_status(pipeline, status, *created_at, options)
            }
        }
    }
}

/// Provides the status history of an entity
pub trait StatusHistorySource {
    /// Status history for an entity
    ///
    /// # Errors
    /// * `EntityNotFound` - If the source has no such entity
    fn status_history(&self, kind: DomainKind, id: &str) -> Result<StatusHistory>;
}

/// Submits status transitions to the backend
pub trait StatusUpdater {
    /// Move an entity to a new status
    fn update_status(&mut self, kind: DomainKind, id: &str, status: &str) -> Result<()>;
}

/// Resolve a record the way its domain is displayed.
///
/// Records with a status history go through [`resolve_pipeline`]; shipments,
/// which only report a current status, go through [`resolve_current_status`].
pub fn resolve_record(
    pipeline: &PipelineDefinition,
    record: &TrackedRecord,
    options: &ResolveOptions,
) -> Vec<ResolvedStep> {
    match record.history() {
        Some(events) => resolve_pipeline(pipeline, events, options),
        None => resolve_current_status(pipeline, record.status(), record.created_at(), options),
    }
}

/// Fetch an entity's history from a source and resolve it
pub fn resolve_entity<S: StatusHistorySource + ?Sized>(
    source: &S,
    pipeline: &PipelineDefinition,
    kind: DomainKind,
    id: &str,
    options: &ResolveOptions,
) -> Result<Vec<ResolvedStep>> {
    let history = source.status_history(kind, id)?;
    debug!(%kind, id, "resolving status history");
    Ok(history.resolve(pipeline, options))
}
