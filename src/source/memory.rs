//! In-memory status source

use std::collections::HashMap;

use tracing::debug;

use crate::domain::DomainKind;
use crate::errors::{Result, TracklineError};
use crate::schemas::{StatusEvent, TrackedRecord};

use super::{StatusHistory, StatusHistorySource, StatusUpdater};

/// A status update submitted through [`StatusUpdater`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub kind: DomainKind,
    pub id: String,
    pub status: String,
}

/// Records held in memory, keyed by domain and id.
///
/// Updates append a history event stamped with the current time and are
/// also kept in submission order for inspection.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: HashMap<(DomainKind, String), TrackedRecord>,
    updates: Vec<StatusUpdate>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a record
    pub fn insert(&mut self, kind: DomainKind, record: TrackedRecord) {
        self.records.insert((kind, record.id().to_string()), record);
    }

    pub fn get(&self, kind: DomainKind, id: &str) -> Option<&TrackedRecord> {
        self.records.get(&(kind, id.to_string()))
    }

    /// Updates submitted so far, oldest first
    pub fn updates(&self) -> &[StatusUpdate] {
        &self.updates
    }

    fn not_found(kind: DomainKind, id: &str) -> TracklineError {
        TracklineError::EntityNotFound(format!("{} {}", kind, id))
    }
}

impl StatusHistorySource for MemorySource {
    fn status_history(&self, kind: DomainKind, id: &str) -> Result<StatusHistory> {
        self.get(kind, id)
            .map(StatusHistory::of)
            .ok_or_else(|| Self::not_found(kind, id))
    }
}

impl StatusUpdater for MemorySource {
    fn update_status(&mut self, kind: DomainKind, id: &str, status: &str) -> Result<()> {
        let record = self
            .records
            .get_mut(&(kind, id.to_string()))
            .ok_or_else(|| Self::not_found(kind, id))?;

        record.set_status(status);
        if let Some(history) = record.history_mut() {
            history.push(StatusEvent::now(status));
        }
        debug!(%kind, id, status, "status updated");

        self.updates.push(StatusUpdate {
            kind,
            id: id.to_string(),
            status: status.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{pickup_request_pipeline, ResolveOptions};
    use crate::schemas::PickupRequest;
    use crate::source::resolve_entity;

    fn pickup(id: &str) -> TrackedRecord {
        TrackedRecord::Pickup(PickupRequest {
            id: id.to_string(),
            status: "QUOTED".to_string(),
            price: Some(40.0),
            tracking_requests: vec![
                StatusEvent::new("REQUESTED", 1700000000),
                StatusEvent::new("QUOTED", 1700003600),
            ],
            created_at: 1700000000,
        })
    }

    #[test]
    fn test_history_for_known_entity() {
        let mut source = MemorySource::new();
        source.insert(DomainKind::PickupRequest, pickup("pr-1"));

        let history = source.status_history(DomainKind::PickupRequest, "pr-1").unwrap();
        let StatusHistory::Events(events) = history else {
            panic!("expected an event history");
        };
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].status, "QUOTED");
    }

    #[test]
    fn test_history_is_scoped_by_domain() {
        let mut source = MemorySource::new();
        source.insert(DomainKind::PickupRequest, pickup("pr-1"));

        let err = source.status_history(DomainKind::ShoppingRequest, "pr-1").unwrap_err();
        assert_eq!(err.code(), "ENTITY_NOT_FOUND");
    }

    #[test]
    fn test_update_appends_event_and_records_call() {
        let mut source = MemorySource::new();
        source.insert(DomainKind::PickupRequest, pickup("pr-1"));

        source.update_status(DomainKind::PickupRequest, "pr-1", "CONFIRMED").unwrap();

        let record = source.get(DomainKind::PickupRequest, "pr-1").unwrap();
        assert_eq!(record.status(), "CONFIRMED");
        assert_eq!(record.history().unwrap().last().unwrap().status, "CONFIRMED");
        assert_eq!(
            source.updates(),
            &[StatusUpdate {
                kind: DomainKind::PickupRequest,
                id: "pr-1".to_string(),
                status: "CONFIRMED".to_string(),
            }]
        );
    }

    #[test]
    fn test_update_unknown_entity() {
        let mut source = MemorySource::new();
        let err = source.update_status(DomainKind::Shipment, "pkg-9", "Departed").unwrap_err();
        assert_eq!(err.code(), "ENTITY_NOT_FOUND");
        assert!(source.updates().is_empty());
    }

    #[test]
    fn test_confirmed_pickup_resolves_to_confirmed_step() {
        let mut source = MemorySource::new();
        source.insert(DomainKind::PickupRequest, pickup("pr-1"));
        source.update_status(DomainKind::PickupRequest, "pr-1", "CONFIRMED").unwrap();

        let steps = resolve_entity(
            &source,
            &pickup_request_pipeline(),
            DomainKind::PickupRequest,
            "pr-1",
            &ResolveOptions::default(),
        )
        .unwrap();
        assert!(steps[2].is_completed);
        assert!(steps[2].is_current);
        assert!(!steps[3].is_completed);
    }
}
