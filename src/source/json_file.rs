//! Status source backed by an exported backend record

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::DomainKind;
use crate::errors::{Result, TracklineError};
use crate::fs;
use crate::schemas::{StatusEvent, TrackedRecord};

use super::{StatusHistory, StatusHistorySource, StatusUpdater};

/// One backend record saved as JSON.
///
/// Status updates are appended to the record and written back to the file.
#[derive(Debug)]
pub struct JsonRecordSource {
    path: PathBuf,
    kind: DomainKind,
    record: TrackedRecord,
}

impl JsonRecordSource {
    /// Read the record of the given domain from `path`
    pub fn open(path: impl AsRef<Path>, kind: DomainKind) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let record = fs::read_record(&path, kind)?;
        debug!(path = %path.display(), %kind, id = record.id(), "loaded record");
        Ok(JsonRecordSource { path, kind, record })
    }

    pub fn record(&self) -> &TrackedRecord {
        &self.record
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check(&self, kind: DomainKind, id: &str) -> Result<()> {
        if kind != self.kind || id != self.record.id() {
            return Err(TracklineError::EntityNotFound(format!(
                "{} {} is not in {}",
                kind,
                id,
                self.path.display()
            )));
        }
        Ok(())
    }
}

impl StatusHistorySource for JsonRecordSource {
    fn status_history(&self, kind: DomainKind, id: &str) -> Result<StatusHistory> {
        self.check(kind, id)?;
        Ok(StatusHistory::of(&self.record))
    }
}

impl StatusUpdater for JsonRecordSource {
    fn update_status(&mut self, kind: DomainKind, id: &str, status: &str) -> Result<()> {
        self.check(kind, id)?;

        // Only adopt the new record once it is on disk
        let mut record = self.record.clone();
        record.set_status(status);
        if let Some(history) = record.history_mut() {
            history.push(StatusEvent::now(status));
        }
        fs::write_record(&self.path, &record)?;
        self.record = record;
        Ok(())
    }
}
