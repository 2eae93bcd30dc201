//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::DomainKind;
use crate::errors::{Result, TracklineError};
use crate::schemas::{Config, PickupRequest, Shipment, ShoppingRequest, TrackedRecord};

use super::paths::get_config_path;

/// Read a file to a string, mapping a missing file to `FileNotFound`.
fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TracklineError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            TracklineError::Io(e)
        }
    })
}

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_text(path)?;

    serde_json::from_str(&content).map_err(|e| {
        TracklineError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| TracklineError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read the config.json file for a project.
///
/// Returns the default config if the file doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Read a backend record of the given domain from a JSON file.
///
/// The file may hold the record itself or, as the packages-by-shipment
/// endpoint returns, an array whose first element is the record.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not JSON
/// * `EntityNotFound` - If the file holds an empty array
/// * `SchemaValidation` - If the JSON is not a record of that domain
pub fn read_record(path: &Path, kind: DomainKind) -> Result<TrackedRecord> {
    let content = read_text(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|e| {
        TracklineError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })?;

    let value = match value {
        Value::Array(items) => items.into_iter().next().ok_or_else(|| {
            TracklineError::EntityNotFound(format!("{} holds no {} record", path.display(), kind))
        })?,
        other => other,
    };

    record_from_value(value, kind).map_err(|e| {
        TracklineError::SchemaValidation(format!(
            "{} is not a valid {} record: {}",
            path.display(),
            kind,
            e
        ))
    })
}

/// Write a record back to a JSON file
pub fn write_record(path: &Path, record: &TrackedRecord) -> Result<()> {
    write_json(path, record)
}

fn record_from_value(value: Value, kind: DomainKind) -> serde_json::Result<TrackedRecord> {
    Ok(match kind {
        DomainKind::ShoppingRequest => {
            TrackedRecord::Shopping(serde_json::from_value::<ShoppingRequest>(value)?)
        }
        DomainKind::PickupRequest => {
            TrackedRecord::Pickup(serde_json::from_value::<PickupRequest>(value)?)
        }
        DomainKind::Shipment => TrackedRecord::Shipment(serde_json::from_value::<Shipment>(value)?),
    })
}
