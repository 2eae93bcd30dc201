//! Status event schema - One entry of an entity's status history

use serde::{Deserialize, Deserializer, Serialize};

/// A timestamped record of a status transition, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// Raw backend status code (e.g. "QUOTATION_READY")
    pub status: String,

    /// Unix epoch seconds. The backend sends either a number or a numeric
    /// string; a missing value reads as 0.
    #[serde(default, deserialize_with = "deserialize_epoch_seconds")]
    pub created_at: i64,
}

impl StatusEvent {
    /// Create an event with an explicit timestamp
    pub fn new(status: impl Into<String>, created_at: i64) -> Self {
        StatusEvent {
            status: status.into(),
            created_at,
        }
    }

    /// Create an event stamped with the current time
    pub fn now(status: impl Into<String>) -> Self {
        StatusEvent::new(status, chrono::Utc::now().timestamp())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEpoch {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accept epoch seconds as an integer, a float or a numeric string.
///
/// `null` and the empty string read as 0.
pub(crate) fn deserialize_epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<RawEpoch>::deserialize(deserializer)? {
        None => Ok(0),
        Some(RawEpoch::Int(secs)) => Ok(secs),
        Some(RawEpoch::Float(secs)) => Ok(secs.trunc() as i64),
        Some(RawEpoch::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(0);
            }
            text.parse::<i64>()
                .or_else(|_| text.parse::<f64>().map(|secs| secs.trunc() as i64))
                .map_err(|_| D::Error::custom(format!("invalid epoch timestamp: {}", text)))
        }
    }
}
