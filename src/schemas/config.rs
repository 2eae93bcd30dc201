//! Config schema - Configuration for trackline

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::pipeline::PipelineSpec;

/// How status events are ordered before the current step is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventOrder {
    /// Use the list exactly as the backend returned it; the last element is current
    #[default]
    AsGiven,
    /// The event with the latest `created_at` is current
    Chronological,
}

/// Main configuration for trackline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Offset from UTC, in minutes, used when formatting timestamps
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Event ordering used when resolving pipelines
    #[serde(default)]
    pub event_order: EventOrder,

    /// Extra or overriding pipelines, keyed by name
    #[serde(default)]
    pub pipelines: BTreeMap<String, PipelineSpec>,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            utc_offset_minutes: 0,
            event_order: EventOrder::AsGiven,
            pipelines: BTreeMap::new(),
        }
    }
}
