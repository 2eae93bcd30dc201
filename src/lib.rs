//! Trackline - Resolve status histories into customer-facing tracking steps
//!
//! This library provides the core functionality for the trackline CLI, including:
//! - Schema definitions for status events, pipelines, records and config
//! - The pipeline resolver and the built-in shopping, pickup and shipment pipelines
//! - Status sources that supply histories and accept status updates
//! - File system utilities for reading/writing JSON

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod source;

// Re-export commonly used types
pub use domain::{
    resolve_current_status, resolve_pipeline, DomainKind, PipelineDefinition, PipelineRegistry,
    ResolveOptions, StatusSynonymTable,
};
pub use errors::{Result, TracklineError};
pub use schemas::{Config, ResolvedStep, StatusEvent, StepDefinition};
