//! Schema types for trackline
//!
//! All types mirror the JSON the backend and config files use.

mod config;
mod event;
mod pipeline;
mod records;

pub use config::{Config, EventOrder};
pub use event::StatusEvent;
pub use pipeline::{FallbackRule, PipelineSpec, ResolvedStep, StepDefinition};
pub use records::{
    Charge, Country, PickupRequest, QuotationItem, Shipment, ShipmentStatus, ShoppingRequest,
    TrackedRecord,
};
