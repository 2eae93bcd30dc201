//! Domain logic for status pipelines

mod datetime;
mod pipelines;
mod quotation;
mod resolver;
mod status;
mod synonyms;


pub use datetime::{DateFormatter, DISPLAY_FORMAT};
pub use pipelines::{
    builtin_pipeline, pickup_request_pipeline, shipment_pipeline, shopping_request_pipeline,
    DomainKind, PipelineDefinition, PipelineRegistry,
};
pub use quotation::{QuotationSummary, COMMISSION_RATE};
pub use resolver::{resolve_current_status, resolve_pipeline, PipelineProgress, ResolveOptions};
pub use status::{
    is_cancelled, is_deletable, status_message, status_message_or_default, CANCELLED,
    NO_UPDATES_MESSAGE,
};
pub use synonyms::StatusSynonymTable;
