//! Update command - Move a record to a new status

use std::path::Path;

use tracing::{info, warn};

use crate::cli::output::{to_json, TrackingView};
use crate::cli::Context;
use crate::domain::DomainKind;
use crate::errors::Result;
use crate::source::{resolve_record, JsonRecordSource, StatusUpdater};

/// Apply a status update to a record file and return the new view
pub fn apply(ctx: &Context, domain: &str, file: &Path, status: &str) -> Result<TrackingView> {
    let kind: DomainKind = domain.parse()?;
    let pipeline = ctx.registry.for_domain(kind)?;
    let mut source = JsonRecordSource::open(file, kind)?;

    if pipeline.canonical(status).is_none() && pipeline.step_index(status).is_none() {
        warn!(pipeline = pipeline.name(), status, "status matches no tracking step");
    }

    let id = source.record().id().to_string();
    source.update_status(kind, &id, status)?;
    info!(%kind, id = %id, status, path = %source.path().display(), "status updated");

    let steps = resolve_record(pipeline, source.record(), &ctx.options(false));
    Ok(TrackingView::new(kind, pipeline, source.record(), steps))
}

/// Update a record's status and print the resulting steps
pub fn run(ctx: &Context, domain: &str, file: &Path, status: &str, json: bool) -> Result<()> {
    let view = apply(ctx, domain, file, status)?;
    if !view.deletable {
        info!(id = %view.id, "record can no longer be deleted");
    }

    if json {
        println!("{}", to_json(&view)?);
    } else {
        print!("{}", view.render_text());
    }
    Ok(())
}
