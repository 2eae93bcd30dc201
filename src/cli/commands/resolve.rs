//! Resolve command - Show the tracking steps of a backend record

use std::path::Path;

use tracing::info;

use crate::cli::output::{to_json, TrackingView};
use crate::cli::Context;
use crate::domain::DomainKind;
use crate::errors::Result;
use crate::source::{resolve_record, JsonRecordSource};

/// Load a record and resolve it against its pipeline
pub fn build_view(
    ctx: &Context,
    domain: &str,
    file: &Path,
    pipeline: Option<&str>,
    chronological: bool,
) -> Result<TrackingView> {
    let kind: DomainKind = domain.parse()?;
    let pipeline = ctx.pipeline(kind, pipeline)?;
    let source = JsonRecordSource::open(file, kind)?;

    let steps = resolve_record(pipeline, source.record(), &ctx.options(chronological));
    Ok(TrackingView::new(kind, pipeline, source.record(), steps))
}

/// Print the tracking steps of a record
pub fn run(
    ctx: &Context,
    domain: &str,
    file: &Path,
    pipeline: Option<&str>,
    chronological: bool,
    json: bool,
) -> Result<()> {
    let view = build_view(ctx, domain, file, pipeline, chronological)?;
    info!(
        pipeline = %view.pipeline,
        id = %view.id,
        completed = view.progress.completed,
        total = view.progress.total,
        "resolved record"
    );

    if json {
        println!("{}", to_json(&view)?);
    } else {
        print!("{}", view.render_text());
    }
    Ok(())
}
