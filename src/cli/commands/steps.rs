//! Steps command - Show a pipeline definition

use crate::cli::output::to_json;
use crate::cli::Context;
use crate::domain::PipelineDefinition;
use crate::errors::Result;

/// Plain-text listing of a pipeline's steps and the codes that reach them
pub fn render(pipeline: &PipelineDefinition) -> String {
    let mut out = format!("{}\n", pipeline.name());
    for (index, step) in pipeline.steps().iter().enumerate() {
        let codes = pipeline.synonyms().codes_for(&step.label);
        out.push_str(&format!("  {}. {} - {}\n", index + 1, step.label, step.default_description));
        if !codes.is_empty() {
            out.push_str(&format!("     codes: {}\n", codes.join(", ")));
        }
    }
    for rule in pipeline.fallback_rules() {
        out.push_str(&format!("  fallback: {} <- {}\n", rule.target, rule.evidence));
    }
    out
}

/// Print a pipeline by domain or name
pub fn run(ctx: &Context, name: &str, json: bool) -> Result<()> {
    let pipeline = ctx.pipeline_by_name(name)?;
    if json {
        println!("{}", to_json(&pipeline.to_spec())?);
    } else {
        print!("{}", render(pipeline));
    }
    Ok(())
}
