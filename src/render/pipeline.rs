//! The render pipeline: tokenize, paginate, compose, serialize.

use super::options::{format_generated_at, RenderOptions};
use crate::compose::{compose_pages, PageChrome};
use crate::error::Result;
use crate::layout::{Paginator, Tokenizer};
use crate::model::LayoutPlan;
use crate::pdf;
use rayon::prelude::*;

/// One document to render in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Narrative text
    pub narrative: String,

    /// Subject (company) name
    pub subject: String,
}

impl RenderJob {
    pub fn new(narrative: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
            subject: subject.into(),
        }
    }
}

/// Tokenize and paginate a narrative.
pub fn plan_layout(narrative: &str, options: &RenderOptions) -> Result<LayoutPlan> {
    options.geometry.validate()?;

    let tokens = Tokenizer::new(&options.geometry, &options.typography).tokenize(narrative);
    Ok(Paginator::new(&options.geometry).paginate(&tokens))
}

/// Render a narrative into PDF bytes.
pub fn render(narrative: &str, subject: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    let plan = plan_layout(narrative, options)?;
    render_plan(&plan, subject, options)
}

/// Render an already paginated plan into PDF bytes.
pub fn render_plan(plan: &LayoutPlan, subject: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    let generated_at = format_generated_at(options.resolve_generated_at());
    let chrome = PageChrome::new(subject, generated_at).with_title(options.title.clone());

    let streams: Vec<Vec<u8>> =
        compose_pages(plan, &options.geometry, &options.typography, &chrome)
            .iter()
            .map(|stream| stream.encode())
            .collect();

    let graph = pdf::assemble(&streams, &options.geometry, options.compression)?;
    let bytes = pdf::to_bytes(&graph)?;

    log::debug!(
        "Rendered {} pages for '{}' into {} bytes",
        plan.page_count(),
        subject,
        bytes.len()
    );

    Ok(bytes)
}

/// Render independent documents in parallel.
///
/// Results are returned in job order. When `options` carries no timestamp,
/// every job shares the time at which the batch started.
pub fn render_batch(jobs: &[RenderJob], options: &RenderOptions) -> Vec<Result<Vec<u8>>> {
    let options = options
        .clone()
        .with_generated_at(options.resolve_generated_at());

    jobs.par_iter()
        .map(|job| render(&job.narrative, &job.subject, &options))
        .collect()
}
