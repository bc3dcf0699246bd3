//! Rendering pipeline, options and layout-plan output.

mod json;
mod options;
mod pipeline;

pub use json::{to_json, JsonFormat};
pub use options::{format_generated_at, RenderOptions};
pub use pipeline::{plan_layout, render, render_batch, render_plan, RenderJob};
