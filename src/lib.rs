//! # casedoc
//!
//! Business-case document synthesis for Rust.
//!
//! This library turns a plain-text business-case narrative into a styled,
//! paginated PDF 1.4 file without any external rendering library: text is
//! tokenized and word-wrapped, placed onto pages, composed into content
//! streams and serialized with an exact cross-reference table.
//!
//! ## Quick Start
//!
//! ```no_run
//! use casedoc::render_business_case;
//!
//! fn main() -> casedoc::Result<()> {
//!     let narrative = "Executive Summary\nAll good.\n\nRecommendation\nApprove.";
//!     let pdf = render_business_case(narrative, "Acme Co")?;
//!     std::fs::write("business-case.pdf", pdf)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading recognition**: Executive Summary, Financial Case, Strategic
//!   Impact and Recommendation, case-insensitive with optional colon
//! - **Greedy word wrap** using an average glyph width estimate
//! - **Page chrome**: banner, metadata boxes and footer on every page
//! - **Deterministic output** for a pinned generation timestamp
//! - **Optional stream compression** with Flate
//! - **Structural inspection** of produced files

pub mod compose;
pub mod error;
pub mod inspect;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use inspect::{detect_format_from_bytes, inspect_bytes, inspect_file, PdfFormat, PdfReport};
pub use layout::{Geometry, Typography};
pub use model::{LayoutPlan, PlacedPage, PlacedToken, Token, TokenKind};
pub use pdf::Compression;
pub use render::{format_generated_at, JsonFormat, RenderJob, RenderOptions};

use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Render a narrative into PDF bytes, stamped with the current time.
///
/// # Arguments
///
/// * `narrative` - Plain prose with blank-line separated paragraphs
/// * `subject` - Display name printed in the banner, metadata box and footer
///
/// # Example
///
/// ```no_run
/// use casedoc::render_business_case;
///
/// let pdf = render_business_case("Recommendation\nApprove.", "Acme Co").unwrap();
/// assert!(pdf.starts_with(b"%PDF-1.4"));
/// ```
pub fn render_business_case(narrative: &str, subject: &str) -> Result<Vec<u8>> {
    render::render(narrative, subject, &RenderOptions::default())
}

/// Render a narrative with custom options.
///
/// # Example
///
/// ```no_run
/// use casedoc::{render_business_case_with_options, RenderOptions};
///
/// let options = RenderOptions::new().with_title("Capital Request").compressed();
/// let pdf = render_business_case_with_options("Approve.", "Acme Co", &options).unwrap();
/// ```
pub fn render_business_case_with_options(
    narrative: &str,
    subject: &str,
    options: &RenderOptions,
) -> Result<Vec<u8>> {
    render::render(narrative, subject, options)
}

/// Tokenize and paginate a narrative without producing a PDF.
pub fn plan_layout(narrative: &str) -> Result<LayoutPlan> {
    render::plan_layout(narrative, &RenderOptions::default())
}

/// Builder for rendering business-case documents.
///
/// # Example
///
/// ```no_run
/// use casedoc::{Casedoc, Geometry};
///
/// Casedoc::new()
///     .with_title("Capital Request")
///     .with_geometry(Geometry::a4())
///     .compressed()
///     .render_to_file("Recommendation\nApprove.", "Acme Co", "case.pdf")?;
/// # Ok::<(), casedoc::Error>(())
/// ```
pub struct Casedoc {
    options: RenderOptions,
}

impl Casedoc {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Set the banner title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_title(title);
        self
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.options = self.options.with_geometry(geometry);
        self
    }

    /// Set the typography.
    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.options = self.options.with_typography(typography);
        self
    }

    /// Pin the generation timestamp.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.options = self.options.with_generated_at(generated_at);
        self
    }

    /// Deflate content streams.
    pub fn compressed(mut self) -> Self {
        self.options = self.options.compressed();
        self
    }

    /// Get the accumulated options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Tokenize and paginate a narrative.
    pub fn plan(&self, narrative: &str) -> Result<LayoutPlan> {
        render::plan_layout(narrative, &self.options)
    }

    /// Render a narrative into PDF bytes.
    pub fn render(&self, narrative: &str, subject: &str) -> Result<Vec<u8>> {
        render::render(narrative, subject, &self.options)
    }

    /// Render an already paginated plan into PDF bytes.
    pub fn render_plan(&self, plan: &LayoutPlan, subject: &str) -> Result<Vec<u8>> {
        render::render_plan(plan, subject, &self.options)
    }

    /// Render a narrative and write the PDF to `path`.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        narrative: &str,
        subject: &str,
        path: P,
    ) -> Result<usize> {
        let bytes = self.render(narrative, subject)?;
        fs::write(path, &bytes)?;
        Ok(bytes.len())
    }

    /// Render several documents in parallel.
    pub fn render_batch(&self, jobs: &[RenderJob]) -> Vec<Result<Vec<u8>>> {
        render::render_batch(jobs, &self.options)
    }
}

impl Default for Casedoc {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_casedoc_builder() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        let builder = Casedoc::new()
            .with_title("Capital Request")
            .with_generated_at(at)
            .compressed();

        assert_eq!(builder.options().title, "Capital Request");
        assert_eq!(builder.options().generated_at, Some(at));
        assert_eq!(builder.options().compression, Compression::Flate);
    }

    #[test]
    fn test_casedoc_builder_default() {
        let builder = Casedoc::default();
        assert!(builder.options().generated_at.is_none());
        assert_eq!(builder.options().geometry, Geometry::letter());
    }

    #[test]
    fn test_plan_layout_empty_input() {
        let plan = plan_layout("").unwrap();
        assert_eq!(plan.page_count(), 1);
        assert_eq!(plan.pages[0].tokens.len(), 1);
    }

    #[test]
    fn test_casedoc_render_plan_matches_render() {
        let builder =
            Casedoc::new().with_generated_at(Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap());
        let narrative = "Strategic Impact\nShorter cycle times.";

        let plan = builder.plan(narrative).unwrap();
        let from_plan = builder.render_plan(&plan, "Acme Co").unwrap();
        assert_eq!(from_plan, builder.render(narrative, "Acme Co").unwrap());
    }

    #[test]
    fn test_render_business_case_inspects_clean() {
        let pdf = render_business_case("Financial Case\nROI is 42%.", "Acme Co").unwrap();
        let report = inspect_bytes(&pdf).unwrap();
        assert_eq!(report.format.version, "1.4");
        assert_eq!(report.page_count, Some(1));
        assert_eq!(report.object_count, 6);
    }
}
