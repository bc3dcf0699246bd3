//! Page composition into content-stream instructions.
//!
//! Layout code produces [`Instruction`] values; the content-stream syntax
//! is only produced by [`PageStream::encode`].

mod ops;
mod page;

pub use ops::{FontFace, Instruction, Num, PageStream, Rect, Rgb};
pub use page::{
    PageChrome, PageCompositor, BANNER_SUBJECT_CHARS, DEFAULT_TITLE, FOOTER_SUBJECT_CHARS,
    META_GENERATED_CHARS, META_SUBJECT_CHARS,
};

use crate::layout::{Geometry, Typography};
use crate::model::LayoutPlan;

/// Compose every page of a layout plan.
pub fn compose_pages(
    plan: &LayoutPlan,
    geometry: &Geometry,
    typography: &Typography,
    chrome: &PageChrome,
) -> Vec<PageStream> {
    let compositor = PageCompositor::new(geometry, typography, chrome);
    let total = plan.page_count();
    plan.pages
        .iter()
        .map(|page| compositor.compose(page, total))
        .collect()
}
