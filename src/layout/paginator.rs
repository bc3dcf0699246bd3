//! Places tokens onto pages of bounded vertical extent.

use super::geometry::Geometry;
use crate::model::{LayoutPlan, PlacedPage, PlacedToken, Token};

/// Assigns each token a page and a baseline.
///
/// The first page starts lower than continuation pages because of its
/// taller banner and metadata boxes.
#[derive(Debug, Clone)]
pub struct Paginator {
    floor_y: f32,
    first_start_y: f32,
    continuation_start_y: f32,
}

impl Paginator {
    /// Create a paginator for the given geometry.
    pub fn new(geometry: &Geometry) -> Self {
        Self {
            floor_y: geometry.content_floor_y(),
            first_start_y: geometry.first_content_start_y(),
            continuation_start_y: geometry.continuation_content_start_y(),
        }
    }

    /// Place tokens in order. Always yields at least one page.
    pub fn paginate(&self, tokens: &[Token]) -> LayoutPlan {
        let mut pages = vec![PlacedPage::new(1)];
        let mut y = self.first_start_y;

        for token in tokens {
            let height = token.height();
            let page_has_content = pages.last().is_some_and(|page| !page.is_empty());

            if y - height < self.floor_y && page_has_content {
                let number = pages.len() as u32 + 1;
                pages.push(PlacedPage::new(number));
                y = self.continuation_start_y;
            }

            if y - height < self.floor_y {
                log::warn!(
                    "Token of height {} overflows the content floor at y={} on page {}",
                    height,
                    y,
                    pages.len()
                );
            }

            let page_index = pages.len() - 1;
            if let Some(page) = pages.last_mut() {
                page.tokens.push(PlacedToken {
                    token: token.clone(),
                    page_index,
                    y,
                });
            }
            y -= height;
        }

        log::debug!(
            "Paginated {} tokens onto {} pages",
            tokens.len(),
            pages.len()
        );

        LayoutPlan { pages }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(&Geometry::default())
    }
}
