//! Paginated layout types.

use super::Token;
use serde::{Deserialize, Serialize};

/// A token assigned to a page and a baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedToken {
    /// The layout token
    pub token: Token,

    /// Zero-based page index
    pub page_index: usize,

    /// Baseline y coordinate in points (origin at the page bottom)
    pub y: f32,
}

impl PlacedToken {
    /// Lowest point reached by the token.
    pub fn bottom(&self) -> f32 {
        self.y - self.token.height()
    }
}

/// One page worth of placed tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacedPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Placed tokens in reading order
    pub tokens: Vec<PlacedToken>,
}

impl PlacedPage {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            tokens: Vec::new(),
        }
    }

    /// Check if this is the first page of the document.
    pub fn is_first(&self) -> bool {
        self.number == 1
    }

    /// Check if the page holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens that produce visible marks.
    pub fn visible_tokens(&self) -> impl Iterator<Item = &PlacedToken> {
        self.tokens.iter().filter(|placed| !placed.token.is_spacer())
    }
}

/// The full output of tokenization and pagination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// Pages in order
    pub pages: Vec<PlacedPage>,
}

impl LayoutPlan {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Iterate over every placed token across pages.
    pub fn tokens(&self) -> impl Iterator<Item = &PlacedToken> {
        self.pages.iter().flat_map(|page| page.tokens.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_token_bottom() {
        let placed = PlacedToken {
            token: Token::paragraph("text"),
            page_index: 0,
            y: 618.0,
        };
        assert_eq!(placed.bottom(), 603.0);
    }

    #[test]
    fn test_visible_tokens_skip_spacers() {
        let mut page = PlacedPage::new(1);
        for (token, y) in [
            (Token::heading("Recommendation"), 618.0),
            (Token::Spacer, 594.0),
            (Token::paragraph("Approve."), 586.0),
        ] {
            page.tokens.push(PlacedToken {
                token,
                page_index: 0,
                y,
            });
        }

        assert!(page.is_first());
        assert_eq!(page.visible_tokens().count(), 2);
    }
}
