//! Page geometry and typography.
//!
//! Every coordinate used by the tokenizer, paginator and compositor is
//! derived from a [`Geometry`] value. Coordinates are PDF points with the
//! origin at the bottom-left corner of the page.

use crate::error::{Error, Result};

/// Immutable page geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Page width in points
    pub page_width: f32,

    /// Page height in points
    pub page_height: f32,

    /// Outer margin between the page edge and the card
    pub margin: f32,

    /// Horizontal inset of the content band inside the card
    pub card_inset: f32,

    /// Distance from the card bottom to the content floor
    pub floor_offset: f32,

    /// Banner height on the first page
    pub first_banner_height: f32,

    /// Banner height on continuation pages
    pub continuation_banner_height: f32,

    /// Gap between the first-page banner and the first baseline
    pub first_content_gap: f32,

    /// Gap between the continuation banner and the first baseline
    pub continuation_content_gap: f32,
}

impl Geometry {
    /// Create a geometry for the given page size with default offsets.
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            ..Self::letter()
        }
    }

    /// US Letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 34.0,
            card_inset: 28.0,
            floor_offset: 66.0,
            first_banner_height: 82.0,
            continuation_banner_height: 54.0,
            first_content_gap: 58.0,
            continuation_content_gap: 30.0,
        }
    }

    /// A4 (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// Reject geometries that cannot hold any content.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("page width", self.page_width),
            ("page height", self.page_height),
            ("margin", self.margin),
            ("card inset", self.card_inset),
            ("floor offset", self.floor_offset),
            ("first banner height", self.first_banner_height),
            ("continuation banner height", self.continuation_banner_height),
            ("first content gap", self.first_content_gap),
            ("continuation content gap", self.continuation_content_gap),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.content_width() <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "content band is empty for page width {}",
                self.page_width
            )));
        }
        if self.first_content_start_y() <= self.content_floor_y()
            || self.continuation_content_start_y() <= self.content_floor_y()
        {
            return Err(Error::InvalidConfig(format!(
                "no vertical space between banner and floor for page height {}",
                self.page_height
            )));
        }

        Ok(())
    }

    pub fn card_x(&self) -> f32 {
        self.margin
    }

    pub fn card_y(&self) -> f32 {
        self.margin
    }

    pub fn card_width(&self) -> f32 {
        self.page_width - self.margin * 2.0
    }

    pub fn card_height(&self) -> f32 {
        self.page_height - self.margin * 2.0
    }

    pub fn card_top(&self) -> f32 {
        self.card_y() + self.card_height()
    }

    pub fn content_x(&self) -> f32 {
        self.card_x() + self.card_inset
    }

    pub fn content_width(&self) -> f32 {
        self.card_width() - self.card_inset * 2.0
    }

    /// Lowest y any placed token may reach.
    pub fn content_floor_y(&self) -> f32 {
        self.card_y() + self.floor_offset
    }

    /// Banner height for the given page.
    pub fn banner_height(&self, first_page: bool) -> f32 {
        if first_page {
            self.first_banner_height
        } else {
            self.continuation_banner_height
        }
    }

    pub fn first_content_start_y(&self) -> f32 {
        self.card_top() - self.first_banner_height - self.first_content_gap
    }

    pub fn continuation_content_start_y(&self) -> f32 {
        self.card_top() - self.continuation_banner_height - self.continuation_content_gap
    }

    /// First baseline for the given page.
    pub fn content_start_y(&self, first_page: bool) -> f32 {
        if first_page {
            self.first_content_start_y()
        } else {
            self.continuation_content_start_y()
        }
    }

    /// Media box as `[x0, y0, x1, y1]`.
    pub fn media_box(&self) -> [f32; 4] {
        [0.0, 0.0, self.page_width, self.page_height]
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::letter()
    }
}

/// Font sizes and the line-length heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    /// Body text size in points
    pub body_size: f32,

    /// Heading text size in points
    pub heading_size: f32,

    /// Average glyph width as a fraction of the font size
    pub glyph_width_factor: f32,

    /// Lower bound for the characters-per-line estimate
    pub min_chars_per_line: usize,
}

impl Typography {
    /// Estimate how many characters fit in `width` at `font_size`.
    pub fn max_chars_for_width(&self, width: f32, font_size: f32) -> usize {
        let estimate = (width / (font_size * self.glyph_width_factor)).floor();
        if estimate.is_finite() && estimate > 0.0 {
            (estimate as usize).max(self.min_chars_per_line)
        } else {
            self.min_chars_per_line
        }
    }

    /// Characters per body line for the geometry's content band.
    pub fn body_chars_per_line(&self, geometry: &Geometry) -> usize {
        self.max_chars_for_width(geometry.content_width(), self.body_size)
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            body_size: 11.0,
            heading_size: 13.0,
            glyph_width_factor: 0.53,
            min_chars_per_line: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_derived_values() {
        let g = Geometry::letter();
        assert_eq!(g.card_width(), 544.0);
        assert_eq!(g.card_height(), 724.0);
        assert_eq!(g.card_top(), 758.0);
        assert_eq!(g.content_x(), 62.0);
        assert_eq!(g.content_width(), 488.0);
        assert_eq!(g.content_floor_y(), 100.0);
        assert_eq!(g.first_content_start_y(), 618.0);
        assert_eq!(g.continuation_content_start_y(), 674.0);
    }

    #[test]
    fn test_body_chars_per_line() {
        let chars = Typography::default().body_chars_per_line(&Geometry::letter());
        assert_eq!(chars, 83);
    }

    #[test]
    fn test_chars_per_line_minimum() {
        let typography = Typography::default();
        assert_eq!(typography.max_chars_for_width(20.0, 11.0), 16);
        assert_eq!(typography.max_chars_for_width(0.0, 11.0), 16);
    }

    #[test]
    fn test_validate() {
        assert!(Geometry::letter().validate().is_ok());
        assert!(Geometry::a4().validate().is_ok());
        assert!(Geometry::new(100.0, 792.0).validate().is_err());
        assert!(Geometry::new(612.0, 250.0).validate().is_err());
        assert!(Geometry::new(f32::NAN, 792.0).validate().is_err());
    }
}
