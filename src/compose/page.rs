//! Page composition: chrome plus placed tokens.

use super::ops::{FontFace, Instruction, PageStream, Rect, Rgb};
use crate::layout::{truncate_with_ellipsis, Geometry, Typography};
use crate::model::{PlacedPage, Token};

const BACKGROUND: Rgb = Rgb(0.96, 0.97, 0.98);
const CARD_BORDER: Rgb = Rgb(0.84, 0.87, 0.91);
const BANNER: Rgb = Rgb(0.12, 0.24, 0.45);
const ACCENT: Rgb = Rgb(0.93, 0.64, 0.19);
const META_BOX: Rgb = Rgb(0.93, 0.95, 0.98);
const META_LABEL: Rgb = Rgb(0.2, 0.31, 0.49);
const META_VALUE: Rgb = Rgb(0.16, 0.19, 0.25);
const SEPARATOR: Rgb = Rgb(0.87, 0.9, 0.94);
const HEADING: Rgb = Rgb(0.14, 0.25, 0.45);
const BODY: Rgb = Rgb(0.19, 0.22, 0.27);
const FOOTER: Rgb = Rgb(0.37, 0.41, 0.47);

const ACCENT_HEIGHT: f32 = 4.0;
const META_BOX_GAP: f32 = 12.0;
const META_BOX_HEIGHT: f32 = 34.0;
const META_BOX_DROP: f32 = 44.0;
const META_TEXT_INSET: f32 = 10.0;
const SEPARATOR_RISE: f32 = 14.0;
const FOOTER_RULE_Y: f32 = 48.0;
const FOOTER_TEXT_Y: f32 = 34.0;
const PAGE_LABEL_INSET: f32 = 76.0;

/// Character budgets for the subject name in each location.
pub const BANNER_SUBJECT_CHARS: usize = 70;
pub const META_SUBJECT_CHARS: usize = 52;
pub const META_GENERATED_CHARS: usize = 46;
pub const FOOTER_SUBJECT_CHARS: usize = 58;

/// Default document title shown in the banner.
pub const DEFAULT_TITLE: &str = "Internal ROI Business Case";

/// Text that repeats on every page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageChrome {
    /// Banner title
    pub title: String,

    /// Subject (company) name
    pub subject: String,

    /// Human-readable generation timestamp
    pub generated_at: String,
}

impl PageChrome {
    pub fn new(subject: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subject: subject.into(),
            generated_at: generated_at.into(),
        }
    }

    /// Set the banner title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Turns placed pages into instruction sequences.
#[derive(Debug, Clone, Copy)]
pub struct PageCompositor<'a> {
    geometry: &'a Geometry,
    typography: &'a Typography,
    chrome: &'a PageChrome,
}

impl<'a> PageCompositor<'a> {
    pub fn new(geometry: &'a Geometry, typography: &'a Typography, chrome: &'a PageChrome) -> Self {
        Self {
            geometry,
            typography,
            chrome,
        }
    }

    /// Compose one page.
    pub fn compose(&self, page: &PlacedPage, total_pages: usize) -> PageStream {
        let g = self.geometry;
        let first = page.is_first();
        let mut ops = PageStream::new();

        self.card(&mut ops);
        self.banner(&mut ops, first);
        if first {
            self.metadata_boxes(&mut ops);
        }

        let rule_y = g.content_start_y(first) + SEPARATOR_RISE;
        ops.push(Instruction::SetStrokeColor(SEPARATOR));
        ops.push(Instruction::SetLineWidth(1.0));
        ops.push(self.content_rule(rule_y));

        for placed in page.visible_tokens() {
            let (color, font, size) = match &placed.token {
                Token::Heading { .. } => (HEADING, FontFace::Bold, self.typography.heading_size),
                Token::Paragraph { .. } => (BODY, FontFace::Regular, self.typography.body_size),
                Token::Spacer => continue,
            };
            let text = placed.token.text().unwrap_or_default();
            ops.push(Instruction::SetFillColor(color));
            ops.push(text_at(font, size, g.content_x(), placed.y, text));
        }

        self.footer(&mut ops, page.number, total_pages);
        ops
    }

    fn card(&self, ops: &mut PageStream) {
        let g = self.geometry;
        let card = Rect::new(g.card_x(), g.card_y(), g.card_width(), g.card_height());

        ops.push(Instruction::SetFillColor(BACKGROUND));
        ops.push(Instruction::FillRect(Rect::new(
            0.0,
            0.0,
            g.page_width,
            g.page_height,
        )));
        ops.push(Instruction::SetFillColor(Rgb::WHITE));
        ops.push(Instruction::FillRect(card));
        ops.push(Instruction::SetStrokeColor(CARD_BORDER));
        ops.push(Instruction::SetLineWidth(1.0));
        ops.push(Instruction::StrokeRect(card));
    }

    fn banner(&self, ops: &mut PageStream, first: bool) {
        let g = self.geometry;
        let height = g.banner_height(first);
        let banner_y = g.card_top() - height;

        ops.push(Instruction::SetFillColor(BANNER));
        ops.push(Instruction::FillRect(Rect::new(
            g.card_x(),
            banner_y,
            g.card_width(),
            height,
        )));
        ops.push(Instruction::SetFillColor(ACCENT));
        ops.push(Instruction::FillRect(Rect::new(
            g.card_x(),
            g.card_top() - ACCENT_HEIGHT,
            g.card_width(),
            ACCENT_HEIGHT,
        )));

        let subject = truncate_with_ellipsis(&self.chrome.subject, BANNER_SUBJECT_CHARS);
        ops.push(Instruction::SetFillColor(Rgb::WHITE));
        if first {
            ops.push(text_at(
                FontFace::Bold,
                20.0,
                g.content_x(),
                banner_y + 48.0,
                &self.chrome.title,
            ));
            ops.push(text_at(
                FontFace::Regular,
                10.0,
                g.content_x(),
                banner_y + 30.0,
                &subject,
            ));
        } else {
            ops.push(text_at(
                FontFace::Bold,
                14.0,
                g.content_x(),
                banner_y + 31.0,
                &format!("{} (Continued)", self.chrome.title),
            ));
            ops.push(text_at(
                FontFace::Regular,
                9.0,
                g.content_x(),
                banner_y + 15.0,
                &subject,
            ));
        }
    }

    fn metadata_boxes(&self, ops: &mut PageStream) {
        let g = self.geometry;
        let box_y = g.card_top() - g.first_banner_height - META_BOX_DROP;
        let box_width = (g.content_width() - META_BOX_GAP) / 2.0;
        let left_x = g.content_x();
        let right_x = left_x + box_width + META_BOX_GAP;

        ops.push(Instruction::SetFillColor(META_BOX));
        ops.push(Instruction::FillRect(Rect::new(
            left_x,
            box_y,
            box_width,
            META_BOX_HEIGHT,
        )));
        ops.push(Instruction::FillRect(Rect::new(
            right_x,
            box_y,
            box_width,
            META_BOX_HEIGHT,
        )));

        let label_y = box_y + 21.0;
        ops.push(Instruction::SetFillColor(META_LABEL));
        ops.push(text_at(FontFace::Bold, 8.5, left_x + META_TEXT_INSET, label_y, "COMPANY"));
        ops.push(text_at(FontFace::Bold, 8.5, right_x + META_TEXT_INSET, label_y, "GENERATED"));

        let value_y = box_y + 9.0;
        ops.push(Instruction::SetFillColor(META_VALUE));
        ops.push(text_at(
            FontFace::Regular,
            9.5,
            left_x + META_TEXT_INSET,
            value_y,
            &truncate_with_ellipsis(&self.chrome.subject, META_SUBJECT_CHARS),
        ));
        ops.push(text_at(
            FontFace::Regular,
            9.5,
            right_x + META_TEXT_INSET,
            value_y,
            &truncate_with_ellipsis(&self.chrome.generated_at, META_GENERATED_CHARS),
        ));
    }

    fn footer(&self, ops: &mut PageStream, page_number: u32, total_pages: usize) {
        let g = self.geometry;
        let text_y = g.card_y() + FOOTER_TEXT_Y;

        ops.push(Instruction::SetStrokeColor(SEPARATOR));
        ops.push(self.content_rule(g.card_y() + FOOTER_RULE_Y));
        ops.push(Instruction::SetFillColor(FOOTER));
        ops.push(text_at(
            FontFace::Regular,
            9.0,
            g.content_x(),
            text_y,
            &truncate_with_ellipsis(&self.chrome.subject, FOOTER_SUBJECT_CHARS),
        ));
        ops.push(text_at(
            FontFace::Regular,
            9.0,
            g.card_x() + g.card_width() - PAGE_LABEL_INSET,
            text_y,
            &format!("Page {} of {}", page_number, total_pages),
        ));
    }

    /// Horizontal rule across the content band.
    fn content_rule(&self, y: f32) -> Instruction {
        let g = self.geometry;
        Instruction::StrokeLine {
            from: (g.content_x(), y),
            to: (g.content_x() + g.content_width(), y),
        }
    }
}

fn text_at(font: FontFace, size: f32, x: f32, y: f32, text: &str) -> Instruction {
    Instruction::ShowText {
        font,
        size,
        x,
        y,
        text: text.to_string(),
    }
}
