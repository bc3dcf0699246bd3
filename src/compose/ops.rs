//! Structured content-stream instructions.

use crate::layout::escape;
use std::fmt;

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);
}

/// An axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The two standard fonts every page references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// Helvetica, resource name `F1`
    Regular,
    /// Helvetica-Bold, resource name `F2`
    Bold,
}

impl FontFace {
    /// Resource name used inside content streams.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }

    /// Standard Type1 base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    SetFillColor(Rgb),
    SetStrokeColor(Rgb),
    SetLineWidth(f32),
    FillRect(Rect),
    StrokeRect(Rect),
    StrokeLine {
        from: (f32, f32),
        to: (f32, f32),
    },
    /// Text positioned with an absolute text matrix
    ShowText {
        font: FontFace,
        size: f32,
        x: f32,
        y: f32,
        text: String,
    },
}

/// Wrapper printing a number the way content streams expect it:
/// integers without a fraction, otherwise at most two decimals.
#[derive(Debug, Clone, Copy)]
pub struct Num(pub f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.fract() == 0.0 {
            return write!(f, "{}", value as i64);
        }

        let fixed = format!("{:.2}", value);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            f.write_str("0")
        } else {
            f.write_str(trimmed)
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::SetFillColor(Rgb(r, g, b)) => {
                write!(f, "{} {} {} rg", Num(*r), Num(*g), Num(*b))
            }
            Instruction::SetStrokeColor(Rgb(r, g, b)) => {
                write!(f, "{} {} {} RG", Num(*r), Num(*g), Num(*b))
            }
            Instruction::SetLineWidth(width) => write!(f, "{} w", Num(*width)),
            Instruction::FillRect(rect) => write!(
                f,
                "{} {} {} {} re f",
                Num(rect.x),
                Num(rect.y),
                Num(rect.width),
                Num(rect.height)
            ),
            Instruction::StrokeRect(rect) => write!(
                f,
                "{} {} {} {} re S",
                Num(rect.x),
                Num(rect.y),
                Num(rect.width),
                Num(rect.height)
            ),
            Instruction::StrokeLine { from, to } => write!(
                f,
                "{} {} m {} {} l S",
                Num(from.0),
                Num(from.1),
                Num(to.0),
                Num(to.1)
            ),
            Instruction::ShowText {
                font,
                size,
                x,
                y,
                text,
            } => write!(
                f,
                "BT /{} {} Tf 1 0 0 1 {} {} Tm ({}) Tj ET",
                font.resource_name(),
                Num(*size),
                Num(*x),
                Num(*y),
                escape(text)
            ),
        }
    }
}

/// The instruction sequence for exactly one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageStream {
    instructions: Vec<Instruction>,
}

impl PageStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Text of every `ShowText` instruction, in drawing order.
    pub fn texts(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.instructions.iter().filter_map(|op| match op {
            Instruction::ShowText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Encode to content-stream bytes, one instruction per line.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = String::new();
        for instruction in &self.instructions {
            out.push_str(&instruction.to_string());
            out.push('\n');
        }
        out.into_bytes()
    }
}
