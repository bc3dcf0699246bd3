//! Narrative tokenizer: heading recognition and greedy word wrap.

use super::geometry::{Geometry, Typography};
use super::sanitize::sanitize;
use crate::model::Token;

/// Text of the paragraph emitted when the narrative has no usable content.
pub const PLACEHOLDER_TEXT: &str = "No report content available.";

/// Recognized section headings, keyed by normalized form.
const HEADINGS: &[(&str, &str)] = &[
    ("executive summary", "Executive Summary"),
    ("financial case", "Financial Case"),
    ("strategic impact", "Strategic Impact"),
    ("recommendation", "Recommendation"),
];

/// Map a line to its canonical heading, ignoring case and trailing colons.
pub fn canonical_heading(line: &str) -> Option<&'static str> {
    let normalized = sanitize(line).to_ascii_lowercase();
    let normalized = normalized.trim_end_matches([':', ' ']).trim();

    HEADINGS
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, display)| *display)
}

/// Greedily wrap sanitized text into lines of at most `max_chars`.
///
/// Words longer than `max_chars` are hard-split into `max_chars` chunks.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let safe = sanitize(text);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in safe.split(' ').filter(|w| !w.is_empty()) {
        if current.is_empty() {
            if word.len() <= max_chars {
                current.push_str(word);
            } else {
                lines.extend(chunks(word, max_chars).map(str::to_string));
            }
            continue;
        }

        if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
            continue;
        }

        lines.push(std::mem::take(&mut current));
        if word.len() <= max_chars {
            current.push_str(word);
            continue;
        }

        // Full chunks become lines; a partial tail starts the next line.
        for chunk in chunks(word, max_chars) {
            if chunk.len() == max_chars {
                lines.push(chunk.to_string());
            } else {
                current.push_str(chunk);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Whitespace trimmed from both ends of a physical line before the
/// blank-line check: tab, line terminators, space separators and the byte
/// order mark. Unlike `char::is_whitespace`, U+0085 is not included.
fn is_line_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{9}'
            | '\u{a}'
            | '\u{b}'
            | '\u{c}'
            | '\u{d}'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Split ASCII text into `size`-byte chunks.
fn chunks(word: &str, size: usize) -> impl Iterator<Item = &str> {
    (0..word.len())
        .step_by(size)
        .map(move |start| &word[start..(start + size).min(word.len())])
}

/// Splits raw narrative text into layout tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    max_chars: usize,
}

impl Tokenizer {
    /// Create a tokenizer for the geometry's content band.
    pub fn new(geometry: &Geometry, typography: &Typography) -> Self {
        Self::with_max_chars(typography.body_chars_per_line(geometry))
    }

    /// Create a tokenizer with an explicit line-length bound.
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    /// Maximum characters per paragraph line.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Tokenize narrative text. Never returns an empty sequence.
    pub fn tokenize(&self, raw: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for raw_line in raw.split('\n') {
            let line = raw_line.trim_matches(is_line_whitespace);
            if line.is_empty() {
                tokens.push(Token::Spacer);
                continue;
            }

            if let Some(heading) = canonical_heading(line) {
                tokens.push(Token::heading(heading));
                continue;
            }

            tokens.extend(
                wrap_text(line, self.max_chars)
                    .into_iter()
                    .map(Token::paragraph),
            );
        }

        let mut compacted: Vec<Token> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if token.is_spacer() && compacted.last().map_or(true, Token::is_spacer) {
                continue;
            }
            compacted.push(token);
        }

        if compacted.is_empty() {
            compacted.push(Token::paragraph(PLACEHOLDER_TEXT));
        }

        log::debug!(
            "Tokenized {} bytes into {} tokens (max {} chars per line)",
            raw.len(),
            compacted.len(),
            self.max_chars
        );

        compacted
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&Geometry::default(), &Typography::default())
    }
}
