//! Layout tokens produced by the tokenizer.

use serde::{Deserialize, Serialize};

/// Vertical extent of a heading token in points.
pub const HEADING_HEIGHT: f32 = 24.0;

/// Vertical extent of one wrapped paragraph line in points.
pub const PARAGRAPH_HEIGHT: f32 = 15.0;

/// Vertical extent of a blank-line separator in points.
pub const SPACER_HEIGHT: f32 = 8.0;

/// A typed layout unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// Blank-line separator; occupies space but draws nothing
    Spacer,
    /// Canonical section heading
    Heading {
        /// Display text
        text: String,
    },
    /// One wrapped line of body text
    Paragraph {
        /// Sanitized line text
        text: String,
    },
}

/// Discriminant of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// See [`Token::Spacer`]
    Spacer,
    /// See [`Token::Heading`]
    Heading,
    /// See [`Token::Paragraph`]
    Paragraph,
}

impl Token {
    /// Create a heading token.
    pub fn heading(text: impl Into<String>) -> Self {
        Token::Heading { text: text.into() }
    }

    /// Create a paragraph line token.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Token::Paragraph { text: text.into() }
    }

    /// Get the token kind.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Spacer => TokenKind::Spacer,
            Token::Heading { .. } => TokenKind::Heading,
            Token::Paragraph { .. } => TokenKind::Paragraph,
        }
    }

    /// Get the token text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Spacer => None,
            Token::Heading { text } | Token::Paragraph { text } => Some(text),
        }
    }

    /// Vertical extent consumed by this token.
    pub fn height(&self) -> f32 {
        match self {
            Token::Spacer => SPACER_HEIGHT,
            Token::Heading { .. } => HEADING_HEIGHT,
            Token::Paragraph { .. } => PARAGRAPH_HEIGHT,
        }
    }

    /// Check if this token is a spacer.
    pub fn is_spacer(&self) -> bool {
        matches!(self, Token::Spacer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_heights() {
        assert_eq!(Token::Spacer.height(), 8.0);
        assert_eq!(Token::heading("Recommendation").height(), 24.0);
        assert_eq!(Token::paragraph("Approve.").height(), 15.0);
    }

    #[test]
    fn test_token_text() {
        assert_eq!(Token::Spacer.text(), None);
        assert_eq!(Token::paragraph("line").text(), Some("line"));
        assert_eq!(Token::heading("Financial Case").kind(), TokenKind::Heading);
    }

    #[test]
    fn test_token_serde_tag() {
        let json = serde_json::to_string(&Token::heading("Strategic Impact")).unwrap();
        assert_eq!(json, r#"{"kind":"heading","text":"Strategic Impact"}"#);

        let spacer = serde_json::to_string(&Token::Spacer).unwrap();
        assert_eq!(spacer, r#"{"kind":"spacer"}"#);
    }
}
