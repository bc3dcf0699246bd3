//! Layout model types.
//!
//! Tokens are the unit produced by the tokenizer; placed tokens, pages and
//! the layout plan are produced by the paginator and consumed by the page
//! compositor. All of them are plain data and serialize to JSON.

mod plan;
mod token;

pub use plan::{LayoutPlan, PlacedPage, PlacedToken};
pub use token::{Token, TokenKind, HEADING_HEIGHT, PARAGRAPH_HEIGHT, SPACER_HEIGHT};
