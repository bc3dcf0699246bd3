//! Text layout: sanitizing, tokenizing and pagination.

mod geometry;
mod paginator;
pub mod sanitize;
mod tokenizer;

pub use geometry::{Geometry, Typography};
pub use paginator::Paginator;
pub use sanitize::{escape, sanitize, truncate_with_ellipsis};
pub use tokenizer::{canonical_heading, wrap_text, Tokenizer, PLACEHOLDER_TEXT};
