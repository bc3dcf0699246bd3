//! Rendering options and configuration.

use crate::compose::DEFAULT_TITLE;
use crate::layout::{Geometry, Typography};
use crate::pdf::Compression;
use chrono::{DateTime, Utc};

/// Options for rendering a business-case document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page geometry
    pub geometry: Geometry,

    /// Font sizes and line-length heuristic
    pub typography: Typography,

    /// Banner title
    pub title: String,

    /// Generation timestamp (current time when unset)
    pub generated_at: Option<DateTime<Utc>>,

    /// Content stream compression
    pub compression: Compression,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the typography.
    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    /// Set the banner title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Pin the generation timestamp. Identical inputs and timestamp render
    /// to identical bytes.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Set content stream compression.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Deflate content streams.
    pub fn compressed(self) -> Self {
        self.with_compression(Compression::Flate)
    }

    /// Timestamp to print, falling back to the current time.
    pub fn resolve_generated_at(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            typography: Typography::default(),
            title: DEFAULT_TITLE.to_string(),
            generated_at: None,
            compression: Compression::None,
        }
    }
}

/// Format a timestamp for the metadata box, e.g. `2026-10-19 09:30:00 UTC`.
pub fn format_generated_at(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
