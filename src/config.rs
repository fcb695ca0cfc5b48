//! Configuration for the extraction pipeline.
//!
//! The configuration is an explicit immutable value passed to the pipeline
//! entry point. Loading it from a file is the caller's job; the derives are
//! there so `serde_json`/`toml` readers work out of the box.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Column;

/// Default vertical tolerance for same-line merging, in document units.
///
/// Wide enough to absorb sub-pixel baseline jitter between fragments of the
/// same visual row, narrow enough to never bridge adjacent typeset lines.
/// Set to `0.0` for bit-exact baseline matching.
pub const DEFAULT_LINE_TOLERANCE: f32 = 0.5;

/// Immutable pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Target font identifier; fragments in any other font are discarded
    pub font: String,

    /// Ordered column bands; a fragment goes to the first band that strictly
    /// contains its `x`
    pub columns: Vec<Column>,

    /// Vertical tolerance for merging fragments into one line
    #[serde(default = "default_line_tolerance")]
    pub line_tolerance: f32,

    /// When set, a vertical gap between consecutive lines larger than this
    /// always starts a new entry, regardless of the continuation heuristics
    #[serde(default)]
    pub group_gap_limit: Option<f32>,

    /// Zero-based page range to process; `None` means every page
    #[serde(default)]
    pub pages: Option<Range<usize>>,
}

fn default_line_tolerance() -> f32 {
    DEFAULT_LINE_TOLERANCE
}

impl ExtractionConfig {
    /// Create a configuration with default tolerances.
    pub fn new(font: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            font: font.into(),
            columns,
            line_tolerance: DEFAULT_LINE_TOLERANCE,
            group_gap_limit: None,
            pages: None,
        }
    }

    /// Set the same-line vertical tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the vertical-gap limit that forces a new entry.
    pub fn with_group_gap_limit(mut self, limit: f32) -> Self {
        self.group_gap_limit = Some(limit);
        self
    }

    /// Restrict processing to a zero-based page range.
    pub fn with_pages(mut self, pages: Range<usize>) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Check the configuration for degenerate values.
    ///
    /// An empty column list is allowed (the run simply yields no entries);
    /// a column band whose interval encloses no point is not.
    pub fn validate(&self) -> Result<()> {
        for (index, column) in self.columns.iter().enumerate() {
            if column.is_degenerate() {
                return Err(Error::InvalidConfig(format!(
                    "column {} has an empty interval ({} .. {})",
                    index, column.from, column.to
                )));
            }
        }
        if self.line_tolerance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "line tolerance must be non-negative, got {}",
                self.line_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractionConfig::new("F1", vec![Column::new(0.0, 100.0)]);
        assert_eq!(config.font, "F1");
        assert_eq!(config.line_tolerance, DEFAULT_LINE_TOLERANCE);
        assert!(config.group_gap_limit.is_none());
        assert!(config.pages.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ExtractionConfig::new("F1", vec![Column::new(0.0, 100.0)])
            .with_line_tolerance(0.0)
            .with_group_gap_limit(14.0)
            .with_pages(2..5);
        assert_eq!(config.line_tolerance, 0.0);
        assert_eq!(config.group_gap_limit, Some(14.0));
        assert_eq!(config.pages, Some(2..5));
    }

    #[test]
    fn test_degenerate_column_rejected() {
        let config = ExtractionConfig::new("F1", vec![Column::new(100.0, 100.0)]);
        assert!(config.validate().is_err());

        let config = ExtractionConfig::new("F1", vec![Column::new(200.0, 100.0)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config =
            ExtractionConfig::new("F1", vec![Column::new(0.0, 100.0)]).with_line_tolerance(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_columns_allowed() {
        let config = ExtractionConfig::new("F1", vec![]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"font": "F1", "columns": [{"from": 0.0, "to": 100.0}]}"#;
        let config: ExtractionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.font, "F1");
        assert_eq!(config.line_tolerance, DEFAULT_LINE_TOLERANCE);
        assert!(config.pages.is_none());
    }
}
