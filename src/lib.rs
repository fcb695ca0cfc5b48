//! # Lexicut
//!
//! Reconstructs dictionary-style entries (headword, alternate word forms,
//! usage examples) from a page of positioned text fragments.
//!
//! The hard problem is layout reconstruction: a text extractor hands over an
//! *unordered* set of fragments, each carrying a string, a font identifier,
//! and an `(x, y)` position. This crate recovers logical reading order and
//! entry boundaries from those positions, segments each reconstructed line
//! into semantic fields using whitespace-run and punctuation heuristics, and
//! decides whether a line starts a new entry or continues the previous one.
//!
//! ## Pipeline
//!
//! ```text
//! FragmentSource (one page at a time)
//!     ↓
//! [Fragment Filter] (target font only)
//!     ↓
//! [Column Bucketizer] (configured horizontal bands)
//!     ↓
//! [Line Assembler] (same-baseline merge, top of page first)
//!     ↓
//! [Word/Example Segmenter] (whitespace-run split + continuation rules)
//!     ↓
//! [Entry Builder] (+ optional reference matching)
//!     ↓
//! Vec<Entry>
//! ```
//!
//! Document loading, configuration files, and persistence stay with the
//! caller: the crate consumes fragments through the [`FragmentSource`] trait
//! and produces serde-ready [`Entry`] records.
//!
//! ## Quick Start
//!
//! ```
//! use lexicut::{Column, EntryPipeline, ExtractionConfig, Fragment};
//!
//! # fn main() -> lexicut::Result<()> {
//! let config = ExtractionConfig::new("F1", vec![Column::new(0.0, 100.0)]);
//! let pipeline = EntryPipeline::new(config)?;
//!
//! // Any FragmentSource works; a Vec of pages is the simplest.
//! let mut source = vec![vec![
//!     Fragment::new("run,", "F1", 10.0, 500.0),
//!     Fragment::new("ran", "F1", 10.0, 500.0),
//!     Fragment::new("   to move fast.", "F1", 40.0, 500.0),
//! ]];
//!
//! let entries = pipeline.run(&mut source)?;
//! assert_eq!(entries[0].word, "run");
//! assert_eq!(entries[0].word_forms.as_deref(), Some(&["ran".to_string()][..]));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Input seam and geometric primitives
pub mod fragment;
pub mod geometry;

// Layout reconstruction
pub mod layout;

// Segmentation and entry building
pub mod entry;
pub mod matcher;
pub mod segment;

// Orchestration
pub mod pipeline;

// Re-exports
pub use config::ExtractionConfig;
pub use entry::Entry;
pub use error::{Error, Result};
pub use fragment::{Fragment, FragmentSource};
pub use geometry::Column;
pub use matcher::ReferenceMatcher;
pub use pipeline::EntryPipeline;

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting operations never panic on NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => {
                // Both are normal numbers, safe to unwrap
                a.partial_cmp(&b).unwrap()
            },
        }
    }

    /// Append `next` to `text`, inserting a single space at the junction only
    /// when neither side already has whitespace there.
    ///
    /// This is the one join policy used everywhere text is stitched back
    /// together (fragment → line, line part → accumulator). Whitespace that
    /// fragments carry internally is preserved verbatim; runs of three or more
    /// spaces are load-bearing for field segmentation.
    pub fn join_with_spacing(text: &mut String, next: &str) {
        if next.is_empty() {
            return;
        }
        if !text.is_empty()
            && !text.ends_with(|c: char| c.is_whitespace())
            && !next.starts_with(|c: char| c.is_whitespace())
        {
            text.push(' ');
        }
        text.push_str(next);
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
