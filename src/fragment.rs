//! Positioned text fragments and the document-loading seam.
//!
//! The crate never parses documents itself. Whatever extractor the caller
//! uses (a PDF text extractor, a test fixture, a cached dump) is wrapped in
//! a [`FragmentSource`] and queried one page at a time.

use crate::error::Result;

/// One positioned run of same-styled text extracted from a page.
///
/// Coordinates follow the document convention: `x` increases rightward,
/// `y` increases upward, so the top of the page has the largest `y`.
/// Fragments are read-only and page-scoped.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// The text run, whitespace preserved verbatim
    pub text: String,
    /// Font identifier assigned by the extractor
    pub font_id: String,
    /// Horizontal position
    pub x: f32,
    /// Vertical position (baseline)
    pub y: f32,
}

impl Fragment {
    /// Create a new fragment.
    pub fn new(text: impl Into<String>, font_id: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            font_id: font_id.into(),
            x,
            y,
        }
    }
}

/// Source of page fragments.
///
/// Implementations make no promise about fragment ordering within a page;
/// the pipeline reconstructs reading order from positions. A failure to
/// produce a page is fatal for the whole run ([`crate::Error::Source`]):
/// there are no retries and no partial-page recovery.
pub trait FragmentSource {
    /// Number of pages the source can produce.
    fn page_count(&self) -> Result<usize>;

    /// All fragments on the given zero-based page, in any order.
    fn page_fragments(&mut self, page_index: usize) -> Result<Vec<Fragment>>;
}

/// In-memory source: one `Vec<Fragment>` per page.
///
/// Convenient for tests and for callers that have already extracted a whole
/// document.
impl FragmentSource for Vec<Vec<Fragment>> {
    fn page_count(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn page_fragments(&mut self, page_index: usize) -> Result<Vec<Fragment>> {
        Ok(self.get(page_index).cloned().unwrap_or_default())
    }
}
