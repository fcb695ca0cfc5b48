//! The entry reconstruction pipeline.
//!
//! ```text
//! FragmentSource, one page at a time
//!     ↓
//! [Fragment Filter]      keep target font only
//!     ↓
//! [Column Bucketizer]    first strictly-containing band wins
//!     ↓
//! [Line Assembler]       same-baseline merge, descending y
//!     ↓
//! [EntrySegmenter]       whitespace-run split + continuation rules
//!     ↓
//! [Entry Builder]        headword / forms / examples (+ match flag)
//!     ↓
//! Vec<Entry>
//! ```
//!
//! Processing is single-threaded and strictly sequential: pages in ascending
//! order, columns in configured order, lines top-to-bottom. The output
//! vector is the only state that outlives a page.

use crate::config::ExtractionConfig;
use crate::entry::Entry;
use crate::error::Result;
use crate::fragment::{Fragment, FragmentSource};
use crate::layout::{assemble_lines, bucket_fragments};
use crate::matcher::ReferenceMatcher;
use crate::segment::EntrySegmenter;

/// Reconstructs dictionary entries from positioned fragments.
///
/// Built once per run from an immutable [`ExtractionConfig`] and, optionally,
/// a reference entry list for match flagging.
pub struct EntryPipeline {
    config: ExtractionConfig,
    matcher: Option<ReferenceMatcher>,
}

impl EntryPipeline {
    /// Create a pipeline without reference matching.
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            matcher: None,
        })
    }

    /// Create a pipeline that flags entries whose headword appears in
    /// `reference`.
    ///
    /// An empty reference list is valid; it simply never matches.
    pub fn with_reference(config: ExtractionConfig, reference: &[Entry]) -> Result<Self> {
        let mut pipeline = Self::new(config)?;
        pipeline.matcher = Some(ReferenceMatcher::new(reference));
        Ok(pipeline)
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Process every configured page of the source and return the whole
    /// run's entries in reading order.
    ///
    /// Pages are fetched and processed strictly in ascending order; a page
    /// fetch failure aborts the run.
    pub fn run<S: FragmentSource>(&self, source: &mut S) -> Result<Vec<Entry>> {
        let page_count = source.page_count()?;
        let pages = match &self.config.pages {
            Some(range) => range.start..range.end.min(page_count),
            None => 0..page_count,
        };

        let mut entries = Vec::new();
        for page in pages {
            let fragments = source.page_fragments(page)?;
            log::debug!("page {}: {} fragments", page, fragments.len());
            entries.extend(self.process_page(&fragments));
        }
        Ok(entries)
    }

    /// Process one page's fragments.
    ///
    /// Never fails: a page with no matching font, or with every fragment
    /// outside the configured columns, yields no entries rather than an
    /// error.
    pub fn process_page(&self, fragments: &[Fragment]) -> Vec<Entry> {
        let kept: Vec<Fragment> = fragments
            .iter()
            .filter(|fragment| fragment.font_id == self.config.font)
            .cloned()
            .collect();
        if kept.len() < fragments.len() {
            log::debug!(
                "font filter kept {} of {} fragments",
                kept.len(),
                fragments.len()
            );
        }

        let mut entries = Vec::new();
        for (index, group) in bucket_fragments(kept, &self.config.columns)
            .into_iter()
            .enumerate()
        {
            if group.is_empty() {
                continue;
            }

            let lines = assemble_lines(group, self.config.line_tolerance);
            let mut segmenter = EntrySegmenter::new(self.config.group_gap_limit);
            for line in &lines {
                segmenter.push_line(line);
            }

            let before = entries.len();
            for parts in segmenter.finish() {
                if let Some(mut entry) = Entry::from_parts(&parts) {
                    if let Some(matcher) = &self.matcher {
                        matcher.annotate(&mut entry);
                    }
                    entries.push(entry);
                }
            }
            log::debug!(
                "column {}: {} lines, {} entries",
                index,
                lines.len(),
                entries.len() - before
            );
        }
        entries
    }
}
