//! Line assembly within a column.

use crate::fragment::Fragment;
use crate::utils::{join_with_spacing, safe_float_cmp};

/// One logical line: every fragment of a column that sits on the same
/// visual row, merged into a single string.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Baseline of the fragment that seeded the line
    pub y: f32,
    /// Merged text, fragment-internal whitespace preserved
    pub text: String,
}

/// Merge a column's fragments into lines and order them top-to-bottom.
///
/// Fragments are scanned in encounter order. A fragment joins the first
/// already-open line whose seed baseline differs by at most `tolerance`;
/// otherwise it opens a new line. The tolerance band absorbs sub-pixel
/// baseline jitter between fragments of the same visual row; `0.0` demands
/// identical baselines.
///
/// Merged text keeps each fragment verbatim, with a single space inserted at
/// junctions that carry no whitespace of their own. Horizontal order within
/// a line is not re-sorted; encounter order stands.
pub fn assemble_lines(fragments: Vec<Fragment>, tolerance: f32) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for fragment in fragments {
        match lines
            .iter()
            .position(|line| (line.y - fragment.y).abs() <= tolerance)
        {
            Some(index) => join_with_spacing(&mut lines[index].text, &fragment.text),
            None => lines.push(Line {
                y: fragment.y,
                text: fragment.text,
            }),
        }
    }

    // Descending y: top of page first
    lines.sort_by(|a, b| safe_float_cmp(b.y, a.y));
    lines
}
