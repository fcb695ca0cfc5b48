//! Geometric primitives for column layout.
//!
//! Dictionary pages are typeset in fixed side-by-side columns; the horizontal
//! position of a fragment is a reliable, font-independent column
//! discriminator. Columns are configured, not detected.

use serde::{Deserialize, Serialize};

/// A configured horizontal column band.
///
/// The interval is open on both ends: a fragment belongs to the column only
/// when `from < x < to`. A fragment sitting exactly on a boundary belongs to
/// no column.
///
/// # Examples
///
/// ```
/// use lexicut::Column;
///
/// let column = Column::new(50.0, 300.0);
/// assert!(column.contains(51.0));
/// assert!(!column.contains(50.0));
/// assert!(!column.contains(300.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Left boundary, exclusive
    pub from: f32,
    /// Right boundary, exclusive
    pub to: f32,
}

impl Column {
    /// Create a new column band.
    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    /// True when `x` lies strictly inside the band.
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        self.from < x && x < self.to
    }

    /// True when the band encloses no point (`to <= from`).
    pub fn is_degenerate(&self) -> bool {
        self.to <= self.from
    }
}
