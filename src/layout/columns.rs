//! Column bucketing for page fragments.

use crate::fragment::Fragment;
use crate::geometry::Column;

/// Assign each fragment to the first configured column that strictly
/// contains its `x`.
///
/// Returns one group per configured column, in column order; groups may be
/// empty. Fragments outside every band are dropped silently (running
/// headers, page numbers, marginalia). Relative fragment order within a
/// group is the encounter order of the input.
pub fn bucket_fragments(fragments: Vec<Fragment>, columns: &[Column]) -> Vec<Vec<Fragment>> {
    let mut groups: Vec<Vec<Fragment>> = vec![Vec::new(); columns.len()];
    let mut dropped = 0usize;

    for fragment in fragments {
        match columns.iter().position(|column| column.contains(fragment.x)) {
            Some(index) => groups[index].push(fragment),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("{} fragments outside all configured columns", dropped);
    }

    groups
}
