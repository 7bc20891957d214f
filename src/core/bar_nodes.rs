use serde::{Deserialize, Serialize};

use crate::core::types::OccupancyBin;

/// One occupancy band in the index-addressed adjacency arena.
///
/// `prev`/`next` are indices of the immediate sequence neighbors in the same
/// arena, independent of any view window; clipping happens only during rect
/// emission. The arena is rebuilt whenever the dataset changes and is never
/// mutated in place afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarNode {
    pub x_val: f64,
    pub y_val: f64,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Builds the adjacency arena from any item slice via explicit accessors.
///
/// Callers supply the two numeric extraction functions instead of keyed field
/// lookup, so the arena stays decoupled from concrete payload shapes. Input
/// must already be ascending by the x accessor.
pub fn build_bar_nodes_with<T>(
    items: &[T],
    x_of: impl Fn(&T) -> f64,
    y_of: impl Fn(&T) -> f64,
) -> Vec<BarNode> {
    let last = items.len().checked_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| BarNode {
            x_val: x_of(item),
            y_val: y_of(item),
            prev: index.checked_sub(1),
            next: (Some(index) != last).then(|| index + 1),
        })
        .collect()
}

/// Builds the adjacency arena from normalized occupancy bins.
#[must_use]
pub fn build_bar_nodes(bins: &[OccupancyBin]) -> Vec<BarNode> {
    build_bar_nodes_with(bins, |bin| bin.frequency, |bin| bin.value)
}
