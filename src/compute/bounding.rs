//! Bounding-key synthesis and insertion cost.

use super::ancestor::{depth, finest_common_ancestor};
use crate::cell::Cell;
use crate::error::{GistError, Result};
use crate::hierarchy::CellHierarchy;

/// Smallest bounding key covering every cell in `cells`.
///
/// Folds [`finest_common_ancestor`] from left to right. Cells spread over
/// several base cells fold to [`Cell::SENTINEL`].
pub fn union<H: CellHierarchy + ?Sized>(hierarchy: &H, cells: &[Cell]) -> Result<Cell> {
    let (first, rest) = cells
        .split_first()
        .ok_or_else(|| GistError::InvalidInput("Cannot union an empty set of cells".to_string()))?;

    Ok(rest
        .iter()
        .fold(*first, |acc, &cell| finest_common_ancestor(hierarchy, acc, cell)))
}

/// Cost of inserting `new` below the bounding key `key`.
///
/// Counts how many resolution levels `key` has to be coarsened to cover
/// `new`. Zero means `new` already fits. A cell under another base cell costs
/// `resolution(key) + 1`, since the key collapses to the sentinel.
pub fn penalty<H: CellHierarchy + ?Sized>(hierarchy: &H, key: Cell, new: Cell) -> f32 {
    let ancestor = finest_common_ancestor(hierarchy, key, new);
    let cost = depth(hierarchy, key) - depth(hierarchy, ancestor);

    log::trace!("penalty of {} under {}: {}", new, key, cost);

    cost as f32
}
