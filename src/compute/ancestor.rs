//! Finest common ancestor of two cells.

use crate::cell::Cell;
use crate::hierarchy::CellHierarchy;

/// Resolution of `cell` as a tree depth, with the sentinel sitting one level
/// above every base cell at `-1`.
pub fn depth<H: CellHierarchy + ?Sized>(hierarchy: &H, cell: Cell) -> i32 {
    if cell.is_sentinel() {
        -1
    } else {
        i32::from(hierarchy.resolution(cell))
    }
}

/// Finest cell that is an ancestor of (or equal to) both `a` and `b`.
///
/// Returns [`Cell::SENTINEL`] when the cells live under different base cells
/// or either of them already is the sentinel. The result does not depend on
/// argument order, and folding it over a set does not depend on fold order.
pub fn finest_common_ancestor<H: CellHierarchy + ?Sized>(
    hierarchy: &H,
    a: Cell,
    b: Cell,
) -> Cell {
    if a == b {
        return a;
    }

    if a.is_sentinel() || b.is_sentinel() {
        return Cell::SENTINEL;
    }

    if hierarchy.base_cell(a) != hierarchy.base_cell(b) {
        return Cell::SENTINEL;
    }

    let coarsest = hierarchy.resolution(a).min(hierarchy.resolution(b));

    for resolution in (0..=coarsest).rev() {
        // A failed lookup only means there is no match at this level.
        let Ok(a_parent) = hierarchy.ancestor_at(a, resolution) else {
            continue;
        };
        let Ok(b_parent) = hierarchy.ancestor_at(b, resolution) else {
            continue;
        };

        if a_parent == b_parent {
            return a_parent;
        }
    }

    Cell::SENTINEL
}
