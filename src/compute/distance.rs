//! Distance estimates for nearest-first traversal.

use super::containment::{Containment, Strategy, compare};
use crate::cell::Cell;
use crate::error::Result;
use crate::hierarchy::CellHierarchy;

/// Grid distance from `query` to the subtree bounded by `key`.
///
/// Never exceeds the distance from `query` to any cell stored below `key`: a
/// key nested with the query may hold the query itself and scores zero. Other
/// keys are measured from their center child at the query's resolution, so
/// the query must not be coarser than such a key. Returns `None` for
/// strategies that do not order results; hierarchy failures are errors.
pub fn distance<H: CellHierarchy + ?Sized>(
    hierarchy: &H,
    key: Cell,
    query: Cell,
    strategy: Strategy,
) -> Result<Option<f64>> {
    match strategy {
        Strategy::NearestNeighbor => {}
        Strategy::Overlap | Strategy::Contains | Strategy::ContainedBy => return Ok(None),
    }

    // Covers the sentinel key too, which contains everything.
    if compare(hierarchy, key, query) != Containment::Disjoint {
        log::trace!("distance from {} to {}: nested, 0", query, key);
        return Ok(Some(0.0));
    }

    let child = hierarchy.center_child_at(key, hierarchy.resolution(query))?;
    let steps = hierarchy.grid_distance(query, child)?;

    log::trace!("distance from {} to {} via {}: {}", query, key, child, steps);

    Ok(Some(steps as f64))
}
