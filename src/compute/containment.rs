//! Containment comparison and the search-descent predicate.

use crate::cell::Cell;
use crate::error::{GistError, Result};
use crate::hierarchy::CellHierarchy;

/// How the region of one cell relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Containment {
    Contains,
    ContainedBy,
    /// Distinct cells at the same resolution never overlap, so anything that
    /// is not nested is disjoint.
    Disjoint,
}

/// Operator strategies the index answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `key && query`
    Overlap,
    /// `key @> query`
    Contains,
    /// `key <@ query`
    ContainedBy,
    /// Ordering by grid distance; only meaningful to [`distance`](super::distance()).
    NearestNeighbor,
}

impl Strategy {
    /// Host strategy number, following R-tree numbering.
    pub const fn number(self) -> u16 {
        match self {
            Strategy::Overlap => 3,
            Strategy::Contains => 7,
            Strategy::ContainedBy => 8,
            Strategy::NearestNeighbor => 15,
        }
    }
}

impl TryFrom<u16> for Strategy {
    type Error = GistError;

    fn try_from(number: u16) -> Result<Self> {
        match number {
            3 => Ok(Strategy::Overlap),
            7 => Ok(Strategy::Contains),
            8 => Ok(Strategy::ContainedBy),
            15 => Ok(Strategy::NearestNeighbor),
            other => Err(GistError::UnknownStrategy(other)),
        }
    }
}

/// Where in the tree a key is being tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Internal,
}

/// Answer of the search predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consistency {
    pub matches: bool,
    /// Positive answers are approximate and must be rechecked against the
    /// stored value.
    pub recheck: bool,
}

/// Compares the region of `a` against the region of `b`.
pub fn compare<H: CellHierarchy + ?Sized>(hierarchy: &H, a: Cell, b: Cell) -> Containment {
    if a == b {
        return Containment::Contains;
    }

    // The sentinel bounds subtrees that span base cells.
    if a.is_sentinel() {
        return Containment::Contains;
    }
    if b.is_sentinel() {
        return Containment::ContainedBy;
    }

    if hierarchy.base_cell(a) != hierarchy.base_cell(b) {
        return Containment::Disjoint;
    }

    let a_res = hierarchy.resolution(a);
    let b_res = hierarchy.resolution(b);

    if a_res < b_res && hierarchy.ancestor_at(b, a_res).is_ok_and(|parent| parent == a) {
        return Containment::Contains;
    }

    if a_res > b_res && hierarchy.ancestor_at(a, b_res).is_ok_and(|parent| parent == b) {
        return Containment::ContainedBy;
    }

    Containment::Disjoint
}

/// Decides whether the subtree under `key` may hold entries matching `query`.
///
/// Internal keys only approximate their subtree, so `ContainedBy` descends
/// into any internal node that overlaps the query.
pub fn consistent<H: CellHierarchy + ?Sized>(
    hierarchy: &H,
    key: Cell,
    query: Cell,
    strategy: Strategy,
    node: NodeKind,
) -> Result<Consistency> {
    let relation = compare(hierarchy, key, query);

    let matches = match strategy {
        Strategy::Overlap => relation != Containment::Disjoint,
        Strategy::Contains => relation == Containment::Contains,
        Strategy::ContainedBy => match node {
            NodeKind::Leaf => relation == Containment::ContainedBy,
            NodeKind::Internal => relation != Containment::Disjoint,
        },
        Strategy::NearestNeighbor => {
            return Err(GistError::UnsupportedStrategy {
                strategy,
                operation: "consistent",
            });
        }
    };

    Ok(Consistency {
        matches,
        recheck: true,
    })
}
