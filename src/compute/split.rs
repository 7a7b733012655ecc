//! Page partitioning for overflowing nodes.
//!
//! Quadratic R-tree split where "area" is replaced by the number of
//! fine-grained cells a bounding key claims:
//!
//! 1. **Seeds**: every pair of entries is scored by [`waste`]; the pair that
//!    would waste the most by sharing a key starts the two groups.
//! 2. **Assignment**: remaining entries go, in input order, to the group whose
//!    key grows the least (the [`penalty`](super::penalty) growth). Ties go to
//!    the smaller group, then to the left group.
//! 3. **Keys**: each group's key is the [`union`] of its members.

use super::ancestor::{depth, finest_common_ancestor};
use super::bounding::union;
use super::containment::{Containment, compare};
use crate::cell::Cell;
use crate::error::{GistError, Result};
use crate::hierarchy::CellHierarchy;

/// Result of splitting a page. `left` and `right` hold indices into the
/// entries that were split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
    pub left_key: Cell,
    pub right_key: Cell,
}

impl Split {
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Number of cells at the finer of the two resolutions that a shared key for
/// `a` and `b` would cover beyond `a` and `b` themselves.
///
/// Nested cells waste nothing. Cells under different base cells have no
/// shared key to measure and also score zero.
pub fn waste<H: CellHierarchy + ?Sized>(hierarchy: &H, a: Cell, b: Cell) -> Result<u64> {
    if compare(hierarchy, a, b) != Containment::Disjoint {
        return Ok(0);
    }

    let ancestor = finest_common_ancestor(hierarchy, a, b);
    if ancestor.is_sentinel() {
        return Ok(0);
    }

    let resolution = hierarchy.resolution(a).max(hierarchy.resolution(b));
    let covered = hierarchy.descendant_count_at(ancestor, resolution)?;
    let own_a = hierarchy.descendant_count_at(a, resolution)?;
    let own_b = hierarchy.descendant_count_at(b, resolution)?;

    Ok(covered.saturating_sub(own_a).saturating_sub(own_b))
}

fn pick_seeds<H: CellHierarchy + ?Sized>(
    hierarchy: &H,
    entries: &[Cell],
) -> Result<(usize, usize)> {
    let mut seeds = (0, 1);
    let mut worst: Option<u64> = None;

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let w = waste(hierarchy, entries[i], entries[j])?;
            if worst.is_none_or(|worst| w > worst) {
                worst = Some(w);
                seeds = (i, j);
            }
        }
    }

    log::debug!(
        "split seeds {} and {} (waste {})",
        entries[seeds.0],
        entries[seeds.1],
        worst.unwrap_or_default()
    );

    Ok(seeds)
}

struct Group {
    members: Vec<usize>,
    key: Cell,
}

impl Group {
    fn seeded(index: usize, key: Cell, capacity: usize) -> Self {
        let mut members = Vec::with_capacity(capacity);
        members.push(index);
        Self { members, key }
    }

    fn growth<H: CellHierarchy + ?Sized>(&self, hierarchy: &H, entry: Cell) -> (i32, Cell) {
        let ancestor = finest_common_ancestor(hierarchy, self.key, entry);
        (depth(hierarchy, self.key) - depth(hierarchy, ancestor), ancestor)
    }

    fn admit(&mut self, index: usize, key: Cell) {
        self.members.push(index);
        self.key = key;
    }
}

/// Splits `entries` into two non-empty groups with their bounding keys.
///
/// Every index of `entries` lands in exactly one group, and the same input
/// always yields the same split. Fewer than two entries cannot be split.
pub fn pick_split<H: CellHierarchy + ?Sized>(hierarchy: &H, entries: &[Cell]) -> Result<Split> {
    if entries.len() < 2 {
        return Err(GistError::InvalidInput(format!(
            "Cannot split {} entries, need at least 2",
            entries.len()
        )));
    }

    let (left_seed, right_seed) = pick_seeds(hierarchy, entries)?;
    let mut left = Group::seeded(left_seed, entries[left_seed], entries.len());
    let mut right = Group::seeded(right_seed, entries[right_seed], entries.len());

    for (index, &entry) in entries.iter().enumerate() {
        if index == left_seed || index == right_seed {
            continue;
        }

        let (left_growth, left_key) = left.growth(hierarchy, entry);
        let (right_growth, right_key) = right.growth(hierarchy, entry);

        let go_left = match left_growth.cmp(&right_growth) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => left.members.len() <= right.members.len(),
        };

        if go_left {
            left.admit(index, left_key);
        } else {
            right.admit(index, right_key);
        }
    }

    let left_cells: Vec<Cell> = left.members.iter().map(|&i| entries[i]).collect();
    let right_cells: Vec<Cell> = right.members.iter().map(|&i| entries[i]).collect();
    let left_key = union(hierarchy, &left_cells)?;
    let right_key = union(hierarchy, &right_cells)?;

    if left_key.is_sentinel() || right_key.is_sentinel() {
        log::warn!(
            "split of {} entries left a group spanning several base cells",
            entries.len()
        );
    }

    log::debug!(
        "split {} entries into {} under {} and {} under {}",
        entries.len(),
        left.members.len(),
        left_key,
        right.members.len(),
        right_key
    );

    Ok(Split {
        left: left.members,
        right: right.members,
        left_key,
        right_key,
    })
}
