mod common;

use common::cell;
use h3_gist::{Cell, Config, Containment, NodeKind, OpClass, Strategy};

fn ops() -> OpClass {
    OpClass::new(Config::default().with_strict(true)).expect("Failed to build operator class")
}

/// Three res-5 siblings under one res-3 parent, plus a fourth cell elsewhere
/// under the same res-1 ancestor.
#[test]
fn test_siblings_then_cousin() {
    let ops = ops();

    let siblings = [
        cell(20, &[2, 4, 1, 0, 3]),
        cell(20, &[2, 4, 1, 5, 5]),
        cell(20, &[2, 4, 1, 6, 0]),
    ];
    let cousin = cell(20, &[2, 6, 3, 3, 3]);

    let key = ops.union(&siblings).unwrap();
    assert_eq!(key, cell(20, &[2, 4, 1]));

    let with_cousin: Vec<Cell> = siblings.iter().copied().chain([cousin]).collect();
    assert_eq!(ops.union(&with_cousin).unwrap(), cell(20, &[2]));

    assert_eq!(ops.penalty(key, cousin).unwrap(), 2.0);
    assert_eq!(ops.penalty(key, siblings[0]).unwrap(), 0.0);
}

/// Two cells under different base cells.
#[test]
fn test_different_base_cells() {
    let ops = ops();
    let a = cell(20, &[1, 2, 3]);
    let b = cell(21, &[1, 2, 3]);

    assert_eq!(ops.compare(a, b).unwrap(), Containment::Disjoint);
    assert_eq!(ops.finest_common_ancestor(a, b).unwrap(), Cell::SENTINEL);
    assert_eq!(ops.penalty(a, b).unwrap(), 4.0);
    assert_eq!(ops.penalty(b, a).unwrap(), 4.0);

    let split = ops.pick_split(&[a, b]).unwrap();
    assert_eq!(split.left, vec![0]);
    assert_eq!(split.right, vec![1]);
    assert_eq!(split.left_key, a);
    assert_eq!(split.right_key, b);
}

#[test]
fn test_strategy_numbers_from_host() {
    let ops = ops();
    let key = cell(20, &[1]);
    let query = cell(20, &[1, 1]);

    let strategy = Strategy::try_from(7).unwrap();
    let found = ops
        .consistent(key, query, strategy, NodeKind::Internal)
        .unwrap();
    assert!(found.matches);

    assert!(Strategy::try_from(99).is_err());
}

/// Minimal two-level host tree: a root of bounding keys over leaf pages.
struct Page {
    key: Cell,
    entries: Vec<Cell>,
}

struct Tree {
    ops: OpClass,
    capacity: usize,
    pages: Vec<Page>,
}

impl Tree {
    fn new(capacity: usize) -> Self {
        Self {
            ops: ops(),
            capacity,
            pages: Vec::new(),
        }
    }

    fn insert(&mut self, cell: Cell) {
        if self.pages.is_empty() {
            self.pages.push(Page {
                key: cell,
                entries: vec![cell],
            });
            return;
        }

        let mut best = 0;
        let mut best_cost = f32::MAX;
        for (i, page) in self.pages.iter().enumerate() {
            let cost = self.ops.penalty(page.key, cell).unwrap();
            if cost < best_cost {
                best = i;
                best_cost = cost;
            }
        }

        let page = &mut self.pages[best];
        page.entries.push(cell);
        page.key = self.ops.union(&[page.key, cell]).unwrap();

        if page.entries.len() > self.capacity {
            let entries = std::mem::take(&mut page.entries);
            let split = self.ops.pick_split(&entries).unwrap();
            let take = |idx: &[usize]| idx.iter().map(|&i| entries[i]).collect::<Vec<_>>();

            self.pages[best] = Page {
                key: split.left_key,
                entries: take(&split.left[..]),
            };
            self.pages.push(Page {
                key: split.right_key,
                entries: take(&split.right[..]),
            });
        }
    }

    fn search(&self, query: Cell, strategy: Strategy) -> Vec<Cell> {
        let mut found = Vec::new();
        for page in &self.pages {
            let descend = self
                .ops
                .consistent(page.key, query, strategy, NodeKind::Internal)
                .unwrap();
            if !descend.matches {
                continue;
            }
            for &entry in &page.entries {
                let hit = self
                    .ops
                    .consistent(entry, query, strategy, NodeKind::Leaf)
                    .unwrap();
                if hit.matches {
                    found.push(entry);
                }
            }
        }
        found.sort();
        found
    }

    fn len(&self) -> usize {
        self.pages.iter().map(|p| p.entries.len()).sum()
    }
}

fn all_res3_cells(base: u8, first: u8) -> Vec<Cell> {
    let mut cells = Vec::new();
    for second in 0..7 {
        for third in 0..7 {
            cells.push(cell(base, &[first, second, third]));
        }
    }
    cells
}

#[test]
fn test_tree_keeps_every_entry_reachable() {
    let mut tree = Tree::new(8);
    let mut inserted = Vec::new();
    for first in [1, 4] {
        inserted.extend(all_res3_cells(20, first));
    }
    inserted.extend(all_res3_cells(21, 2));

    for &c in &inserted {
        tree.insert(c);
    }

    assert_eq!(tree.len(), inserted.len());
    assert!(tree.pages.len() > 1);

    for page in &tree.pages {
        for &entry in &page.entries {
            assert_eq!(
                tree.ops.compare(page.key, entry).unwrap(),
                Containment::Contains
            );
        }
    }

    for &c in &inserted {
        assert_eq!(tree.search(c, Strategy::Overlap), vec![c]);
    }
}

#[test]
fn test_tree_contained_by_search() {
    let mut tree = Tree::new(6);
    let inserted: Vec<Cell> = all_res3_cells(20, 1)
        .into_iter()
        .chain(all_res3_cells(20, 5))
        .collect();
    for &c in &inserted {
        tree.insert(c);
    }

    let region = cell(20, &[5, 3]);
    let expected: Vec<Cell> = (0..7).map(|d| cell(20, &[5, 3, d])).collect();
    assert_eq!(tree.search(region, Strategy::ContainedBy), expected);

    let everything = cell(20, &[]);
    assert_eq!(
        tree.search(everything, Strategy::ContainedBy).len(),
        inserted.len()
    );
}

#[test]
fn test_nearest_first_ordering_of_pages() {
    let ops = ops();
    let near = cell(20, &[3, 1]);
    let far = cell(20, &[3, 2]);
    let query = cell(20, &[3, 1, 0, 4]);

    let d_near = ops
        .distance(near, query, Strategy::NearestNeighbor)
        .unwrap()
        .unwrap();
    let d_far = ops
        .distance(far, query, Strategy::NearestNeighbor)
        .unwrap()
        .unwrap();

    assert!(d_near < d_far);
    assert_eq!(ops.distance(near, query, Strategy::Overlap).unwrap(), None);
}
