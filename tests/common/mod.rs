#![allow(dead_code)]

use h3_gist::Cell;

pub fn cell(base_cell: u8, digits: &[u8]) -> Cell {
    Cell::from_digits(base_cell, digits).expect("Failed to build test cell")
}

/// A spread of cells over two hexagonal base cells and several resolutions.
pub fn sample_cells() -> Vec<Cell> {
    let patterns: &[&[u8]] = &[
        &[],
        &[0],
        &[3],
        &[3, 3],
        &[3, 3, 1],
        &[3, 3, 1, 6, 2],
        &[3, 4, 0],
        &[5, 0, 0, 0],
        &[5, 2, 6, 1, 1, 4, 0],
        &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        &[6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6],
    ];

    [20u8, 21]
        .iter()
        .flat_map(|&base| patterns.iter().map(move |digits| cell(base, digits)))
        .collect()
}

/// Every ordering of `items`.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            result.push(tail);
        }
    }
    result
}
