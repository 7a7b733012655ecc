//! Cell identifiers as seen by the index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GistError;
use crate::hierarchy::MAX_RESOLUTION;

const MODE_CELL: u64 = 1 << 59;
const RESOLUTION_OFFSET: u64 = 52;
const BASE_CELL_OFFSET: u64 = 45;
const DIGIT_BITS: u64 = 3;
const UNUSED_DIGIT: u64 = 0b111;
const MAX_BASE_CELL: u8 = 121;
const MAX_DIGIT: u8 = 6;

/// Opaque 64-bit H3 cell identifier.
///
/// Ordering and equality are plain integer ordering and equality. The value
/// is not validated on construction; see
/// [`CellHierarchy::validate`](crate::CellHierarchy::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(u64);

impl Cell {
    /// "No valid cell". Returned when two cells share no ancestor and used as
    /// the bounding key of a subtree spanning several base cells.
    pub const SENTINEL: Cell = Cell(0);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn is_sentinel(self) -> bool {
        self.0 == Self::SENTINEL.0
    }

    /// Cell under `base_cell` reached by following one child digit per
    /// resolution; the resolution is the number of digits.
    ///
    /// ```
    /// use h3_gist::Cell;
    ///
    /// let cell = Cell::from_digits(20, &[0, 6, 0, 4, 0])?;
    /// assert_eq!(cell.to_string(), "85283083fffffff");
    /// # Ok::<(), h3_gist::GistError>(())
    /// ```
    pub fn from_digits(base_cell: u8, digits: &[u8]) -> Result<Self, GistError> {
        if base_cell > MAX_BASE_CELL {
            return Err(GistError::InvalidInput(format!(
                "Base cell out of range [0, {}]: {}",
                MAX_BASE_CELL, base_cell
            )));
        }

        if digits.len() > usize::from(MAX_RESOLUTION) {
            return Err(GistError::InvalidInput(format!(
                "At most {} child digits allowed, got {}",
                MAX_RESOLUTION,
                digits.len()
            )));
        }

        if let Some(digit) = digits.iter().find(|&&d| d > MAX_DIGIT) {
            return Err(GistError::InvalidInput(format!(
                "Child digit out of range [0, {}]: {}",
                MAX_DIGIT, digit
            )));
        }

        let mut raw = MODE_CELL
            | ((digits.len() as u64) << RESOLUTION_OFFSET)
            | (u64::from(base_cell) << BASE_CELL_OFFSET);
        for level in 0..u64::from(MAX_RESOLUTION) {
            let digit = digits
                .get(level as usize)
                .map_or(UNUSED_DIGIT, |&d| u64::from(d));
            raw |= digit << ((u64::from(MAX_RESOLUTION) - 1 - level) * DIGIT_BITS);
        }

        // Pentagon base cells forbid some digit sequences.
        h3o::CellIndex::try_from(raw)
            .map(Cell::from)
            .map_err(|e| GistError::InvalidInput(format!("Invalid cell digits: {}", e)))
    }
}

impl From<u64> for Cell {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Cell> for u64 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

impl From<h3o::CellIndex> for Cell {
    fn from(index: h3o::CellIndex) -> Self {
        Self(u64::from(index))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl FromStr for Cell {
    type Err = GistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        u64::from_str_radix(digits, 16)
            .map(Cell)
            .map_err(|e| GistError::InvalidInput(format!("Invalid cell identifier '{}': {}", s, e)))
    }
}
