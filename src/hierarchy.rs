//! Cell hierarchy model consumed by the index callbacks.
//!
//! The callbacks only need a handful of questions answered about a cell:
//! its resolution, its base cell, and how it relates to coarser and finer
//! cells. [`CellHierarchy`] is that contract; [`H3Hierarchy`] answers it with
//! the `h3o` implementation of the H3 grid.

use h3o::{CellIndex, Resolution};
use thiserror::Error;

use crate::cell::Cell;

const RESOLUTION_OFFSET: u64 = 52;
const RESOLUTION_MASK: u64 = 0b1111;
const BASE_CELL_OFFSET: u64 = 45;
const BASE_CELL_MASK: u64 = 0b111_1111;

/// Finest resolution of the grid.
pub const MAX_RESOLUTION: u8 = 15;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("Invalid cell index: {0}")]
    InvalidCell(Cell),

    #[error("Invalid resolution: {0}")]
    InvalidResolution(u8),

    #[error("Cell {cell} has no ancestor at resolution {resolution}")]
    NoAncestor { cell: Cell, resolution: u8 },

    #[error("Cell {cell} has no descendants at resolution {resolution}")]
    NoDescendants { cell: Cell, resolution: u8 },

    #[error("Cell {cell} has no center child at resolution {resolution}")]
    NoCenterChild { cell: Cell, resolution: u8 },

    #[error("Grid distance from {from} to {to} is undefined: {reason}")]
    GridDistance { from: Cell, to: Cell, reason: String },
}

/// Questions the index asks about the cell grid.
///
/// `resolution` and `base_cell` are read straight out of the identifier and
/// cannot fail; everything that walks the hierarchy can.
pub trait CellHierarchy {
    fn resolution(&self, cell: Cell) -> u8;

    fn base_cell(&self, cell: Cell) -> u8;

    /// Ancestor of `cell` at `resolution`. A cell is its own ancestor at its
    /// own resolution.
    fn ancestor_at(&self, cell: Cell, resolution: u8) -> Result<Cell, HierarchyError>;

    /// Number of cells at `resolution` nested inside `cell`.
    fn descendant_count_at(&self, cell: Cell, resolution: u8) -> Result<u64, HierarchyError>;

    /// The most central descendant of `cell` at `resolution`.
    fn center_child_at(&self, cell: Cell, resolution: u8) -> Result<Cell, HierarchyError>;

    /// Grid steps between two cells of the same resolution.
    fn grid_distance(&self, a: Cell, b: Cell) -> Result<i64, HierarchyError>;

    /// Checks that `cell` is a well-formed identifier.
    fn validate(&self, _cell: Cell) -> Result<(), HierarchyError> {
        Ok(())
    }
}

/// [`CellHierarchy`] backed by `h3o`.
#[derive(Debug, Clone, Copy, Default)]
pub struct H3Hierarchy;

impl H3Hierarchy {
    pub const fn new() -> Self {
        Self
    }

    fn index(cell: Cell) -> Result<CellIndex, HierarchyError> {
        CellIndex::try_from(cell.raw()).map_err(|_| HierarchyError::InvalidCell(cell))
    }

    fn resolution_of(resolution: u8) -> Result<Resolution, HierarchyError> {
        Resolution::try_from(resolution).map_err(|_| HierarchyError::InvalidResolution(resolution))
    }
}

impl CellHierarchy for H3Hierarchy {
    fn resolution(&self, cell: Cell) -> u8 {
        match Self::index(cell) {
            Ok(index) => u8::from(index.resolution()),
            // Sentinel and malformed values: read the field as stored.
            Err(_) => ((cell.raw() >> RESOLUTION_OFFSET) & RESOLUTION_MASK) as u8,
        }
    }

    fn base_cell(&self, cell: Cell) -> u8 {
        match Self::index(cell) {
            Ok(index) => u8::from(index.base_cell()),
            Err(_) => ((cell.raw() >> BASE_CELL_OFFSET) & BASE_CELL_MASK) as u8,
        }
    }

    fn ancestor_at(&self, cell: Cell, resolution: u8) -> Result<Cell, HierarchyError> {
        let index = Self::index(cell)?;
        index
            .parent(Self::resolution_of(resolution)?)
            .map(Cell::from)
            .ok_or(HierarchyError::NoAncestor { cell, resolution })
    }

    fn descendant_count_at(&self, cell: Cell, resolution: u8) -> Result<u64, HierarchyError> {
        let index = Self::index(cell)?;
        let target = Self::resolution_of(resolution)?;
        if resolution < self.resolution(cell) {
            return Err(HierarchyError::NoDescendants { cell, resolution });
        }
        Ok(index.children_count(target))
    }

    fn center_child_at(&self, cell: Cell, resolution: u8) -> Result<Cell, HierarchyError> {
        let index = Self::index(cell)?;
        index
            .center_child(Self::resolution_of(resolution)?)
            .map(Cell::from)
            .ok_or(HierarchyError::NoCenterChild { cell, resolution })
    }

    fn grid_distance(&self, a: Cell, b: Cell) -> Result<i64, HierarchyError> {
        let from = Self::index(a)?;
        let to = Self::index(b)?;
        from.grid_distance(to)
            .map(i64::from)
            .map_err(|e| HierarchyError::GridDistance {
                from: a,
                to: b,
                reason: e.to_string(),
            })
    }

    fn validate(&self, cell: Cell) -> Result<(), HierarchyError> {
        Self::index(cell).map(|_| ())
    }
}
