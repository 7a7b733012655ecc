//! Balanced search tree callbacks for an index over H3 cell identifiers.
//!
//! A generic tree (GiST-style) owns pages, locking and storage; this crate
//! supplies the parts that make it a spatial index over the H3 grid:
//!
//! - **Consistent**: containment test driving search descent
//! - **Union**: finest cell bounding a set of keys
//! - **Penalty**: how much a key must coarsen to absorb a new entry
//! - **Pick-split**: quadratic split of an overflowing page
//! - **Same**: key equality
//! - **Distance**: grid-step lower bound for nearest-first scans
//!
//! Bounding keys are ordinary cells: the finest common ancestor of every entry
//! below them. A subtree spanning several base cells is bounded by
//! [`Cell::SENTINEL`].
//!
//! ```rust
//! use h3_gist::{Cell, Config, OpClass};
//!
//! let ops = OpClass::new(Config::default())?;
//! let a: Cell = "8928308280fffff".parse()?;
//! let b: Cell = "8928308280bffff".parse()?;
//!
//! let key = ops.union(&[a, b])?;
//! assert_eq!(ops.penalty(key, a)?, 0.0);
//!
//! let split = ops.pick_split(&[a, b])?;
//! assert_eq!(split.len(), 2);
//! # Ok::<(), h3_gist::GistError>(())
//! ```

pub mod cell;
pub mod compute;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod opclass;

pub use cell::Cell;
pub use config::Config;
pub use error::{GistError, Result};
pub use hierarchy::{CellHierarchy, H3Hierarchy, HierarchyError, MAX_RESOLUTION};
pub use opclass::OpClass;

pub use compute::{Consistency, Containment, NodeKind, Split, Strategy};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Cell, Config, GistError, OpClass, Result};

    pub use crate::{CellHierarchy, H3Hierarchy};

    pub use crate::{Consistency, Containment, NodeKind, Split, Strategy};
}
