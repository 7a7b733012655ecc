//! Index callbacks over cell identifiers.
//!
//! Every function here is a pure function of its inputs and the
//! [`CellHierarchy`](crate::CellHierarchy) it is handed. Nothing is cached
//! between calls, so the host tree may call them concurrently.
//!
//! - [`ancestor`]: finest common ancestor, the primitive everything else uses
//! - [`containment`]: containment comparison and the search predicate
//! - [`bounding`]: bounding-key union and insertion penalty
//! - [`split`]: page partitioning on overflow
//! - [`distance`]: lower-bound distances for nearest-first traversal

pub mod ancestor;
pub mod bounding;
pub mod containment;
pub mod distance;
pub mod split;

pub use ancestor::{depth, finest_common_ancestor};
pub use bounding::{penalty, union};
pub use containment::{Consistency, Containment, NodeKind, Strategy, compare, consistent};
pub use distance::distance;
pub use split::{Split, pick_split, waste};
