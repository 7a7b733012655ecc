//! Error types for the index callbacks.

use crate::compute::containment::Strategy;
use crate::hierarchy::HierarchyError;
use thiserror::Error;

/// Errors surfaced to the host tree.
///
/// Conditions the callbacks can resolve on their own (an ancestor missing at
/// one resolution, two cells without a common ancestor) never show up here;
/// they are answered with [`Cell::SENTINEL`](crate::Cell::SENTINEL) or a
/// negative comparison instead.
#[derive(Error, Debug)]
pub enum GistError {
    /// Caller handed over something the callbacks cannot work with.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Host strategy number with no matching [`Strategy`].
    #[error("Unrecognized strategy number: {0}")]
    UnknownStrategy(u16),

    /// Known strategy routed to a callback that does not implement it.
    #[error("Strategy {strategy:?} is not supported by {operation}")]
    UnsupportedStrategy {
        strategy: Strategy,
        operation: &'static str,
    },

    /// The cell hierarchy rejected a supposedly well-formed request.
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GistError>;
