//! The error vocabulary shared by every container in this crate.
//!
//! Rather than one error type per collection, failures are variants of a single [`Error`] so a
//! caller handling one container's failures can handle all of them.

use thiserror::Error;

/// Things that can go wrong when accessing a collection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The collection was empty when the operation needed at least one element. Raised before
    /// anything is touched, so the collection is unchanged afterwards.
    #[error("collection is empty")]
    Underflow,
    /// An index fell outside `0..len`. Used by the linear containers; the trees never raise it.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The length of the collection at the time.
        len: usize,
    },
}

/// A `Result` whose error is this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
