//! Domain error types

use thiserror::Error;

/// Out-of-range access to the sponge layer sequence
///
/// This signals a caller bug, not a configuration problem.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("sponge layer index {index} out of range (count: {len})")]
pub struct IndexError {
    /// Requested index
    pub index: usize,

    /// Number of sponge layers in the record
    pub len: usize,
}
