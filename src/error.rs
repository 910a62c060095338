//! Error types for the water jug engine.

use thiserror::Error;

/// Failures the engine can report.
///
/// Pouring itself is total: pouring from an empty container or into a full
/// one is a value-preserving no-op, never an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    /// Container constructed with more water than it can hold.
    #[error("too much contents: {fill} in a container of capacity {capacity}")]
    InvalidState { capacity: usize, fill: usize },

    /// Pour requested between container positions that do not exist, or
    /// between a position and itself.
    #[error("invalid pour pair {from} -> {to} with {count} containers")]
    InvalidIndex {
        from: usize,
        to: usize,
        count: usize,
    },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;
