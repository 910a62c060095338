//! Depth-first search engine for the classic water-jug pouring puzzle.
//!
//! Given containers of fixed capacities and initial fill levels, the
//! engine searches for a sequence of pour transfers (each moving the
//! maximum possible volume between two containers) that leaves some
//! container holding an exact target quantity. States are deduplicated
//! against everything already explored, which is what makes the search
//! terminate: every pour is reversible, so without the membership check
//! the tree would cycle forever.

pub mod error;
pub mod model;
pub mod solver;

pub use error::{PuzzleError, Result};
pub use model::{Container, DEFAULT_TARGET, PuzzleState};
pub use solver::{NodeId, SearchTree, Solver};
