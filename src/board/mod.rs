//! The board: cell topology and the cell occupancy index.
//!
//! Topology is a pure function of the cell. Occupancy is the incremental
//! cell → pieces index the capture resolver reads.

pub mod occupancy;
pub mod topology;

pub use occupancy::{CellPieces, Occupancy};
pub use topology::{backward, forward, Cell, CELL_COUNT, MERGE_CELLS, OUTER_CELL_COUNT};
