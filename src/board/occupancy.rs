//! Cell occupancy index.
//!
//! `Occupancy` tracks which pieces stand on which cell, so capture and merge
//! checks look up a single cell instead of scanning every piece. It is
//! updated on every relocation and is the only place that answers "who is
//! on this cell".
//!
//! ```
//! use yut_engine::board::{Cell, Occupancy};
//! use yut_engine::core::PieceId;
//!
//! let mut occupancy = Occupancy::new();
//! let cell = Cell::new(7).unwrap();
//!
//! occupancy.place(PieceId::new(0), cell);
//! occupancy.place(PieceId::new(1), cell);
//! assert_eq!(occupancy.pieces_at(cell), &[PieceId::new(0), PieceId::new(1)]);
//!
//! occupancy.remove(PieceId::new(0));
//! assert_eq!(occupancy.pieces_at(cell), &[PieceId::new(1)]);
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::topology::Cell;
use crate::core::piece::PieceId;

/// Pieces on one cell, in arrival order.
pub type CellPieces = SmallVec<[PieceId; 4]>;

/// Maps pieces to cells and cells to pieces.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    /// Piece locations: piece -> cell
    locations: FxHashMap<PieceId, Cell>,

    /// Reverse index: cell -> pieces on it
    cells: FxHashMap<Cell, CellPieces>,
}

impl Occupancy {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a piece on a cell, moving it if it is already on the board.
    ///
    /// Returns the cell it left, if any.
    pub fn place(&mut self, piece: PieceId, cell: Cell) -> Option<Cell> {
        let old = self.locations.insert(piece, cell);

        if old == Some(cell) {
            return old;
        }
        if let Some(old_cell) = old {
            self.detach(piece, old_cell);
        }
        self.cells.entry(cell).or_default().push(piece);

        old
    }

    /// Take a piece off the board.
    ///
    /// Returns the cell it was on, or `None` if it was not on the board.
    pub fn remove(&mut self, piece: PieceId) -> Option<Cell> {
        let cell = self.locations.remove(&piece)?;
        self.detach(piece, cell);
        Some(cell)
    }

    fn detach(&mut self, piece: PieceId, cell: Cell) {
        if let Some(pieces) = self.cells.get_mut(&cell) {
            pieces.retain(|p| *p != piece);
            if pieces.is_empty() {
                self.cells.remove(&cell);
            }
        }
    }

    /// Get the cell a piece is on.
    #[must_use]
    pub fn cell_of(&self, piece: PieceId) -> Option<Cell> {
        self.locations.get(&piece).copied()
    }

    /// Get the pieces on a cell, in arrival order.
    #[must_use]
    pub fn pieces_at(&self, cell: Cell) -> &[PieceId] {
        self.cells.get(&cell).map_or(&[], |v| v.as_slice())
    }

    #[must_use]
    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        !self.cells.contains_key(&cell)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over occupied cells and the pieces on each.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, &[PieceId])> {
        self.cells.iter().map(|(c, p)| (*c, p.as_slice()))
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.locations.clear();
        self.cells.clear();
    }
}
