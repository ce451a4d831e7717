//! Board topology: cells and the forward/backward relations between them.
//!
//! ## Layout
//!
//! ```text
//!  10   9   8   7   6   5
//!  11  25              23   4
//!  12      26      24       3
//!              20
//!  13      27      21       2
//!  14  28              22   1
//!  15  16  17  18  19   0  (HOME)
//! ```
//!
//! Cells `0..=19` form the outer ring; `20..=28` are the two diagonals
//! crossing at the center (`20`).
//!
//! ## Branches
//!
//! Going forward, cells 5, 10 and 20 have two successors. A piece takes
//! the shortcut only when the branch cell is where its current move started;
//! passing through a branch mid-move keeps it on its current road.
//!
//! Going backward there is no ambiguity. Merge cells route back along the
//! road listed in [`backward`], and HOME wraps to 19.

use serde::{Deserialize, Serialize};

use crate::core::error::{YutError, YutResult};

/// Number of cells on the board.
pub const CELL_COUNT: u8 = 29;

/// Number of cells on the outer ring.
pub const OUTER_CELL_COUNT: u8 = 20;

/// A track position, `0..CELL_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell(u8);

impl Cell {
    /// Entry cell; passing it again takes a piece off the board.
    pub const HOME: Cell = Cell(0);
    /// Center of the board, where the two diagonals cross.
    pub const CENTER: Cell = Cell(20);
    /// Where a backward step from HOME lands.
    pub const WRAP: Cell = Cell(19);

    /// Cells with two forward successors.
    pub const BRANCHES: [Cell; 3] = [Cell(5), Cell(10), Cell(20)];

    /// Create a cell, rejecting indices off the board.
    ///
    /// ```
    /// use yut_engine::board::Cell;
    ///
    /// assert!(Cell::new(28).is_ok());
    /// assert!(Cell::new(29).is_err());
    /// ```
    pub fn new(raw: u8) -> YutResult<Self> {
        if raw < CELL_COUNT {
            Ok(Self(raw))
        } else {
            Err(YutError::InvalidCell(raw))
        }
    }

    pub(crate) const fn new_unchecked(raw: u8) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over every cell on the board.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell)
    }

    #[must_use]
    pub const fn is_outer(self) -> bool {
        self.0 < OUTER_CELL_COUNT
    }

    #[must_use]
    pub const fn is_shortcut(self) -> bool {
        self.0 >= OUTER_CELL_COUNT && self.0 < CELL_COUNT
    }

    /// Does this cell have more than one forward successor?
    #[must_use]
    pub fn is_branch(self) -> bool {
        Self::BRANCHES.contains(&self)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

impl TryFrom<u8> for Cell {
    type Error = YutError;

    fn try_from(raw: u8) -> YutResult<Self> {
        Self::new(raw)
    }
}

/// Successor of `cell` for a piece moving forward.
///
/// `departing_branch` says whether the current move started on `cell`.
/// It only matters at branch cells: `true` takes the shortcut.
///
/// ```
/// use yut_engine::board::{forward, Cell};
///
/// let five = Cell::new(5).unwrap();
/// assert_eq!(forward(five, true).unwrap().raw(), 23);
/// assert_eq!(forward(five, false).unwrap().raw(), 6);
/// ```
pub fn forward(cell: Cell, departing_branch: bool) -> YutResult<Cell> {
    let next = match cell.0 {
        5 => if departing_branch { 23 } else { 6 },
        10 => if departing_branch { 25 } else { 11 },
        20 => if departing_branch { 21 } else { 27 },
        23 => 24,
        24 => 20,
        25 => 26,
        26 => 20,
        21 => 22,
        22 => 0,
        27 => 28,
        28 => 15,
        19 => 0,
        c if c < OUTER_CELL_COUNT => c + 1,
        c => return Err(YutError::InvalidCell(c)),
    };
    Ok(Cell(next))
}

/// Predecessor of `cell` for a piece moving backward.
pub fn backward(cell: Cell) -> YutResult<Cell> {
    let prev = match cell.0 {
        0 => Cell::WRAP.0,
        15 => 28,
        20 => 24,
        21 => 20,
        22 => 21,
        23 => 5,
        24 => 23,
        25 => 10,
        26 => 25,
        27 => 20,
        28 => 27,
        c if c < OUTER_CELL_COUNT => c - 1,
        c => return Err(YutError::InvalidCell(c)),
    };
    Ok(Cell(prev))
}

/// Cells reached by more than one forward edge, where
/// `backward(forward(c)) == c` does not hold for every predecessor.
pub const MERGE_CELLS: [Cell; 3] = [Cell(0), Cell(15), Cell(20)];
