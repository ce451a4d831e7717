//! Pieces and their lifecycle.
//!
//! Every piece belongs to one team for the whole match. It starts `Pooled`,
//! becomes `OnBoard` when its team activates it, and either returns to the
//! pool when captured or becomes `Finished` once it passes HOME.
//!
//! ## Stacks
//!
//! Same-team pieces that meet on a cell merge into a stack. The leader lists
//! its members in `stack`; every member points back through `carried_by`.
//! Members always share the leader's cell and never lead a stack themselves.
//!
//! ```
//! use yut_engine::core::{Piece, PieceId, PieceStatus, TeamId};
//!
//! let piece = Piece::new(PieceId::new(0), TeamId::new(1));
//! assert_eq!(piece.status, PieceStatus::Pooled);
//! assert!(!piece.is_active());
//! assert_eq!(piece.stack_size(), 1);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::team::TeamId;
use crate::board::Cell;

/// Unique identifier of a piece within a match.
///
/// Ids are dense: team `t` with `n` pieces per team owns `t*n .. (t+1)*n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Index into the match's piece vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Where a piece is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceStatus {
    /// Off the board, available to be activated.
    Pooled,
    /// On the board at exactly one cell.
    OnBoard(Cell),
    /// Passed HOME and left the board for good.
    Finished,
}

/// A single game piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub team: TeamId,
    pub status: PieceStatus,

    /// Set on the first forward step off HOME. A departed piece leaves the
    /// board on its next forward step from HOME.
    pub departed: bool,

    /// Teammates carried by this piece (empty unless this piece leads a stack).
    pub stack: SmallVec<[PieceId; 4]>,

    /// The leader carrying this piece, if it is a stack member.
    pub carried_by: Option<PieceId>,
}

impl Piece {
    /// Create a pooled piece.
    #[must_use]
    pub fn new(id: PieceId, team: TeamId) -> Self {
        Self {
            id,
            team,
            status: PieceStatus::Pooled,
            departed: false,
            stack: SmallVec::new(),
            carried_by: None,
        }
    }

    /// The cell this piece occupies, if it is on the board.
    #[must_use]
    pub fn cell(&self) -> Option<Cell> {
        match self.status {
            PieceStatus::OnBoard(cell) => Some(cell),
            PieceStatus::Pooled | PieceStatus::Finished => None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.status, PieceStatus::OnBoard(_))
    }

    #[must_use]
    pub fn is_pooled(&self) -> bool {
        self.status == PieceStatus::Pooled
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == PieceStatus::Finished
    }

    /// Number of pieces that move with this one, itself included.
    #[must_use]
    pub fn stack_size(&self) -> usize {
        1 + self.stack.len()
    }

    /// Send the piece back to its team's pool, dropping all stack links.
    pub fn reset_to_pool(&mut self) {
        self.status = PieceStatus::Pooled;
        self.departed = false;
        self.stack.clear();
        self.carried_by = None;
    }
}
