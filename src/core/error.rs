//! Error taxonomy for the engine.
//!
//! Recoverable errors (`InvalidChoice`, `IllegalThrowWhileBusy`, `MatchOver`)
//! leave the match untouched so the caller can re-prompt. `InvalidCell` means
//! the engine produced an index off the board, which only happens on a bug.

use super::piece::PieceId;
use super::team::TeamId;
use crate::board::Cell;

/// Why a `PieceChoice` was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceRejection {
    /// No throw is waiting for a piece selection.
    NoChoicePending,
    /// "New piece" was chosen but the team's pool is empty.
    PoolEmpty,
    /// The id does not name a piece in this match.
    UnknownPiece(PieceId),
    /// The piece belongs to another team.
    NotYourPiece { piece: PieceId, team: TeamId },
    /// The piece is pooled or finished.
    NotOnBoard(PieceId),
    /// Setup tried to put a piece on a cell another team holds.
    CellHeld { cell: Cell, team: TeamId },
}

impl std::fmt::Display for ChoiceRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoChoicePending => write!(f, "no piece choice is pending"),
            Self::PoolEmpty => write!(f, "no inactive piece left to activate"),
            Self::UnknownPiece(p) => write!(f, "unknown piece {}", p),
            Self::NotYourPiece { piece, team } => write!(f, "{} belongs to {}", piece, team),
            Self::NotOnBoard(p) => write!(f, "{} is not on the board", p),
            Self::CellHeld { cell, team } => write!(f, "{} is held by {}", cell, team),
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, thiserror::Error)]
pub enum YutError {
    #[error("cell index {0} is not on the board")]
    InvalidCell(u8),

    #[error("invalid choice: {0}")]
    InvalidChoice(ChoiceRejection),

    #[error("throw received while a piece choice is pending")]
    IllegalThrowWhileBusy,

    #[error("board setup attempted while a piece choice is pending")]
    SetupWhileBusy,

    #[error("the match is over")]
    MatchOver,

    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl From<ChoiceRejection> for YutError {
    fn from(rejection: ChoiceRejection) -> Self {
        Self::InvalidChoice(rejection)
    }
}

/// Result alias used throughout the crate.
pub type YutResult<T> = Result<T, YutError>;
