//! # yut-engine
//!
//! A rules engine for Yut Nori, the Korean race game played with four
//! throwing sticks on a 29-cell board.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Agnostic**: The engine never draws or animates. It
//!    reports what happened as `MatchEvent`s, including every cell a move
//!    passed through, and a front end replays them.
//!
//! 2. **N-Team First**: Every API takes `team_count` as context. Two to four
//!    teams rotate in fixed order.
//!
//! 3. **Table-Driven Board**: The board graph is a pair of pure functions
//!    (`forward`, `backward`) over cell indices. No coordinates.
//!
//! ## Architecture
//!
//! - **Explicit State Machine**: `TurnManager` is the single owner of a
//!   match and the only thing that mutates it. Inputs are throws and piece
//!   choices; invalid inputs are rejected without changing state.
//!
//! - **Persistent Data Structures**: The piece set is an `im::Vector`, so
//!   cloning a board or taking a snapshot is O(1).
//!
//! - **Deterministic Throws**: `StickThrower` draws four sticks from a
//!   seeded ChaCha RNG; `ScriptedThrows` replays fixed outcomes for tests.
//!
//! ## Modules
//!
//! - `core`: Teams, pieces, board state, RNG, configuration, errors
//! - `board`: Cell topology and the occupancy index
//! - `throw`: Throw outcomes and throw generators
//! - `movement`: Walking a piece or stack along the track
//! - `capture`: Capture and merge at a move's final cell
//! - `turn`: The turn state machine and its events
//! - `snapshot`: Save and restore a match

pub mod core;
pub mod board;
pub mod throw;
pub mod movement;
pub mod capture;
pub mod turn;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    TeamId, TeamMap,
    Piece, PieceId, PieceStatus,
    GameRng, GameRngState,
    MatchConfig, BoardState,
    ChoiceRejection, YutError, YutResult,
};

pub use crate::board::{Cell, Occupancy, backward, forward, CELL_COUNT, MERGE_CELLS};

pub use crate::throw::{ThrowOutcome, ThrowGenerator, ScriptedThrows, StickThrower};

pub use crate::movement::{Destination, MoveOutcome, move_piece, plan_path};

pub use crate::capture::Resolution;

pub use crate::turn::{
    TurnManager, TurnPhase, TurnStep, PieceChoice, MoveReport,
    GameResult, TeamRecord,
    MatchEvent, MatchObserver,
};

pub use crate::snapshot::MatchSnapshot;
