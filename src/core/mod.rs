//! Core engine types: teams, pieces, board state, RNG, configuration, errors.
//!
//! Everything the resolvers and the turn manager share lives here.

pub mod team;
pub mod piece;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use team::{TeamId, TeamMap};
pub use piece::{Piece, PieceId, PieceStatus};
pub use rng::{GameRng, GameRngState};
pub use config::{MatchConfig, PIECES_PER_TEAM_RANGE, TEAM_COUNT_RANGE};
pub use error::{ChoiceRejection, YutError, YutResult};
pub use state::BoardState;
