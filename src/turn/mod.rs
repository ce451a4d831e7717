//! Turn management: the match state machine and its outbound events.
//!
//! [`TurnManager`] is the only entry point that mutates a match. It accepts
//! throws and piece choices, runs movement and capture resolution, and
//! emits [`MatchEvent`]s describing what changed.

pub mod event;
pub mod manager;

pub use event::{MatchEvent, MatchObserver};
pub use manager::{
    GameResult, MoveReport, PieceChoice, TeamRecord, TurnManager, TurnPhase, TurnStep,
};
