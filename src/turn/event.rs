//! Outbound match events.
//!
//! The turn manager reports everything that happens as a [`MatchEvent`].
//! Rendering and UI collaborators either drain the manager's queue after
//! each call or register a [`MatchObserver`] to be told as events occur.
//! Events are facts about state that has already changed; observers cannot
//! veto them.

use serde::{Deserialize, Serialize};

use super::manager::GameResult;
use crate::board::Cell;
use crate::core::{PieceId, TeamId};
use crate::movement::Destination;

/// Something that happened in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The team must pick a piece (or a new one) for the pending throw.
    ChoiceRequired { team: TeamId, can_activate_new: bool },

    /// A pooled piece was placed on HOME to start its move.
    PieceActivated { piece: PieceId },

    /// A piece (with any stack) moved. `visited` lists every cell entered.
    PieceRelocated {
        piece: PieceId,
        visited: Vec<Cell>,
        destination: Destination,
    },

    /// An opponent piece was sent back to its pool.
    PieceCaptured { piece: PieceId, by: PieceId },

    /// A teammate joined `leader`'s stack.
    PiecesMerged { leader: PieceId, member: PieceId },

    /// A piece passed HOME and left the board.
    PieceFinished { piece: PieceId },

    /// The team had nothing to move and lost its throw.
    TurnSkipped { team: TeamId },

    /// It is now `next`'s turn to throw.
    TurnAdvanced { next: TeamId },

    /// Every piece of `team` is home. `place` is 1-based.
    TeamFinished { team: TeamId, place: u8 },

    /// No further throws are accepted.
    MatchOver { result: GameResult },
}

/// Receives match events as they are emitted.
///
/// Closures taking `&MatchEvent` implement this trait:
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use yut_engine::core::MatchConfig;
/// use yut_engine::throw::ThrowOutcome;
/// use yut_engine::turn::{MatchEvent, TurnManager};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut manager = TurnManager::new(MatchConfig::default()).unwrap();
/// manager.subscribe(move |event: &MatchEvent| sink.borrow_mut().push(event.clone()));
/// manager.throw(ThrowOutcome::Two).unwrap();
///
/// assert!(seen.borrow().iter().any(|e| matches!(e, MatchEvent::TurnAdvanced { .. })));
/// ```
pub trait MatchObserver {
    fn on_event(&mut self, event: &MatchEvent);
}

impl<F> MatchObserver for F
where
    F: FnMut(&MatchEvent),
{
    fn on_event(&mut self, event: &MatchEvent) {
        self(event)
    }
}
