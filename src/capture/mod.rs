//! Capture and merge resolution at a move's final cell.
//!
//! After a move lands, every other piece on the landing cell is examined
//! once:
//! - a teammate joins the mover's stack (merge);
//! - an opponent is sent back to its pool together with its stack (capture).
//!
//! The decision is made per co-located piece on team equality alone, so a
//! single landing can merge and capture at the same time.
//!
//! ```
//! use yut_engine::board::Cell;
//! use yut_engine::capture::resolve;
//! use yut_engine::core::{BoardState, MatchConfig, PieceId};
//! use yut_engine::movement::move_piece;
//!
//! let mut board = BoardState::new(&MatchConfig::default());
//! // Piece 0 (team 0) waits on 10; piece 4 (team 1) lands there from 8.
//! board.place(PieceId::new(0), Cell::new(10).unwrap()).unwrap();
//! board.place(PieceId::new(4), Cell::new(8).unwrap()).unwrap();
//! move_piece(&mut board, PieceId::new(4), 2).unwrap();
//!
//! let resolution = resolve(&mut board, PieceId::new(4));
//! assert_eq!(resolution.captured, vec![PieceId::new(0)]);
//! assert!(board.piece(PieceId::new(0)).unwrap().is_pooled());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::piece::{PieceId, PieceStatus};
use crate::core::state::BoardState;

/// Side effects of a landing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Opponent pieces sent back to their pools, stack members included.
    pub captured: Vec<PieceId>,
    /// Teammates that joined the mover's stack.
    pub merged: Vec<PieceId>,
}

impl Resolution {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captured.is_empty() && self.merged.is_empty()
    }
}

/// Resolve captures and merges for `mover` on its current cell.
///
/// `mover` must be the stack leader that just moved. A mover that is off
/// the board (exited) resolves to nothing.
pub fn resolve(board: &mut BoardState, mover: PieceId) -> Resolution {
    let mut resolution = Resolution::default();

    let Some(moving) = board.piece(mover) else {
        return resolution;
    };
    let Some(cell) = moving.cell() else {
        return resolution;
    };
    let team = moving.team;
    let own_stack = moving.stack.clone();

    let others: Vec<PieceId> = board
        .pieces_at(cell)
        .iter()
        .copied()
        .filter(|id| *id != mover && !own_stack.contains(id))
        .collect();

    for other in others {
        let Some(piece) = board.piece(other) else {
            continue;
        };
        if !piece.is_active() {
            continue;
        }

        if piece.team == team {
            for id in merge(board, mover, other) {
                log::info!("{} merged into {}'s stack at {}", id, mover, cell);
                resolution.merged.push(id);
            }
        } else {
            for id in capture(board, other) {
                log::info!("{} captured by {} at {}", id, mover, cell);
                resolution.captured.push(id);
            }
        }
    }

    debug_assert!(board.cells_are_single_team());
    resolution
}

/// Add `member`, and any stack it leads, to `leader`'s stack.
///
/// Returns the pieces newly added; pieces already in the stack are skipped.
fn merge(board: &mut BoardState, leader: PieceId, member: PieceId) -> Vec<PieceId> {
    let Some(current) = board.piece(leader).map(|p| p.stack.clone()) else {
        return Vec::new();
    };

    let mut joining = vec![member];
    if let Some(p) = board.piece_mut(member) {
        joining.extend(std::mem::take(&mut p.stack));
    }
    joining.retain(|id| !current.contains(id));

    for id in &joining {
        if let Some(p) = board.piece_mut(*id) {
            p.carried_by = Some(leader);
        }
    }
    if let Some(p) = board.piece_mut(leader) {
        p.stack.extend(joining.iter().copied());
    }
    joining
}

/// Return `piece` and every piece it carries to their pools.
fn capture(board: &mut BoardState, piece: PieceId) -> Vec<PieceId> {
    let mut captured = vec![piece];
    if let Some(p) = board.piece(piece) {
        captured.extend(p.stack.iter().copied());
    }
    captured.retain(|id| board.piece(*id).map_or(false, |p| p.is_active()));

    for id in &captured {
        board.set_status(*id, PieceStatus::Pooled);
        if let Some(p) = board.piece_mut(*id) {
            p.reset_to_pool();
        }
    }
    captured
}
