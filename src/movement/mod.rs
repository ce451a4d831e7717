//! Movement resolution: walking a piece (and its stack) along the track.
//!
//! A move records its origin once, then takes `|steps|` single steps with
//! [`forward`] or [`backward`]. The shortcut flag for each forward step is
//! "is this cell the move's origin, and is the origin a branch", so a piece
//! only diverts at the branch it started from.
//!
//! A forward step from HOME by a piece that has already departed takes it
//! off the board. That ends the move early and is a normal outcome, not an
//! error.
//!
//! The resolver commits the destination for the leader and every stack
//! member. It never resolves captures; the turn manager runs the capture
//! resolver once against the final cell.

use serde::{Deserialize, Serialize};

use crate::board::{backward, forward, Cell};
use crate::core::error::{ChoiceRejection, YutResult};
use crate::core::piece::{PieceId, PieceStatus};
use crate::core::state::BoardState;

/// Where a move ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    /// Still on the board at this cell.
    Cell(Cell),
    /// Passed HOME and left the board.
    Exited,
}

impl Destination {
    #[must_use]
    pub fn cell(self) -> Option<Cell> {
        match self {
            Destination::Cell(cell) => Some(cell),
            Destination::Exited => None,
        }
    }
}

/// Result of a single move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The piece that moved (a stack leader or a lone piece).
    pub piece: PieceId,
    /// Cells entered, in order, for the renderer to animate.
    pub visited: Vec<Cell>,
    pub destination: Destination,
    /// Stack members carried along, leader excluded.
    pub carried: Vec<PieceId>,
}

/// A path computed from an origin, before it is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPlan {
    pub visited: Vec<Cell>,
    pub destination: Destination,
    /// The piece's departed flag after walking the path.
    pub departed: bool,
}

/// Compute the path of a piece starting on `origin` without touching state.
///
/// `departed` is whether the piece has already stepped off HOME; a departed
/// piece stepping forward from HOME exits.
///
/// ```
/// use yut_engine::board::Cell;
/// use yut_engine::movement::{plan_path, Destination};
///
/// let five = Cell::new(5).unwrap();
/// let plan = plan_path(five, true, 2).unwrap();
/// let raw: Vec<u8> = plan.visited.iter().map(|c| c.raw()).collect();
/// assert_eq!(raw, vec![23, 24]);
/// assert_eq!(plan.destination, Destination::Cell(Cell::new(24).unwrap()));
/// ```
pub fn plan_path(origin: Cell, departed: bool, steps: i8) -> YutResult<PathPlan> {
    let origin_branch = origin.is_branch().then_some(origin);
    let mut current = origin;
    let mut departed = departed;
    let mut visited = Vec::with_capacity(steps.unsigned_abs() as usize);

    for _ in 0..steps.unsigned_abs() {
        if steps < 0 {
            current = backward(current)?;
        } else {
            if current == Cell::HOME && departed {
                return Ok(PathPlan {
                    visited,
                    destination: Destination::Exited,
                    departed,
                });
            }
            if current == Cell::HOME {
                departed = true;
            }
            current = forward(current, origin_branch == Some(current))?;
        }
        visited.push(current);
    }

    Ok(PathPlan {
        visited,
        destination: Destination::Cell(current),
        departed,
    })
}

/// Move `piece` by `steps`, carrying its stack.
///
/// If `piece` is a stack member, its leader moves instead. Fails with
/// `InvalidChoice(NotOnBoard)` when the piece is not on the board, and with
/// `InvalidCell` only if the board holds an impossible cell.
pub fn move_piece(board: &mut BoardState, piece: PieceId, steps: i8) -> YutResult<MoveOutcome> {
    let leader_id = board.leader_of(piece);
    let leader = board
        .piece(leader_id)
        .ok_or(ChoiceRejection::UnknownPiece(piece))?;
    let origin = leader.cell().ok_or(ChoiceRejection::NotOnBoard(piece))?;
    let carried: Vec<PieceId> = leader.stack.iter().copied().collect();

    let PathPlan {
        visited,
        destination,
        departed,
    } = plan_path(origin, leader.departed, steps)?;

    let status = match destination {
        Destination::Cell(cell) => PieceStatus::OnBoard(cell),
        Destination::Exited => PieceStatus::Finished,
    };

    for id in std::iter::once(leader_id).chain(carried.iter().copied()) {
        board.set_status(id, status);
        if let Some(p) = board.piece_mut(id) {
            p.departed = departed;
        }
    }

    match destination {
        Destination::Cell(cell) => log::debug!(
            "{} moved {} steps: {} -> {} via {:?}",
            leader_id,
            steps,
            origin,
            cell,
            visited
        ),
        Destination::Exited => log::debug!("{} exited the board from {}", leader_id, origin),
    }

    Ok(MoveOutcome {
        piece: leader_id,
        visited,
        destination,
        carried,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MatchConfig;
    use crate::core::team::TeamId;

    fn cell(raw: u8) -> Cell {
        Cell::new(raw).unwrap()
    }

    fn raw(cells: &[Cell]) -> Vec<u8> {
        cells.iter().map(|c| c.raw()).collect()
    }

    fn board_with(piece: PieceId, at: u8, departed: bool) -> BoardState {
        let mut board = BoardState::new(&MatchConfig::default());
        board.set_status(piece, PieceStatus::OnBoard(cell(at)));
        board.piece_mut(piece).unwrap().departed = departed;
        board
    }

    #[test]
    fn test_start_on_branch_takes_shortcut() {
        let mut board = board_with(PieceId(0), 5, true);
        let outcome = move_piece(&mut board, PieceId(0), 2).unwrap();

        assert_eq!(raw(&outcome.visited), vec![23, 24]);
        assert_eq!(outcome.destination, Destination::Cell(cell(24)));
        assert_eq!(board.piece(PieceId(0)).unwrap().cell(), Some(cell(24)));
    }

    #[test]
    fn test_passing_branch_stays_on_ring() {
        let mut board = board_with(PieceId(0), 3, true);
        let outcome = move_piece(&mut board, PieceId(0), 4).unwrap();
        assert_eq!(raw(&outcome.visited), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_passing_center_continues_diagonal() {
        let mut board = board_with(PieceId(0), 23, true);
        let outcome = move_piece(&mut board, PieceId(0), 4).unwrap();
        assert_eq!(raw(&outcome.visited), vec![24, 20, 27, 28]);
    }

    #[test]
    fn test_back_one_from_home_wraps() {
        let mut board = board_with(PieceId(0), 0, false);
        let outcome = move_piece(&mut board, PieceId(0), -1).unwrap();
        assert_eq!(outcome.destination, Destination::Cell(cell(19)));
    }

    #[test]
    fn test_back_one_from_shortcut_entry() {
        let mut board = board_with(PieceId(0), 23, true);
        let outcome = move_piece(&mut board, PieceId(0), -1).unwrap();
        assert_eq!(outcome.destination, Destination::Cell(cell(5)));
    }

    #[test]
    fn test_fresh_piece_departs_home() {
        let mut board = board_with(PieceId(0), 0, false);
        let outcome = move_piece(&mut board, PieceId(0), 3).unwrap();
        assert_eq!(raw(&outcome.visited), vec![1, 2, 3]);
        assert!(board.piece(PieceId(0)).unwrap().departed);
    }

    #[test]
    fn test_passing_home_exits() {
        let mut board = board_with(PieceId(0), 18, true);
        let outcome = move_piece(&mut board, PieceId(0), 4).unwrap();

        assert_eq!(raw(&outcome.visited), vec![19, 0]);
        assert_eq!(outcome.destination, Destination::Exited);
        assert!(board.piece(PieceId(0)).unwrap().is_finished());
        assert!(board.pieces_at(Cell::HOME).is_empty());
    }

    #[test]
    fn test_landing_on_home_stays() {
        let mut board = board_with(PieceId(0), 22, true);
        let outcome = move_piece(&mut board, PieceId(0), 1).unwrap();
        assert_eq!(outcome.destination, Destination::Cell(Cell::HOME));

        let outcome = move_piece(&mut board, PieceId(0), 1).unwrap();
        assert!(outcome.visited.is_empty());
        assert_eq!(outcome.destination, Destination::Exited);
    }

    #[test]
    fn test_backdo_onto_home_then_forward_before_departing() {
        let mut board = board_with(PieceId(0), 0, false);
        move_piece(&mut board, PieceId(0), -1).unwrap();
        let outcome = move_piece(&mut board, PieceId(0), 2).unwrap();

        assert_eq!(raw(&outcome.visited), vec![0, 1]);
        assert!(board.piece(PieceId(0)).unwrap().departed);
    }

    #[test]
    fn test_stack_moves_together() {
        let mut board = board_with(PieceId(0), 7, true);
        board.set_status(PieceId(1), PieceStatus::OnBoard(cell(7)));
        board.piece_mut(PieceId(0)).unwrap().stack.push(PieceId(1));
        board.piece_mut(PieceId(1)).unwrap().carried_by = Some(PieceId(0));

        // Choosing the member moves the leader.
        let outcome = move_piece(&mut board, PieceId(1), 2).unwrap();

        assert_eq!(outcome.piece, PieceId(0));
        assert_eq!(outcome.carried, vec![PieceId(1)]);
        assert_eq!(board.pieces_at(cell(9)), &[PieceId(0), PieceId(1)]);
        assert!(board.pieces_at(cell(7)).is_empty());
    }

    #[test]
    fn test_move_pooled_piece_rejected() {
        let mut board = BoardState::new(&MatchConfig::default());
        let err = move_piece(&mut board, PieceId(0), 1).unwrap_err();
        assert!(matches!(
            err,
            crate::core::error::YutError::InvalidChoice(ChoiceRejection::NotOnBoard(_))
        ));
        assert_eq!(board.active_count(TeamId::new(0)), 0);
    }

    #[test]
    fn test_zero_steps_is_noop() {
        let plan = plan_path(cell(12), true, 0).unwrap();
        assert!(plan.visited.is_empty());
        assert_eq!(plan.destination, Destination::Cell(cell(12)));
    }
}
