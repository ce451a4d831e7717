//! Capture and merge resolution combined with movement.

use yut_engine::board::Cell;
use yut_engine::capture::resolve;
use yut_engine::core::{BoardState, MatchConfig, PieceId, TeamId};
use yut_engine::movement::move_piece;

fn cell(raw: u8) -> Cell {
    Cell::new(raw).unwrap()
}

fn board(teams: usize) -> BoardState {
    BoardState::new(&MatchConfig::new().with_team_count(teams).with_pieces_per_team(4))
}

/// Move and resolve the way the turn manager does.
fn step(board: &mut BoardState, piece: PieceId, steps: i8) -> yut_engine::Resolution {
    let outcome = move_piece(board, piece, steps).unwrap();
    resolve(board, outcome.piece)
}

// =============================================================================
// Merge Tests
// =============================================================================

/// Landing on a teammate forms a stack that then moves as one.
#[test]
fn test_merge_then_move_together() {
    let mut board = board(2);
    board.place(PieceId(0), cell(10)).unwrap();
    board.place(PieceId(1), cell(8)).unwrap();

    let res = step(&mut board, PieceId(1), 2);
    assert_eq!(res.merged, vec![PieceId(0)]);

    // Choosing either piece moves the whole stack.
    step(&mut board, PieceId(0), 1);
    assert_eq!(board.pieces_at(cell(11)), &[PieceId(1), PieceId(0)]);
    assert!(board.pieces_at(cell(10)).is_empty());
}

/// Two stacks of the same team combine into one.
#[test]
fn test_stacks_combine() {
    let mut board = board(2);
    board.place(PieceId(0), cell(3)).unwrap();
    board.place(PieceId(1), cell(2)).unwrap();
    step(&mut board, PieceId(1), 1);

    board.place(PieceId(2), cell(7)).unwrap();
    board.place(PieceId(3), cell(6)).unwrap();
    step(&mut board, PieceId(3), 1);

    let res = step(&mut board, PieceId(1), 4);
    assert_eq!(res.merged.len(), 2);
    let leader = board.piece(PieceId(1)).unwrap();
    assert_eq!(leader.stack_size(), 4);
    assert_eq!(board.movable_pieces(TeamId(0)).count(), 1);
}

// =============================================================================
// Capture Tests
// =============================================================================

/// A stack formed at 10 is captured whole by a later arrival.
#[test]
fn test_stack_captured_together() {
    let mut board = board(2);
    board.place(PieceId(0), cell(10)).unwrap();
    board.place(PieceId(1), cell(7)).unwrap();
    step(&mut board, PieceId(1), 3);

    board.place(PieceId(4), cell(8)).unwrap();
    let res = step(&mut board, PieceId(4), 2);

    assert_eq!(res.captured.len(), 2);
    assert!(res.captured.contains(&PieceId(0)));
    assert!(res.captured.contains(&PieceId(1)));
    assert_eq!(board.pooled_count(TeamId(0)), 4);
    assert_eq!(board.pieces_at(cell(10)), &[PieceId(4)]);
}

/// A stack lands on an opponent and captures it without breaking apart.
#[test]
fn test_stack_captures_single() {
    let mut board = board(3);
    board.place(PieceId(0), cell(4)).unwrap();
    board.place(PieceId(1), cell(3)).unwrap();
    step(&mut board, PieceId(1), 1);

    board.place(PieceId(9), cell(6)).unwrap();
    let res = step(&mut board, PieceId(0), 2);

    assert_eq!(res.captured, vec![PieceId(9)]);
    assert_eq!(board.piece(PieceId(1)).unwrap().stack.as_slice(), &[PieceId(0)]);
    assert_eq!(board.pieces_at(cell(6)), &[PieceId(1), PieceId(0)]);
}

/// A captured piece starts over: its next activation is a fresh departure.
#[test]
fn test_captured_piece_departs_again() {
    let mut board = board(2);
    board.place(PieceId(4), cell(19)).unwrap();
    board.place(PieceId(0), cell(18)).unwrap();
    step(&mut board, PieceId(0), 1);

    let captured = board.piece(PieceId(4)).unwrap();
    assert!(captured.is_pooled());
    assert!(!captured.departed);
}

/// Pieces on other cells are untouched.
#[test]
fn test_capture_is_local_to_landing_cell() {
    let mut board = board(2);
    board.place(PieceId(4), cell(9)).unwrap();
    board.place(PieceId(5), cell(11)).unwrap();
    board.place(PieceId(0), cell(8)).unwrap();

    let res = step(&mut board, PieceId(0), 2);
    assert!(res.is_empty());
    assert_eq!(board.active_count(TeamId(1)), 2);
    assert!(board.cells_are_single_team());
}
