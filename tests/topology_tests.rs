//! Board topology properties.
//!
//! The board graph is two lookup functions over 29 cells. These tests walk
//! every cell instead of spot-checking a few.

use proptest::prelude::*;

use yut_engine::board::{backward, forward, Cell, CELL_COUNT, MERGE_CELLS};

fn cell(raw: u8) -> Cell {
    Cell::new(raw).unwrap()
}

// =============================================================================
// Table Coverage Tests
// =============================================================================

/// Both lookups are total over the board and stay on it.
#[test]
fn test_every_cell_has_neighbours() {
    for c in Cell::all() {
        for departing in [false, true] {
            let next = forward(c, departing).unwrap();
            assert!(next.raw() < CELL_COUNT, "{} -> {}", c, next);
        }
        let prev = backward(c).unwrap();
        assert!(prev.raw() < CELL_COUNT, "{} <- {}", c, prev);
    }
}

/// Only the three branch cells care about the departing flag.
#[test]
fn test_departing_flag_only_matters_at_branches() {
    for c in Cell::all() {
        let diverts = forward(c, true).unwrap() != forward(c, false).unwrap();
        assert_eq!(diverts, c.is_branch(), "{}", c);
    }
}

/// The shortcut entries named by the board layout.
#[test]
fn test_branch_destinations() {
    assert_eq!(forward(cell(5), true).unwrap(), cell(23));
    assert_eq!(forward(cell(10), true).unwrap(), cell(25));
    assert_eq!(forward(Cell::CENTER, true).unwrap(), cell(21));
    assert_eq!(forward(Cell::CENTER, false).unwrap(), cell(27));
}

/// Every shortcut eventually rejoins the outer ring.
#[test]
fn test_shortcuts_rejoin_ring() {
    for start in [23u8, 25, 21, 27] {
        let mut c = cell(start);
        let mut steps = 0;
        while c.is_shortcut() {
            c = forward(c, false).unwrap();
            steps += 1;
            assert!(steps < CELL_COUNT as usize, "loop from {}", start);
        }
        assert!(MERGE_CELLS.contains(&c), "{} rejoins at {}", start, c);
    }
}

#[test]
fn test_home_wraps_backward() {
    assert_eq!(backward(Cell::HOME).unwrap(), Cell::WRAP);
    assert_eq!(forward(Cell::WRAP, false).unwrap(), Cell::HOME);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Stepping back undoes a forward step unless the step landed on a
    /// cell where two paths merge.
    #[test]
    fn backward_inverts_forward_off_merge_cells(raw in 0u8..29, departing in any::<bool>()) {
        let c = cell(raw);
        let next = forward(c, departing).unwrap();
        prop_assume!(!MERGE_CELLS.contains(&next));
        prop_assert_eq!(backward(next).unwrap(), c);
    }

    /// Indices past the board are rejected, never wrapped.
    #[test]
    fn out_of_range_cells_rejected(raw in 29u8..=255) {
        prop_assert!(Cell::new(raw).is_err());
        prop_assert!(Cell::try_from(raw).is_err());
    }

    /// Walking forward from any cell reaches HOME within a lap.
    #[test]
    fn forward_walk_reaches_home(raw in 0u8..29) {
        let mut c = forward(cell(raw), false).unwrap();
        let mut steps = 1;
        while c != Cell::HOME {
            c = forward(c, false).unwrap();
            steps += 1;
            prop_assert!(steps <= 20);
        }
    }
}
