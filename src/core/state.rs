//! Board state: every piece in the match plus the occupancy index.
//!
//! `BoardState` is the single owner of piece data. The movement and capture
//! resolvers borrow it mutably; the turn manager owns it. All relocations
//! go through [`BoardState::set_status`] so that the occupancy index and the
//! pieces never disagree.
//!
//! Pieces live in an `im::Vector`, so cloning a board for lookahead or a
//! snapshot is O(1).

use im::Vector;

use super::config::MatchConfig;
use super::error::{ChoiceRejection, YutResult};
use super::piece::{Piece, PieceId, PieceStatus};
use super::team::TeamId;
use crate::board::{Cell, Occupancy};

/// All pieces of a match and where they stand.
#[derive(Clone, Debug)]
pub struct BoardState {
    pieces: Vector<Piece>,
    occupancy: Occupancy,
    pieces_per_team: usize,
    team_count: usize,
}

impl BoardState {
    /// Create a board with every piece pooled.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        let pieces = TeamId::all(config.team_count)
            .flat_map(|team| config.pieces_of(team).map(move |id| Piece::new(id, team)))
            .collect();

        Self {
            pieces,
            occupancy: Occupancy::new(),
            pieces_per_team: config.pieces_per_team,
            team_count: config.team_count,
        }
    }

    /// Rebuild a board from saved pieces, recomputing the occupancy index.
    #[must_use]
    pub fn from_pieces(config: &MatchConfig, pieces: Vector<Piece>) -> Self {
        let mut occupancy = Occupancy::new();
        for piece in &pieces {
            if let Some(cell) = piece.cell() {
                occupancy.place(piece.id, cell);
            }
        }

        Self {
            pieces,
            occupancy,
            pieces_per_team: config.pieces_per_team,
            team_count: config.team_count,
        }
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.team_count
    }

    /// Get a piece by ID.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    /// All pieces, ordered by ID.
    #[must_use]
    pub fn pieces(&self) -> &Vector<Piece> {
        &self.pieces
    }

    /// Iterate over one team's pieces.
    pub fn pieces_of(&self, team: TeamId) -> impl Iterator<Item = &Piece> {
        let start = team.index() * self.pieces_per_team;
        self.pieces.iter().skip(start).take(self.pieces_per_team)
    }

    /// Pieces standing on `cell`, in arrival order.
    #[must_use]
    pub fn pieces_at(&self, cell: Cell) -> &[PieceId] {
        self.occupancy.pieces_at(cell)
    }

    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// The piece that moves `id`: its stack leader, or itself.
    #[must_use]
    pub fn leader_of(&self, id: PieceId) -> PieceId {
        self.piece(id).and_then(|p| p.carried_by).unwrap_or(id)
    }

    /// Pieces of `team` on the board that can be chosen to move
    /// (stack leaders and lone pieces).
    pub fn movable_pieces(&self, team: TeamId) -> impl Iterator<Item = &Piece> {
        self.pieces_of(team)
            .filter(|p| p.is_active() && p.carried_by.is_none())
    }

    /// First pooled piece of `team`, in ID order.
    #[must_use]
    pub fn first_pooled(&self, team: TeamId) -> Option<PieceId> {
        self.pieces_of(team).find(|p| p.is_pooled()).map(|p| p.id)
    }

    #[must_use]
    pub fn pooled_count(&self, team: TeamId) -> usize {
        self.pieces_of(team).filter(|p| p.is_pooled()).count()
    }

    #[must_use]
    pub fn active_count(&self, team: TeamId) -> usize {
        self.pieces_of(team).filter(|p| p.is_active()).count()
    }

    #[must_use]
    pub fn finished_count(&self, team: TeamId) -> usize {
        self.pieces_of(team).filter(|p| p.is_finished()).count()
    }

    /// Has `team` brought every piece home?
    #[must_use]
    pub fn all_finished(&self, team: TeamId) -> bool {
        self.pieces_of(team).all(Piece::is_finished)
    }

    /// Put a piece straight onto a cell, outside the turn rules.
    ///
    /// Used to set up positions. Naming any member of a stack moves the
    /// whole stack with its links intact. The pieces count as departed
    /// unless they are placed on HOME. Fails with `CellHeld` when another
    /// team stands on `cell`, leaving the board unchanged.
    pub fn place(&mut self, id: PieceId, cell: Cell) -> YutResult<()> {
        let leader = self.leader_of(id);
        let piece = self
            .piece(leader)
            .ok_or(ChoiceRejection::UnknownPiece(id))?;
        let team = piece.team;
        let moving: Vec<PieceId> = std::iter::once(leader)
            .chain(piece.stack.iter().copied())
            .collect();

        let holder = self
            .pieces_at(cell)
            .iter()
            .filter_map(|other| self.piece(*other))
            .find(|other| other.team != team);
        if let Some(holder) = holder {
            return Err(ChoiceRejection::CellHeld {
                cell,
                team: holder.team,
            }
            .into());
        }

        for member in moving {
            self.set_status(member, PieceStatus::OnBoard(cell));
            if let Some(p) = self.piece_mut(member) {
                p.departed = cell != Cell::HOME;
            }
        }
        Ok(())
    }

    /// Set a piece's status and keep the occupancy index in step.
    ///
    /// Does not touch stack links; callers move a stack by setting each
    /// member's status.
    pub(crate) fn set_status(&mut self, id: PieceId, status: PieceStatus) {
        let Some(piece) = self.pieces.get_mut(id.index()) else {
            return;
        };
        piece.status = status;

        match status {
            PieceStatus::OnBoard(cell) => {
                self.occupancy.place(id, cell);
            }
            PieceStatus::Pooled | PieceStatus::Finished => {
                self.occupancy.remove(id);
            }
        }
    }

    /// Check that no cell hosts pieces of two teams.
    ///
    /// Every landing captures or merges everything on its cell, so this
    /// holds between moves.
    #[must_use]
    pub fn cells_are_single_team(&self) -> bool {
        self.occupancy.occupied().all(|(_, ids)| {
            let mut teams = ids.iter().filter_map(|id| self.piece(*id)).map(|p| p.team);
            match teams.next() {
                Some(first) => teams.all(|t| t == first),
                None => true,
            }
        })
    }
}
