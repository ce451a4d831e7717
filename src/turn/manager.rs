//! The turn state machine.
//!
//! ```text
//!              throw (no piece on board)        ┌───────────────┐
//!   ┌──────────────────────────────────────────▶│ move+resolve  │──┐
//!   │                                            └───────────────┘  │
//! AwaitingThrow ──throw (piece on board)──▶ AwaitingPieceChoice     │
//!   ▲                                            │ choose           │
//!   │                                            ▼                  │
//!   │                                     move+resolve              │
//!   └──────────── next team ◀───────────────────┴──────────────────┘
//! ```
//!
//! Moves and their capture/merge resolution run to completion inside
//! `throw`/`choose`; callers never observe a half-finished move. The turn
//! always passes to the next team in fixed order afterwards. Captures do not
//! grant an extra throw.

use serde::{Deserialize, Serialize};

use super::event::{MatchEvent, MatchObserver};
use crate::board::Cell;
use crate::capture::{self, Resolution};
use crate::core::{
    BoardState, ChoiceRejection, MatchConfig, Piece, PieceId, TeamId, TeamMap, YutError,
    YutResult,
};
use crate::movement::{self, Destination, MoveOutcome};
use crate::throw::ThrowOutcome;

/// Where the turn state machine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The current team may throw.
    AwaitingThrow,
    /// `team` threw `outcome` and must pick which piece moves.
    AwaitingPieceChoice { team: TeamId, outcome: ThrowOutcome },
    /// The match has ended.
    MatchOver,
}

/// A team's answer to `ChoiceRequired`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceChoice {
    /// Activate the team's next pooled piece.
    NewPiece,
    /// Move this piece (or the stack carrying it).
    Existing(PieceId),
}

/// Final result of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Two-team match: the team that finished first.
    Winner(TeamId),
    /// Three or more teams: every team in finishing order.
    Standings(Vec<TeamId>),
}

impl GameResult {
    /// The team that finished first.
    #[must_use]
    pub fn winner(&self) -> Option<TeamId> {
        match self {
            GameResult::Winner(team) => Some(*team),
            GameResult::Standings(order) => order.first().copied(),
        }
    }

    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        self.winner() == Some(team)
    }
}

/// Per-team tallies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Opponent pieces captured, one per piece.
    pub captures: u32,
    /// Pieces that passed HOME.
    pub finished: u32,
    /// Finishing place (1-based) once every piece is home.
    pub place: Option<u8>,
}

/// What a `throw` or `choose` call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnStep {
    /// A piece moved and its landing was resolved.
    Moved(MoveReport),
    /// The team must now call `choose`.
    ChoiceRequired { team: TeamId, can_activate_new: bool },
    /// The team had nothing to move; the turn passed.
    Skipped { team: TeamId },
}

/// A completed move-and-resolve cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub team: TeamId,
    pub outcome: ThrowOutcome,
    /// Whether the move started by activating a pooled piece.
    pub activated: bool,
    pub movement: MoveOutcome,
    pub resolution: Resolution,
}

/// Owns the match and drives it one throw at a time.
pub struct TurnManager {
    config: MatchConfig,
    board: BoardState,
    current: TeamId,
    phase: TurnPhase,
    records: TeamMap<TeamRecord>,
    /// Teams in the order they brought all pieces home.
    standings: Vec<TeamId>,
    result: Option<GameResult>,
    events: Vec<MatchEvent>,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl TurnManager {
    /// Start a match with every piece pooled and team 0 to throw.
    pub fn new(config: MatchConfig) -> YutResult<Self> {
        config.validate()?;
        let board = BoardState::new(&config);
        let records = TeamMap::with_default(config.team_count);

        Ok(Self {
            config,
            board,
            current: TeamId::new(0),
            phase: TurnPhase::AwaitingThrow,
            records,
            standings: Vec::new(),
            result: None,
            events: Vec::new(),
            observers: Vec::new(),
        })
    }

    /// Rebuild a manager from saved parts. Used by snapshot restore.
    pub(crate) fn from_parts(
        config: MatchConfig,
        board: BoardState,
        current: TeamId,
        phase: TurnPhase,
        records: TeamMap<TeamRecord>,
        standings: Vec<TeamId>,
    ) -> Self {
        let result = (phase == TurnPhase::MatchOver).then(|| Self::result_for(&config, &standings));
        Self {
            config,
            board,
            current,
            phase,
            records,
            standings,
            result,
            events: Vec::new(),
            observers: Vec::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The team whose turn it is.
    #[must_use]
    pub fn current_team(&self) -> TeamId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn record(&self, team: TeamId) -> &TeamRecord {
        &self.records[team]
    }

    #[must_use]
    pub fn records(&self) -> &TeamMap<TeamRecord> {
        &self.records
    }

    /// Teams that have finished, in order.
    #[must_use]
    pub fn standings(&self) -> &[TeamId] {
        &self.standings
    }

    /// The result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::MatchOver
    }

    /// Can `team` bring a new piece onto the board?
    #[must_use]
    pub fn can_activate_new(&self, team: TeamId) -> bool {
        self.board.pooled_count(team) > 0
    }

    /// Pieces `team` may name in `PieceChoice::Existing`: stack leaders and
    /// lone pieces on the board.
    #[must_use]
    pub fn movable_pieces(&self, team: TeamId) -> Vec<PieceId> {
        self.board.movable_pieces(team).map(|p| p.id).collect()
    }

    /// One team's pieces in ID order, whatever their status.
    pub fn pieces_of(&self, team: TeamId) -> impl Iterator<Item = &Piece> {
        self.board.pieces_of(team)
    }

    #[must_use]
    pub fn pieces_at(&self, cell: Cell) -> &[PieceId] {
        self.board.pieces_at(cell)
    }

    // === Events ===

    /// Register an observer that sees every event from now on.
    pub fn subscribe(&mut self, observer: impl MatchObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: MatchEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
        self.events.push(event);
    }

    // === Setup ===

    /// Put a piece on a cell outside the turn rules, for setting up
    /// positions. Only allowed while waiting for a throw.
    ///
    /// Follows [`BoardState::place`]: a stack moves as a whole, and a cell
    /// held by another team is refused.
    pub fn place_piece(&mut self, piece: PieceId, cell: Cell) -> YutResult<()> {
        match self.phase {
            TurnPhase::AwaitingThrow => self.board.place(piece, cell),
            TurnPhase::AwaitingPieceChoice { .. } => Err(YutError::SetupWhileBusy),
            TurnPhase::MatchOver => Err(YutError::MatchOver),
        }
    }

    // === Inputs ===

    /// Feed the current team's throw into the state machine.
    ///
    /// Rejected with `IllegalThrowWhileBusy` while a choice is pending and
    /// with `MatchOver` after the match ends; neither changes any state.
    pub fn throw(&mut self, outcome: ThrowOutcome) -> YutResult<TurnStep> {
        match self.phase {
            TurnPhase::AwaitingThrow => {}
            TurnPhase::AwaitingPieceChoice { .. } => return Err(YutError::IllegalThrowWhileBusy),
            TurnPhase::MatchOver => return Err(YutError::MatchOver),
        }

        let team = self.current;
        log::debug!("{} threw {}", team, outcome);

        if self.board.active_count(team) > 0 {
            let can_activate_new = self.can_activate_new(team);
            self.phase = TurnPhase::AwaitingPieceChoice { team, outcome };
            log::debug!("{} must choose a piece (new allowed: {})", team, can_activate_new);
            self.emit(MatchEvent::ChoiceRequired {
                team,
                can_activate_new,
            });
            return Ok(TurnStep::ChoiceRequired {
                team,
                can_activate_new,
            });
        }

        match self.board.first_pooled(team) {
            Some(piece) => self.activate_and_move(team, piece, outcome).map(TurnStep::Moved),
            None => {
                log::warn!("{} has no piece to move; skipping turn", team);
                self.emit(MatchEvent::TurnSkipped { team });
                self.advance_turn();
                Ok(TurnStep::Skipped { team })
            }
        }
    }

    /// Answer a pending `ChoiceRequired`.
    ///
    /// Every rejection leaves the choice pending so the team can try again.
    pub fn choose(&mut self, choice: PieceChoice) -> YutResult<TurnStep> {
        let (team, outcome) = match self.phase {
            TurnPhase::AwaitingPieceChoice { team, outcome } => (team, outcome),
            TurnPhase::AwaitingThrow => return Err(ChoiceRejection::NoChoicePending.into()),
            TurnPhase::MatchOver => return Err(YutError::MatchOver),
        };

        let report = match choice {
            PieceChoice::NewPiece => {
                let piece = self
                    .board
                    .first_pooled(team)
                    .ok_or(ChoiceRejection::PoolEmpty)?;
                self.activate_and_move(team, piece, outcome)?
            }
            PieceChoice::Existing(piece) => {
                self.check_selectable(team, piece)?;
                self.move_and_resolve(team, piece, outcome, false)?
            }
        };

        Ok(TurnStep::Moved(report))
    }

    fn check_selectable(&self, team: TeamId, piece: PieceId) -> Result<(), ChoiceRejection> {
        let owner = self
            .config
            .team_of(piece)
            .ok_or(ChoiceRejection::UnknownPiece(piece))?;
        if owner != team {
            return Err(ChoiceRejection::NotYourPiece { piece, team: owner });
        }
        match self.board.piece(piece) {
            Some(p) if p.is_active() => Ok(()),
            Some(_) => Err(ChoiceRejection::NotOnBoard(piece)),
            None => Err(ChoiceRejection::UnknownPiece(piece)),
        }
    }

    // === Resolution ===

    fn activate_and_move(
        &mut self,
        team: TeamId,
        piece: PieceId,
        outcome: ThrowOutcome,
    ) -> YutResult<MoveReport> {
        self.board.place(piece, Cell::HOME)?;
        log::debug!("{} activated {}", team, piece);
        self.emit(MatchEvent::PieceActivated { piece });
        self.move_and_resolve(team, piece, outcome, true)
    }

    fn move_and_resolve(
        &mut self,
        team: TeamId,
        piece: PieceId,
        outcome: ThrowOutcome,
        activated: bool,
    ) -> YutResult<MoveReport> {
        let movement = movement::move_piece(&mut self.board, piece, outcome.steps())?;
        let leader = movement.piece;

        self.emit(MatchEvent::PieceRelocated {
            piece: leader,
            visited: movement.visited.clone(),
            destination: movement.destination,
        });

        let resolution = match movement.destination {
            Destination::Cell(_) => capture::resolve(&mut self.board, leader),
            Destination::Exited => Resolution::default(),
        };

        for member in &resolution.merged {
            self.emit(MatchEvent::PiecesMerged {
                leader,
                member: *member,
            });
        }
        for captured in &resolution.captured {
            self.records[team].captures += 1;
            self.emit(MatchEvent::PieceCaptured {
                piece: *captured,
                by: leader,
            });
        }

        if movement.destination == Destination::Exited {
            for finished in std::iter::once(leader).chain(movement.carried.iter().copied()) {
                self.records[team].finished += 1;
                log::info!("{} finished", finished);
                self.emit(MatchEvent::PieceFinished { piece: finished });
            }
            self.check_team_finished(team);
        }

        if self.phase != TurnPhase::MatchOver {
            self.phase = TurnPhase::AwaitingThrow;
            self.advance_turn();
        }

        Ok(MoveReport {
            team,
            outcome,
            activated,
            movement,
            resolution,
        })
    }

    fn check_team_finished(&mut self, team: TeamId) {
        if self.records[team].place.is_some() || !self.board.all_finished(team) {
            return;
        }

        self.standings.push(team);
        let place = self.standings.len() as u8;
        self.records[team].place = Some(place);
        log::info!("{} finished in place {}", team, place);
        self.emit(MatchEvent::TeamFinished { team, place });

        let racing: Vec<TeamId> = TeamId::all(self.config.team_count)
            .filter(|t| self.records[*t].place.is_none())
            .collect();
        if racing.len() > 1 {
            return;
        }

        for last in racing {
            self.standings.push(last);
            self.records[last].place = Some(self.standings.len() as u8);
        }
        let result = Self::result_for(&self.config, &self.standings);
        log::info!("match over: {:?}", result);
        self.phase = TurnPhase::MatchOver;
        self.result = Some(result.clone());
        self.emit(MatchEvent::MatchOver { result });
    }

    fn result_for(config: &MatchConfig, standings: &[TeamId]) -> GameResult {
        match (config.team_count, standings.first()) {
            (2, Some(first)) => GameResult::Winner(*first),
            _ => GameResult::Standings(standings.to_vec()),
        }
    }

    fn advance_turn(&mut self) {
        self.current = self.current.next(self.config.team_count);
        log::info!("turn passes to {}", self.current);
        self.emit(MatchEvent::TurnAdvanced { next: self.current });
    }
}

impl std::fmt::Debug for TurnManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnManager")
            .field("config", &self.config)
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("records", &self.records)
            .field("standings", &self.standings)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
