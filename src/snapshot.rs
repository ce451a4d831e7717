//! Save and restore a match.
//!
//! A [`MatchSnapshot`] holds everything needed to resume a match, including
//! a pending piece choice. The occupancy index is not stored; it is rebuilt
//! from piece statuses on restore. Observers and undrained events are not
//! part of a snapshot.
//!
//! ```
//! use yut_engine::core::MatchConfig;
//! use yut_engine::snapshot::MatchSnapshot;
//! use yut_engine::throw::ThrowOutcome;
//! use yut_engine::turn::TurnManager;
//!
//! let mut manager = TurnManager::new(MatchConfig::default()).unwrap();
//! manager.throw(ThrowOutcome::Three).unwrap();
//!
//! let bytes = manager.snapshot().to_bytes().unwrap();
//! let restored = TurnManager::restore(MatchSnapshot::from_bytes(&bytes).unwrap()).unwrap();
//! assert_eq!(restored.current_team(), manager.current_team());
//! ```

use serde::{Deserialize, Serialize};

use crate::board::Cell;
use crate::core::{BoardState, MatchConfig, Piece, TeamId, TeamMap, YutError, YutResult};
use crate::turn::{TeamRecord, TurnManager, TurnPhase};

/// Serializable state of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub config: MatchConfig,
    pub current: TeamId,
    pub phase: TurnPhase,
    pub pieces: Vec<Piece>,
    pub records: TeamMap<TeamRecord>,
    pub standings: Vec<TeamId>,
}

impl MatchSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> YutResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`MatchSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> YutResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Reject snapshots that do not describe a match of their own config.
    fn check(&self) -> YutResult<()> {
        self.config.validate()?;

        if self.pieces.len() != self.config.piece_count() {
            return Err(YutError::InvalidConfig(format!(
                "snapshot holds {} pieces, config needs {}",
                self.pieces.len(),
                self.config.piece_count()
            )));
        }
        if self.records.team_count() != self.config.team_count
            || self.current.index() >= self.config.team_count
        {
            return Err(YutError::InvalidConfig(
                "snapshot team data does not match its config".to_string(),
            ));
        }
        let over = self.phase == TurnPhase::MatchOver;
        let ranked = self.standings.len();
        let teams = self.config.team_count;
        if (over && ranked != teams) || (!over && ranked + 1 >= teams) {
            return Err(YutError::InvalidConfig(format!(
                "snapshot ranks {} of {} teams in phase {:?}",
                ranked, teams, self.phase
            )));
        }
        if let TurnPhase::AwaitingPieceChoice { team, .. } = self.phase {
            if team != self.current {
                return Err(YutError::InvalidConfig(format!(
                    "snapshot choice pending for {} but {} is to play",
                    team, self.current
                )));
            }
        }
        for (index, piece) in self.pieces.iter().enumerate() {
            if piece.id.index() != index || self.config.team_of(piece.id) != Some(piece.team) {
                return Err(YutError::InvalidConfig(format!(
                    "snapshot piece {} is out of order or on the wrong team",
                    piece.id
                )));
            }
            if let Some(cell) = piece.cell() {
                Cell::new(cell.raw())?;
            }
        }
        Ok(())
    }
}

impl TurnManager {
    /// Capture the current match state.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            config: self.config().clone(),
            current: self.current_team(),
            phase: self.phase(),
            pieces: self.board().pieces().iter().cloned().collect(),
            records: self.records().clone(),
            standings: self.standings().to_vec(),
        }
    }

    /// Resume a match from a snapshot.
    pub fn restore(snapshot: MatchSnapshot) -> YutResult<Self> {
        snapshot.check()?;

        let MatchSnapshot {
            config,
            current,
            phase,
            pieces,
            records,
            standings,
        } = snapshot;

        let board = BoardState::from_pieces(&config, pieces.into_iter().collect());
        log::debug!("restored match at {} ({:?})", current, phase);
        Ok(Self::from_parts(config, board, current, phase, records, standings))
    }
}
