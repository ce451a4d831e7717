//! Match configuration.
//!
//! A match is configured once at startup: how many teams take part, how
//! many pieces each team owns, and the seed for the bundled stick thrower.

use serde::{Deserialize, Serialize};

use super::error::{YutError, YutResult};
use super::piece::PieceId;
use super::team::TeamId;

/// Smallest and largest supported team counts.
pub const TEAM_COUNT_RANGE: std::ops::RangeInclusive<usize> = 2..=4;

/// Smallest and largest supported pool sizes.
pub const PIECES_PER_TEAM_RANGE: std::ops::RangeInclusive<usize> = 1..=8;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of teams in the rotation (2-4).
    pub team_count: usize,

    /// Pieces in each team's pool (1-8).
    pub pieces_per_team: usize,

    /// Seed for `StickThrower`. Same seed produces the same throws.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            team_count: 2,
            pieces_per_team: 4,
            seed: 42,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_team_count(mut self, count: usize) -> Self {
        self.team_count = count;
        self
    }

    #[must_use]
    pub fn with_pieces_per_team(mut self, count: usize) -> Self {
        self.pieces_per_team = count;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the configuration describes a playable match.
    pub fn validate(&self) -> YutResult<()> {
        if !TEAM_COUNT_RANGE.contains(&self.team_count) {
            return Err(YutError::InvalidConfig(format!(
                "team_count must be {}-{}, got {}",
                TEAM_COUNT_RANGE.start(),
                TEAM_COUNT_RANGE.end(),
                self.team_count
            )));
        }
        if !PIECES_PER_TEAM_RANGE.contains(&self.pieces_per_team) {
            return Err(YutError::InvalidConfig(format!(
                "pieces_per_team must be {}-{}, got {}",
                PIECES_PER_TEAM_RANGE.start(),
                PIECES_PER_TEAM_RANGE.end(),
                self.pieces_per_team
            )));
        }
        Ok(())
    }

    /// Total number of pieces in the match.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.team_count * self.pieces_per_team
    }

    /// The piece ids owned by `team`, in activation order.
    pub fn pieces_of(&self, team: TeamId) -> impl Iterator<Item = PieceId> {
        let start = team.index() * self.pieces_per_team;
        (start..start + self.pieces_per_team).map(|i| PieceId::new(i as u16))
    }

    /// The team that owns `piece`, or `None` if the id is out of range.
    #[must_use]
    pub fn team_of(&self, piece: PieceId) -> Option<TeamId> {
        if piece.index() < self.piece_count() {
            Some(TeamId::new((piece.index() / self.pieces_per_team) as u8))
        } else {
            None
        }
    }
}
