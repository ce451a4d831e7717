//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! Type-safe team identifier. Teams take turns in `TeamId` order.
//!
//! ## TeamMap
//!
//! Per-team storage backed by `Vec` for O(1) access, indexable by `TeamId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Team identifier.
///
/// Team indices are 0-based: the first team to throw is `TeamId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The team that throws after this one in a match of `team_count` teams.
    ///
    /// ```
    /// use yut_engine::core::TeamId;
    ///
    /// assert_eq!(TeamId::new(0).next(3), TeamId::new(1));
    /// assert_eq!(TeamId::new(2).next(3), TeamId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, team_count: usize) -> Self {
        Self(((self.index() + 1) % team_count) as u8)
    }

    /// Iterate over all team IDs for a match with `team_count` teams.
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Per-team data storage with O(1) access.
///
/// ```
/// use yut_engine::core::{TeamId, TeamMap};
///
/// let mut captures: TeamMap<u32> = TeamMap::with_value(2, 0);
/// captures[TeamId::new(1)] += 1;
/// assert_eq!(captures[TeamId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: Vec<T>,
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(team_count: usize, factory: impl Fn(TeamId) -> T) -> Self {
        assert!(team_count > 0, "Must have at least 1 team");
        assert!(team_count <= 255, "At most 255 teams supported");

        let data = (0..team_count as u8).map(|i| factory(TeamId(i))).collect();

        Self { data }
    }

    /// Create a new TeamMap with all entries set to the same value.
    pub fn with_value(team_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(team_count, |_| value.clone())
    }

    /// Create a new TeamMap with default values.
    pub fn with_default(team_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(team_count, |_| T::default())
    }

    /// Get the number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        &self.data[team.index()]
    }

    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamId, &T) pairs in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (TeamId(i as u8), v))
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_basics() {
        let t0 = TeamId::new(0);
        assert_eq!(t0.index(), 0);
        assert_eq!(format!("{}", TeamId::new(3)), "Team 3");
    }

    #[test]
    fn test_team_id_next_wraps() {
        let order: Vec<_> = std::iter::successors(Some(TeamId::new(0)), |t| Some(t.next(4)))
            .take(5)
            .collect();
        assert_eq!(
            order,
            vec![TeamId(0), TeamId(1), TeamId(2), TeamId(3), TeamId(0)]
        );
    }

    #[test]
    fn test_team_map_new_and_iter() {
        let map: TeamMap<u32> = TeamMap::new(3, |t| t.index() as u32 * 10);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(TeamId(0), &0), (TeamId(1), &10), (TeamId(2), &20)]);
        assert_eq!(map.team_count(), 3);
    }

    #[test]
    fn test_team_map_serialization() {
        let map: TeamMap<u8> = TeamMap::with_value(2, 4);
        let json = serde_json::to_string(&map).unwrap();
        let back: TeamMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 team")]
    fn test_team_map_zero_teams() {
        let _: TeamMap<u8> = TeamMap::with_default(0);
    }
}
