//! Throw outcomes and throw generators.
//!
//! The engine consumes one [`ThrowOutcome`] per turn and never decides how
//! it was produced. Anything that produces outcomes implements
//! [`ThrowGenerator`]; the crate ships [`StickThrower`], a seeded simulation
//! of four yut sticks.
//!
//! ## Stick combinatorics
//!
//! Each of the four sticks lands flat side up with probability 1/2, and one
//! stick carries a back-do mark. Counting flat sides:
//!
//! | flat sides | outcome | weight /16 |
//! |---|---|---|
//! | 1 (marked stick) | `BackOne` | 1 |
//! | 1 (other stick) | `One` | 3 |
//! | 2 | `Two` | 6 |
//! | 3 | `Three` | 4 |
//! | 4 | `Four` | 1 |
//! | 0 | `Five` | 1 |

mod sticks;

pub use sticks::{StickThrower, STICK_COUNT};

use serde::{Deserialize, Serialize};

/// One of the six throw results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowOutcome {
    /// back-do: one step backward.
    BackOne,
    /// do
    One,
    /// gae
    Two,
    /// geol
    Three,
    /// yut
    Four,
    /// mo
    Five,
}

impl ThrowOutcome {
    /// All outcomes, from `BackOne` to `Five`.
    pub const ALL: [ThrowOutcome; 6] = [
        Self::BackOne,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
    ];

    /// Signed step count: negative moves backward.
    ///
    /// ```
    /// use yut_engine::throw::ThrowOutcome;
    ///
    /// assert_eq!(ThrowOutcome::BackOne.steps(), -1);
    /// assert_eq!(ThrowOutcome::Five.steps(), 5);
    /// ```
    #[must_use]
    pub const fn steps(self) -> i8 {
        match self {
            Self::BackOne => -1,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Relative likelihood out of 16 under the stick model.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::BackOne => 1,
            Self::One => 3,
            Self::Two => 6,
            Self::Three => 4,
            Self::Four => 1,
            Self::Five => 1,
        }
    }

    /// Traditional name of the outcome.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BackOne => "back-do",
            Self::One => "do",
            Self::Two => "gae",
            Self::Three => "geol",
            Self::Four => "yut",
            Self::Five => "mo",
        }
    }
}

impl std::fmt::Display for ThrowOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of throw outcomes.
///
/// Implementations must return exactly one outcome per call. Re-throwing
/// on an ambiguous physical reading is the generator's business.
pub trait ThrowGenerator {
    fn throw(&mut self) -> ThrowOutcome;
}

/// Replays a fixed list of outcomes, then repeats the last one.
///
/// Handy for tests and scripted demos.
#[derive(Clone, Debug)]
pub struct ScriptedThrows {
    outcomes: Vec<ThrowOutcome>,
    next: usize,
}

impl ScriptedThrows {
    /// Create a script. Panics if `outcomes` is empty.
    #[must_use]
    pub fn new(outcomes: Vec<ThrowOutcome>) -> Self {
        assert!(!outcomes.is_empty(), "Script needs at least one outcome");
        Self { outcomes, next: 0 }
    }
}

impl ThrowGenerator for ScriptedThrows {
    fn throw(&mut self) -> ThrowOutcome {
        let outcome = self.outcomes[self.next.min(self.outcomes.len() - 1)];
        self.next += 1;
        outcome
    }
}
