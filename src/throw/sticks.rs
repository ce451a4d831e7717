//! Seeded four-stick thrower.

use super::{ThrowGenerator, ThrowOutcome};
use crate::core::rng::{GameRng, GameRngState};

/// Number of sticks thrown per turn.
pub const STICK_COUNT: usize = 4;

/// Index of the stick carrying the back-do mark.
const MARKED_STICK: usize = 0;

/// Throws four fair sticks with a deterministic RNG.
///
/// ```
/// use yut_engine::throw::{StickThrower, ThrowGenerator};
///
/// let mut a = StickThrower::new(3);
/// let mut b = StickThrower::new(3);
/// assert_eq!(a.throw(), b.throw());
/// ```
#[derive(Clone, Debug)]
pub struct StickThrower {
    rng: GameRng,
}

impl StickThrower {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Resume a thrower from a saved RNG state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Read an outcome off the faces shown: `true` means flat side up.
    #[must_use]
    pub fn read(faces: [bool; STICK_COUNT]) -> ThrowOutcome {
        match faces.iter().filter(|flat| **flat).count() {
            0 => ThrowOutcome::Five,
            1 if faces[MARKED_STICK] => ThrowOutcome::BackOne,
            1 => ThrowOutcome::One,
            2 => ThrowOutcome::Two,
            3 => ThrowOutcome::Three,
            _ => ThrowOutcome::Four,
        }
    }
}

impl ThrowGenerator for StickThrower {
    fn throw(&mut self) -> ThrowOutcome {
        let mut faces = [false; STICK_COUNT];
        for face in &mut faces {
            *face = self.rng.gen_bool(0.5);
        }
        Self::read(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_every_face_combination() {
        let mut counts = std::collections::HashMap::new();
        for bits in 0u8..16 {
            let faces = [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0];
            *counts.entry(StickThrower::read(faces)).or_insert(0u32) += 1;
        }

        for outcome in ThrowOutcome::ALL {
            assert_eq!(counts[&outcome], outcome.weight(), "{}", outcome);
        }
    }

    #[test]
    fn test_marked_stick_alone_is_back_one() {
        assert_eq!(
            StickThrower::read([true, false, false, false]),
            ThrowOutcome::BackOne
        );
        assert_eq!(StickThrower::read([false, true, false, false]), ThrowOutcome::One);
    }

    #[test]
    fn test_distribution_roughly_matches_weights() {
        let mut thrower = StickThrower::new(42);
        let mut counts = std::collections::HashMap::new();
        let n = 16_000;
        for _ in 0..n {
            *counts.entry(thrower.throw()).or_insert(0u32) += 1;
        }

        for outcome in ThrowOutcome::ALL {
            let expected = n as f64 * outcome.weight() as f64 / 16.0;
            let actual = *counts.get(&outcome).unwrap_or(&0) as f64;
            assert!(
                (actual - expected).abs() < expected * 0.15,
                "{}: expected ~{}, got {}",
                outcome,
                expected,
                actual
            );
        }
    }

    #[test]
    fn test_state_resume() {
        let mut thrower = StickThrower::new(9);
        for _ in 0..5 {
            thrower.throw();
        }
        let state = thrower.state();
        let expected: Vec<_> = (0..10).map(|_| thrower.throw()).collect();

        let mut resumed = StickThrower::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| resumed.throw()).collect();
        assert_eq!(expected, actual);
    }
}
