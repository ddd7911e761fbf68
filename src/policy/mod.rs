//! Move-selection policies.
//!
//! The engine never distinguishes "AI" from "human" — it only knows which
//! color may act. A policy is a strategy for choosing among the movable
//! pawns; a human player is simply the UI acting as the policy.

use crate::core::{GameRng, GameState, PawnId};

/// Strategy for choosing which movable pawn to commit.
pub trait PawnPolicy {
    /// Choose a pawn from the movable set.
    ///
    /// `movable` is never reordered by the caller; index 0 is the earliest
    /// pawn in creation order. Returns `None` only when `movable` is empty.
    fn choose(&mut self, state: &GameState, movable: &[PawnId], roll: u8) -> Option<PawnId>;

    /// Policy name for logs and diagnostics.
    fn name(&self) -> &str;
}

/// Picks uniformly at random from the movable set.
///
/// Owns its RNG so choices are reproducible from the seed independently of
/// the dice stream.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a random policy with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl PawnPolicy for RandomPolicy {
    fn choose(&mut self, _state: &GameState, movable: &[PawnId], _roll: u8) -> Option<PawnId> {
        self.rng.choose(movable).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Always picks the first movable pawn. Deterministic baseline for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMovable;

impl PawnPolicy for FirstMovable {
    fn choose(&mut self, _state: &GameState, movable: &[PawnId], _roll: u8) -> Option<PawnId> {
        movable.first().copied()
    }

    fn name(&self) -> &str {
        "first-movable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn movable() -> Vec<PawnId> {
        (0..4).map(|i| PawnId::new(Color::Blue, i)).collect()
    }

    #[test]
    fn test_random_policy_picks_from_set() {
        let state = GameState::new(42);
        let mut policy = RandomPolicy::new(7);
        let set = movable();

        for _ in 0..100 {
            let choice = policy.choose(&state, &set, 6).unwrap();
            assert!(set.contains(&choice));
        }
    }

    #[test]
    fn test_random_policy_is_seeded() {
        let state = GameState::new(42);
        let set = movable();

        let picks1: Vec<_> = {
            let mut policy = RandomPolicy::new(11);
            (0..20).map(|_| policy.choose(&state, &set, 6)).collect()
        };
        let picks2: Vec<_> = {
            let mut policy = RandomPolicy::new(11);
            (0..20).map(|_| policy.choose(&state, &set, 6)).collect()
        };

        assert_eq!(picks1, picks2);
    }

    #[test]
    fn test_random_policy_empty_set() {
        let state = GameState::new(42);
        let mut policy = RandomPolicy::new(7);

        assert_eq!(policy.choose(&state, &[], 3), None);
    }

    #[test]
    fn test_first_movable_is_deterministic() {
        let state = GameState::new(42);
        let mut policy = FirstMovable;
        let set = movable();

        assert_eq!(policy.choose(&state, &set, 2), Some(set[0]));
        assert_eq!(policy.choose(&state, &[], 2), None);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(RandomPolicy::new(0).name(), "random");
        assert_eq!(FirstMovable.name(), "first-movable");
    }
}
