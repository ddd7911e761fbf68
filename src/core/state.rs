//! Owned game state: the sixteen pawns and the game RNG.
//!
//! There is no ambient singleton: `GameState` is a plain value passed
//! explicitly to the rules engine, owned by whatever coordinates the game
//! (normally a [`TurnController`](crate::turn::TurnController)).
//!
//! Pawn locations are mutated only through rules-engine operations; the
//! accessors here are read-only queries over the fixed pawn array.

use tracing::debug;

use crate::board;
use crate::core::pawn::{Location, Pawn, PawnId, PAWN_COUNT, PAWNS_PER_COLOR};
use crate::core::{Color, ColorMap, GameRng};

/// Complete game state.
///
/// The sixteen pawns live in a fixed array in creation order (Blue 0..3,
/// Green 0..3, Yellow 0..3, Red 0..3), which is also the order every query
/// reports them in.
#[derive(Clone, Debug)]
pub struct GameState {
    pawns: [Pawn; PAWN_COUNT],
    /// Deterministic RNG for dice rolls.
    pub rng: GameRng,
}

impl GameState {
    /// Create a fresh game: all pawns waiting in their creation-order spawn
    /// slots.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            pawns: std::array::from_fn(|i| Pawn::new(PawnId::from_flat_index(i))),
            rng: GameRng::new(seed),
        }
    }

    /// Look up a pawn by identity.
    #[must_use]
    pub fn pawn(&self, id: PawnId) -> &Pawn {
        &self.pawns[id.flat_index()]
    }

    pub(crate) fn pawn_mut(&mut self, id: PawnId) -> &mut Pawn {
        &mut self.pawns[id.flat_index()]
    }

    /// All pawns in creation order.
    pub fn pawns(&self) -> impl Iterator<Item = &Pawn> {
        self.pawns.iter()
    }

    /// A color's four pawns in creation order.
    pub fn pawns_of(&self, color: Color) -> impl Iterator<Item = &Pawn> {
        self.pawns.iter().filter(move |p| p.id.color == color)
    }

    /// Pawns currently standing on the given main-path tile.
    pub fn main_occupants(&self, main_index: u8) -> impl Iterator<Item = &Pawn> {
        self.pawns
            .iter()
            .filter(move |p| p.main_index() == Some(main_index))
    }

    /// First spawn slot of `color` not occupied by one of its waiting pawns.
    ///
    /// Slots are scanned in fixed order from the color's base slot. With four
    /// pawns and four slots a free slot always exists when a pawn is being
    /// sent home; the base slot is returned as a fallback if the scan ever
    /// comes up empty.
    #[must_use]
    pub fn first_free_spawn_slot(&self, color: Color) -> u8 {
        let base = board::spawn_base(color);
        for slot in base..base + PAWNS_PER_COLOR {
            let occupied = self
                .pawns
                .iter()
                .any(|p| matches!(p.location(), Location::AtHome { spawn_slot } if spawn_slot == slot));
            if !occupied {
                return slot;
            }
        }
        debug!(%color, "all spawn slots occupied, falling back to base slot");
        base
    }

    /// How many of a color's pawns have finished.
    #[must_use]
    pub fn finished_count(&self, color: Color) -> usize {
        self.pawns_of(color).filter(|p| p.is_finished()).count()
    }

    /// Finished-pawn counts for all colors. A caller implements its win
    /// check on top of this (a color wins once its count reaches four).
    #[must_use]
    pub fn finished_counts(&self) -> ColorMap<usize> {
        ColorMap::new(|color| self.finished_count(color))
    }
}
