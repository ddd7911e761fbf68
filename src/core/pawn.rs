//! Pawn identity and the location state machine.
//!
//! ## PawnId
//!
//! A pawn is identified by its color and a local index 0..3. The sixteen
//! pawns have a fixed creation order (Blue 0..3, Green 0..3, Yellow 0..3,
//! Red 0..3) which doubles as the flat index 0..15.
//!
//! ## Location
//!
//! A pawn is in exactly one of four places: waiting in its spawn slot, on
//! the shared main path, on its private home run, or finished. The sum type
//! makes the "three booleans plus stale index fields" failure mode
//! unrepresentable: a main-path index simply does not exist for a pawn that
//! is not on the main path.
//!
//! Location transitions are crate-private and driven only by the rules
//! engine applying a computed destination, so an illegal transition cannot
//! be reached through the public API.

use serde::{Deserialize, Serialize};

use crate::board::{self, Square};
use crate::core::Color;

/// Pawns per color.
pub const PAWNS_PER_COLOR: u8 = 4;

/// Total pawns on the board.
pub const PAWN_COUNT: usize = 16;

/// Identity of a single pawn: color plus local index 0..3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PawnId {
    pub color: Color,
    pub local_index: u8,
}

impl PawnId {
    /// Create a pawn identity.
    #[must_use]
    pub fn new(color: Color, local_index: u8) -> Self {
        assert!(
            local_index < PAWNS_PER_COLOR,
            "local index must be 0..{PAWNS_PER_COLOR}"
        );
        Self { color, local_index }
    }

    /// Position in the fixed creation order (0..16).
    #[must_use]
    pub const fn flat_index(self) -> usize {
        self.color.index() * PAWNS_PER_COLOR as usize + self.local_index as usize
    }

    /// Rebuild an identity from its creation-order index.
    #[must_use]
    pub fn from_flat_index(index: usize) -> Self {
        assert!(index < PAWN_COUNT, "flat index must be 0..{PAWN_COUNT}");
        Self {
            color: Color::ROTATION[index / PAWNS_PER_COLOR as usize],
            local_index: (index % PAWNS_PER_COLOR as usize) as u8,
        }
    }

    /// Iterate over all sixteen pawn identities in creation order.
    pub fn all() -> impl Iterator<Item = PawnId> {
        (0..PAWN_COUNT).map(Self::from_flat_index)
    }
}

impl std::fmt::Display for PawnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.color, self.local_index)
    }
}

/// Where a pawn currently is. Exactly one variant holds at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// Waiting in the home pool at the given spawn slot (0..16).
    AtHome { spawn_slot: u8 },
    /// On the shared main path. `steps` counts tiles traveled since
    /// entering at the start tile.
    OnMain { index: u8, steps: u8 },
    /// On the color's private home run (0..4).
    OnHome { index: u8 },
    /// Reached the last home-run slot. Terminal: the pawn no longer moves
    /// and cannot be captured.
    Finished,
}

/// A single token: identity plus location state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pawn {
    pub id: PawnId,
    location: Location,
}

impl Pawn {
    /// Create a pawn waiting at its creation-order spawn slot.
    #[must_use]
    pub fn new(id: PawnId) -> Self {
        Self {
            id,
            location: Location::AtHome {
                spawn_slot: board::spawn_base(id.color) + id.local_index,
            },
        }
    }

    /// Current location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// The square this pawn occupies, or `None` once finished.
    #[must_use]
    pub fn square(&self) -> Option<Square> {
        match self.location {
            Location::AtHome { spawn_slot } => Some(Square::Spawn(spawn_slot)),
            Location::OnMain { index, .. } => Some(Square::Main(index)),
            Location::OnHome { index } => Some(Square::Home(self.id.color, index)),
            Location::Finished => None,
        }
    }

    /// Whether the pawn is waiting in its home pool.
    #[must_use]
    pub const fn is_at_home(&self) -> bool {
        matches!(self.location, Location::AtHome { .. })
    }

    /// Whether the pawn has reached the end of its home run.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.location, Location::Finished)
    }

    /// Main-path index if the pawn is on the main path.
    #[must_use]
    pub const fn main_index(&self) -> Option<u8> {
        match self.location {
            Location::OnMain { index, .. } => Some(index),
            _ => None,
        }
    }

    // === Transitions (rules engine only) ===

    /// Enter the main path at the color's start tile.
    pub(crate) fn enter_main(&mut self, start: u8) {
        debug_assert!(self.is_at_home(), "only a waiting pawn can enter play");
        self.location = Location::OnMain {
            index: start,
            steps: 0,
        };
    }

    /// Advance one tile along the main path.
    pub(crate) fn advance_on_main(&mut self, to: u8) {
        match self.location {
            Location::OnMain { steps, .. } => {
                self.location = Location::OnMain {
                    index: to,
                    steps: steps + 1,
                };
            }
            other => debug_assert!(false, "advance_on_main from {other:?}"),
        }
    }

    /// Turn off the main path onto the home run.
    pub(crate) fn enter_home_run(&mut self, index: u8) {
        debug_assert!(
            matches!(self.location, Location::OnMain { .. }),
            "home run is entered from the main path"
        );
        self.location = Location::OnHome { index };
    }

    /// Advance within the home run.
    pub(crate) fn advance_on_home(&mut self, to: u8) {
        debug_assert!(matches!(self.location, Location::OnHome { .. }));
        self.location = Location::OnHome { index: to };
    }

    /// Mark the pawn finished. Permanent.
    pub(crate) fn finish(&mut self) {
        self.location = Location::Finished;
    }

    /// Reset to the home pool at the given spawn slot, clearing all path
    /// progress.
    pub(crate) fn send_home(&mut self, spawn_slot: u8) {
        self.location = Location::AtHome { spawn_slot };
    }

    /// Apply one step of a computed move path.
    ///
    /// The (location, square) pairing is produced by the rules engine from
    /// this pawn's own location, so the fallthrough arm is unreachable in
    /// practice and intentionally a no-op in release builds.
    pub(crate) fn step_to(&mut self, square: Square) {
        match (self.location, square) {
            (Location::AtHome { .. }, Square::Main(index)) => self.enter_main(index),
            (Location::OnMain { .. }, Square::Main(index)) => self.advance_on_main(index),
            (Location::OnMain { .. }, Square::Home(_, index)) => self.enter_home_run(index),
            (Location::OnHome { .. }, Square::Home(_, index)) => self.advance_on_home(index),
            (location, square) => {
                debug_assert!(false, "invalid step from {location:?} to {square:?}");
            }
        }
    }
}
