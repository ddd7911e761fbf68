//! Core types: colors, pawns, game state, RNG.
//!
//! These are the building blocks everything else operates on. The rules
//! engine in [`crate::rules`] is the only writer of pawn state.

pub mod color;
pub mod pawn;
pub mod rng;
pub mod state;

pub use color::{Color, ColorMap};
pub use pawn::{Location, Pawn, PawnId, PAWNS_PER_COLOR, PAWN_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
