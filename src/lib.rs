//! # rust-ludo
//!
//! A four-player Ludo rules engine: pawn lifecycle, dice-driven legal-move
//! computation, capture resolution, and turn rotation with bonus turns on a
//! six. Rendering, animation pacing, and input handling are external
//! collaborators that drive the engine and react to its outputs.
//!
//! ## Design Principles
//!
//! 1. **Illegal states are unrepresentable**: a pawn's location is a sum
//!    type over home pool, main path, home run, and finished — there are no
//!    stale index fields to misread.
//!
//! 2. **Presentation-free core**: the engine reports per-tile travel through
//!    the [`MoveObserver`] port and a drainable [`GameEvent`] stream; it
//!    never waits on playback.
//!
//! 3. **Deterministic**: all randomness flows from one seeded RNG, so whole
//!    games replay exactly and checkpoints are a tiny state snapshot.
//!
//! ## Modules
//!
//! - `core`: colors, pawns, game state, RNG
//! - `board`: static topology (paths, safe tiles, entries, spawn slots)
//! - `rules`: legal destinations, move paths, capture resolution
//! - `turn`: turn controller (roll, select, commit, pass, rotation)
//! - `policy`: pluggable move-selection strategies
//! - `port`: the animation/move-executor boundary
//! - `events`: output events for UI and logging layers
//! - `error`: the non-fatal command error taxonomy

pub mod board;
pub mod core;
pub mod error;
pub mod events;
pub mod policy;
pub mod port;
pub mod rules;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, GameRng, GameRngState, GameState, Location, Pawn, PawnId,
};

pub use crate::board::Square;

pub use crate::rules::{
    apply_move, legal_destination, movable_pawns, move_path, Capture, Destination, MoveOutcome,
};

pub use crate::events::GameEvent;

pub use crate::error::EngineError;

pub use crate::port::{MoveObserver, NullObserver};

pub use crate::turn::{TurnController, TurnPhase};

pub use crate::policy::{FirstMovable, PawnPolicy, RandomPolicy};
