//! Output events consumed by rendering, UI, or logging layers.
//!
//! Events are plain data emitted by the turn controller as play progresses.
//! The core never waits on their consumption; callers drain them whenever
//! convenient (see [`TurnController::drain_events`]).
//!
//! [`TurnController::drain_events`]: crate::turn::TurnController::drain_events

use serde::{Deserialize, Serialize};

use crate::core::{Color, PawnId};

/// Something observable happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The active color rolled the dice.
    DiceRolled { color: Color, value: u8 },
    /// The movable-pawn set was recomputed for the pending roll. Empty means
    /// the roll is unusable and the turn will be passed.
    MovablePawnsChanged { pawns: Vec<PawnId> },
    /// A pawn traversed one logical tile (flat board index 0..56).
    PawnStepped { pawn: PawnId, tile: u8 },
    /// A pawn was captured and sent back to the given spawn slot.
    PawnCaptured { pawn: PawnId, spawn_slot: u8 },
    /// A pawn reached the last home-run slot.
    PawnFinished { pawn: PawnId },
    /// The turn rotated to a new color. Not emitted for a bonus turn.
    TurnChanged { color: Color },
}
