//! The animation port: how the core reports physical pawn travel.
//!
//! A presentation layer implements [`MoveObserver`] to animate pawns tile
//! by tile and to react to captures. Notifications are one-way and
//! synchronous from the core's point of view; pacing, tweening, and
//! serializing playback before the next roll are entirely the caller's
//! concern (a busy flag on the caller's side suffices).

use crate::board::Square;
use crate::core::PawnId;

/// Receiver for per-move notifications.
///
/// Both methods default to no-ops so an implementation only overrides what
/// it renders.
pub trait MoveObserver {
    /// A pawn traversed one logical tile of a multi-step advance.
    ///
    /// Called once per intermediate tile as well as the final one, because
    /// captures and safety are only evaluated at the destination while
    /// animation wants the whole path.
    fn pawn_stepped(&mut self, _pawn: PawnId, _from: Square, _to: Square) {}

    /// A pawn was captured and sent back to the given spawn slot.
    fn pawn_captured(&mut self, _pawn: PawnId, _spawn_slot: u8) {}
}

/// Observer that ignores every notification. For headless use and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MoveObserver for NullObserver {}
