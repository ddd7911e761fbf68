//! The rules engine: legal-move computation and move resolution.
//!
//! Everything here is deterministic given the game state; dice randomness
//! lives with the turn controller. That makes the whole module unit-testable
//! with no rendering or timing dependency, and safe to drive from a single
//! authoritative coordinator.

pub mod destination;
pub mod engine;

pub use destination::{legal_destination, Destination};
pub use engine::{apply_move, movable_pawns, move_path, Capture, MoveOutcome};
