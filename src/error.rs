//! Error taxonomy for the rules engine and turn controller.
//!
//! None of these are fatal. A rejected command leaves all game state
//! untouched and is logged at debug level; callers that drive a UI can
//! ignore the error entirely and wait for the next valid input.

use crate::board::Square;
use crate::core::PawnId;

/// Errors reported by the turn controller and rules engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// An action was requested outside its valid turn phase (rolling while
    /// a roll is pending, committing with nothing selected, and so on).
    #[error("{command} is not valid in the current turn phase")]
    InvalidCommand { command: &'static str },

    /// A move was committed for a pawn with no legal destination under the
    /// pending roll.
    #[error("{pawn} cannot make the requested move")]
    IllegalMove { pawn: PawnId },

    /// A square failed to resolve against the fixed board layout.
    #[error("no board tile mapped for {0:?}")]
    ConfigurationMissing(Square),
}
