//! Static board topology.
//!
//! The board is a fixed 56-tile layout:
//! - tiles 0..40: the shared circular main path all colors traverse
//! - tiles 40..56: the four private home runs (4 tiles per color, contiguous,
//!   in rotation order Blue, Green, Yellow, Red)
//!
//! Spawn slots (the home pools where pawns wait to enter play) are a separate
//! 16-slot space, 4 per color, and have no board tile.
//!
//! Everything here is a pure function over compile-time constants; nothing
//! is runtime-configurable and nothing can fail except [`tile_index`], which
//! validates a [`Square`] against the fixed layout.

use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::EngineError;

/// Length of the shared circular main path.
pub const MAIN_PATH_LEN: u8 = 40;

/// Length of each color's private home run.
pub const HOME_RUN_LEN: u8 = 4;

/// Total spawn slots (4 per color).
pub const SPAWN_SLOT_COUNT: u8 = 16;

/// Total board tiles: main path plus the four home runs.
pub const BOARD_TILE_COUNT: u8 = 56;

/// Main-path tile where a color's pawns enter play.
#[must_use]
pub const fn start_index(color: Color) -> u8 {
    match color {
        Color::Blue => 0,
        Color::Green => 10,
        Color::Yellow => 20,
        Color::Red => 30,
    }
}

/// Last main-path tile before a color turns off into its home run.
///
/// This is the tile immediately before the color's start tile.
#[must_use]
pub const fn home_entry_index(color: Color) -> u8 {
    (start_index(color) + MAIN_PATH_LEN - 1) % MAIN_PATH_LEN
}

/// First board-tile index of a color's home run (tiles 40..56).
#[must_use]
pub const fn home_run_base(color: Color) -> u8 {
    match color {
        Color::Blue => 40,
        Color::Green => 44,
        Color::Yellow => 48,
        Color::Red => 52,
    }
}

/// First spawn slot owned by a color (slots 0..16).
#[must_use]
pub const fn spawn_base(color: Color) -> u8 {
    match color {
        Color::Blue => 0,
        Color::Green => 4,
        Color::Yellow => 8,
        Color::Red => 12,
    }
}

/// Whether a main-path tile is safe from capture.
#[must_use]
pub const fn is_safe(main_index: u8) -> bool {
    matches!(main_index, 0 | 9 | 19 | 29)
}

/// Steps from a main-path tile to a color's home-entry tile, following the
/// direction of play. Zero when already on the entry tile.
#[must_use]
pub const fn distance_to_entry(color: Color, main_index: u8) -> u8 {
    (home_entry_index(color) + MAIN_PATH_LEN - main_index) % MAIN_PATH_LEN
}

/// A logical position on or off the board.
///
/// `Spawn` slots have no board tile; `Main` and `Home` squares map onto the
/// flat 0..56 tile space via [`tile_index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// A spawn slot in a color's home pool (0..16).
    Spawn(u8),
    /// A shared main-path tile (0..40).
    Main(u8),
    /// A slot on a color's private home run (0..4).
    Home(Color, u8),
}

/// Resolve a square to its flat board-tile index (0..56).
///
/// Fails with [`EngineError::ConfigurationMissing`] for spawn slots (which
/// have no board tile) and for squares outside the fixed layout. Callers
/// treat that as a defensive no-op, never a crash.
pub fn tile_index(square: Square) -> Result<u8, EngineError> {
    match square {
        Square::Main(index) if index < MAIN_PATH_LEN => Ok(index),
        Square::Home(color, index) if index < HOME_RUN_LEN => Ok(home_run_base(color) + index),
        _ => Err(EngineError::ConfigurationMissing(square)),
    }
}
