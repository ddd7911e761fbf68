//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! The four players are identified by color. Turn order is the fixed cycle
//! Blue → Green → Yellow → Red → Blue.
//!
//! ## ColorMap
//!
//! Per-color data storage backed by a `[T; 4]` for O(1) access.
//! Supports iteration and indexing by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A player color. Doubles as the player identity: there is exactly one
/// player per color, always four players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Green,
    Yellow,
    Red,
}

impl Color {
    /// Number of players in a game.
    pub const COUNT: usize = 4;

    /// Fixed turn rotation, starting with the color that opens the game.
    pub const ROTATION: [Color; 4] = [Color::Blue, Color::Green, Color::Yellow, Color::Red];

    /// Position of this color in the turn rotation (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Blue => 0,
            Color::Green => 1,
            Color::Yellow => 2,
            Color::Red => 3,
        }
    }

    /// The color that plays after this one.
    ///
    /// ```
    /// use rust_ludo::Color;
    ///
    /// assert_eq!(Color::Blue.next(), Color::Green);
    /// assert_eq!(Color::Red.next(), Color::Blue);
    /// ```
    #[must_use]
    pub const fn next(self) -> Color {
        match self {
            Color::Blue => Color::Green,
            Color::Green => Color::Yellow,
            Color::Yellow => Color::Red,
            Color::Red => Color::Blue,
        }
    }

    /// Iterate over all colors in rotation order.
    pub fn all() -> impl Iterator<Item = Color> {
        Self::ROTATION.into_iter()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
        };
        write!(f, "{name}")
    }
}

/// Per-color data storage with O(1) access.
///
/// Backed by a `[T; 4]` with one entry per color, in rotation order.
///
/// ## Example
///
/// ```
/// use rust_ludo::{Color, ColorMap};
///
/// let mut finished: ColorMap<u8> = ColorMap::with_value(0);
/// finished[Color::Green] = 2;
///
/// assert_eq!(finished[Color::Blue], 0);
/// assert_eq!(finished[Color::Green], 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 4],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    ///
    /// The factory receives the `Color` for each entry.
    pub fn new(mut factory: impl FnMut(Color) -> T) -> Self {
        Self {
            data: Color::ROTATION.map(&mut factory),
        }
    }

    /// Create a new ColorMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new ColorMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Iterate over (Color, &T) pairs in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ROTATION.iter().copied().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}
