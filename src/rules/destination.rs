//! Legal-destination computation: the central rules algorithm.

use serde::{Deserialize, Serialize};

use crate::board::{self, Square};
use crate::core::{Color, Location, Pawn};

/// Where a legal move ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    /// A main-path tile (entering play or a normal advance).
    Main { index: u8 },
    /// A slot on the mover's home run. Index 3 finishes the pawn.
    Home { index: u8 },
}

impl Destination {
    /// The square this destination lands on, for the given mover color.
    #[must_use]
    pub fn square(self, color: Color) -> Square {
        match self {
            Destination::Main { index } => Square::Main(index),
            Destination::Home { index } => Square::Home(color, index),
        }
    }
}

/// Where `pawn` would land with `roll`, or `None` if it cannot move.
///
/// Pure function; the rules in full:
/// - a waiting pawn enters at its start tile on a 6, otherwise cannot move
/// - a main-path pawn advances `roll` tiles; if that carries it past its
///   home-entry tile it turns onto the home run, landing `remaining - 1`
///   slots in; overshooting the last home slot wastes the move for this
///   pawn (another pawn of the same color may still use the roll)
/// - a home-run pawn advances iff it stays within the four slots
/// - a finished pawn never moves
///
/// ```
/// use rust_ludo::{legal_destination, Color, Destination, Pawn, PawnId};
///
/// let pawn = Pawn::new(PawnId::new(Color::Blue, 0));
/// assert_eq!(legal_destination(&pawn, 6), Some(Destination::Main { index: 0 }));
/// assert_eq!(legal_destination(&pawn, 3), None);
/// ```
#[must_use]
pub fn legal_destination(pawn: &Pawn, roll: u8) -> Option<Destination> {
    debug_assert!((1..=6).contains(&roll), "die roll must be 1..=6");
    let color = pawn.id.color;

    match pawn.location() {
        Location::AtHome { .. } => (roll == 6).then(|| Destination::Main {
            index: board::start_index(color),
        }),
        Location::OnMain { index, .. } => {
            let distance = board::distance_to_entry(color, index);
            if roll <= distance {
                Some(Destination::Main {
                    index: (index + roll) % board::MAIN_PATH_LEN,
                })
            } else {
                let remaining = roll - distance;
                let target = remaining - 1;
                (target < board::HOME_RUN_LEN).then_some(Destination::Home { index: target })
            }
        }
        Location::OnHome { index } => (index + roll < board::HOME_RUN_LEN)
            .then_some(Destination::Home { index: index + roll }),
        Location::Finished => None,
    }
}
