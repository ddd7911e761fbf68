//! Move resolution: movable sets, tile-by-tile paths, capture handling.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::board::{self, Square};
use crate::core::{Color, GameState, Location, Pawn, PawnId};
use crate::error::EngineError;
use crate::port::MoveObserver;
use crate::rules::destination::{legal_destination, Destination};

/// A capture resolved at the destination tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The pawn sent back to its home pool.
    pub pawn: PawnId,
    /// The spawn slot it now waits at.
    pub spawn_slot: u8,
}

/// Everything that happened while resolving one committed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The pawn that moved.
    pub pawn: PawnId,
    /// Where it ended up.
    pub destination: Destination,
    /// Every square traversed, in order, final square last. A roll is at
    /// most six steps, so the path never spills to the heap.
    pub path: SmallVec<[Square; 6]>,
    /// Opposing pawns captured at the final tile.
    pub captured: SmallVec<[Capture; 2]>,
    /// Whether the mover reached the last home-run slot.
    pub finished: bool,
}

/// The active color's pawns that can use `roll`, in creation order.
///
/// An overshooting pawn is simply absent from the set; the roll stays
/// usable by its siblings. Only an empty set makes the roll a pass.
#[must_use]
pub fn movable_pawns(state: &GameState, color: Color, roll: u8) -> SmallVec<[PawnId; 4]> {
    state
        .pawns_of(color)
        .filter(|p| legal_destination(p, roll).is_some())
        .map(|p| p.id)
        .collect()
}

/// The ordered squares `pawn` traverses to reach `destination`.
///
/// Main-path travel is tile by tile (the presentation layer animates each
/// hop); turning onto the home run is a single hop from the entry tile to
/// the landed slot, and entering play is a single hop from the spawn slot
/// to the start tile.
#[must_use]
pub fn move_path(pawn: &Pawn, destination: Destination) -> SmallVec<[Square; 6]> {
    let color = pawn.id.color;

    match (pawn.location(), destination) {
        (Location::AtHome { .. }, Destination::Main { index }) => {
            smallvec![Square::Main(index)]
        }
        (Location::OnMain { index: current, .. }, Destination::Main { index: target }) => {
            let mut path = SmallVec::new();
            let mut tile = current;
            while tile != target {
                tile = (tile + 1) % board::MAIN_PATH_LEN;
                path.push(Square::Main(tile));
            }
            path
        }
        (Location::OnMain { index: current, .. }, Destination::Home { index: target }) => {
            let entry = board::home_entry_index(color);
            let mut path = SmallVec::new();
            let mut tile = current;
            while tile != entry {
                tile = (tile + 1) % board::MAIN_PATH_LEN;
                path.push(Square::Main(tile));
            }
            path.push(Square::Home(color, target));
            path
        }
        (Location::OnHome { index: current }, Destination::Home { index: target }) => {
            (current + 1..=target)
                .map(|i| Square::Home(color, i))
                .collect()
        }
        (location, destination) => {
            debug_assert!(false, "no path from {location:?} to {destination:?}");
            SmallVec::new()
        }
    }
}

/// Apply a computed move: walk the path, notify the observer per tile,
/// resolve captures at the final tile, finish the pawn on the last home
/// slot.
///
/// `destination` must come from [`legal_destination`] for this pawn; the
/// mover being `Finished` is rejected defensively. State mutation is atomic
/// from the caller's perspective: captures and the finish transition are
/// applied on arrival, and an in-flight move cannot be cancelled.
pub fn apply_move(
    state: &mut GameState,
    id: PawnId,
    destination: Destination,
    observer: &mut dyn MoveObserver,
) -> Result<MoveOutcome, EngineError> {
    let mover = *state.pawn(id);
    let mut from = mover.square().ok_or(EngineError::IllegalMove { pawn: id })?;

    let path = move_path(&mover, destination);
    for &square in &path {
        state.pawn_mut(id).step_to(square);
        observer.pawn_stepped(id, from, square);
        from = square;
    }

    // capture is evaluated only at the final tile, never on safe tiles,
    // never on home-run slots
    let mut captured: SmallVec<[Capture; 2]> = SmallVec::new();
    if let Destination::Main { index } = destination {
        if !board::is_safe(index) {
            let victims: SmallVec<[PawnId; 4]> = state
                .main_occupants(index)
                .filter(|p| p.id.color != id.color)
                .map(|p| p.id)
                .collect();
            for victim in victims {
                let slot = state.first_free_spawn_slot(victim.color);
                state.pawn_mut(victim).send_home(slot);
                observer.pawn_captured(victim, slot);
                debug!(pawn = %victim, slot, "captured, sent home");
                captured.push(Capture {
                    pawn: victim,
                    spawn_slot: slot,
                });
            }
        }
    }

    let mut finished = false;
    if destination == (Destination::Home { index: board::HOME_RUN_LEN - 1 }) {
        state.pawn_mut(id).finish();
        finished = true;
        debug!(pawn = %id, "finished");
    }

    Ok(MoveOutcome {
        pawn: id,
        destination,
        path,
        captured,
        finished,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::NullObserver;

    /// Observer that records every notification, in order.
    #[derive(Default)]
    struct Recorder {
        steps: Vec<(PawnId, Square, Square)>,
        captures: Vec<(PawnId, u8)>,
    }

    impl MoveObserver for Recorder {
        fn pawn_stepped(&mut self, pawn: PawnId, from: Square, to: Square) {
            self.steps.push((pawn, from, to));
        }

        fn pawn_captured(&mut self, pawn: PawnId, spawn_slot: u8) {
            self.captures.push((pawn, spawn_slot));
        }
    }

    fn place_on_main(state: &mut GameState, id: PawnId, index: u8) {
        state.pawn_mut(id).enter_main(board::start_index(id.color));
        while state.pawn(id).main_index() != Some(index) {
            let next = (state.pawn(id).main_index().unwrap() + 1) % board::MAIN_PATH_LEN;
            state.pawn_mut(id).advance_on_main(next);
        }
    }

    #[test]
    fn test_movable_pawns_all_home_without_six() {
        let state = GameState::new(42);

        assert!(movable_pawns(&state, Color::Blue, 3).is_empty());

        let movable = movable_pawns(&state, Color::Blue, 6);
        assert_eq!(movable.len(), 4);
        // creation order
        assert_eq!(movable[0], PawnId::new(Color::Blue, 0));
        assert_eq!(movable[3], PawnId::new(Color::Blue, 3));
    }

    #[test]
    fn test_movable_pawns_filters_to_color() {
        let mut state = GameState::new(42);
        place_on_main(&mut state, PawnId::new(Color::Green, 0), 12);

        let movable = movable_pawns(&state, Color::Green, 2);
        assert_eq!(movable.as_slice(), &[PawnId::new(Color::Green, 0)]);

        // other colors see nothing movable with a non-six
        assert!(movable_pawns(&state, Color::Red, 2).is_empty());
    }

    #[test]
    fn test_overshooting_pawn_absent_but_sibling_usable() {
        let mut state = GameState::new(42);
        // Red#0 one tile before its entry: a 6 overshoots
        place_on_main(&mut state, PawnId::new(Color::Red, 0), 28);
        // Red#1 far from home: 6 is a plain advance
        place_on_main(&mut state, PawnId::new(Color::Red, 1), 2);

        let movable = movable_pawns(&state, Color::Red, 6);
        assert_eq!(movable.as_slice(), &[PawnId::new(Color::Red, 1)]);
    }

    #[test]
    fn test_path_entering_play() {
        let pawn = Pawn::new(PawnId::new(Color::Yellow, 0));
        let path = move_path(&pawn, Destination::Main { index: 20 });

        assert_eq!(path.as_slice(), &[Square::Main(20)]);
    }

    #[test]
    fn test_path_main_advance_lists_every_tile() {
        let mut state = GameState::new(42);
        let id = PawnId::new(Color::Blue, 0);
        place_on_main(&mut state, id, 37);

        let path = move_path(state.pawn(id), Destination::Main { index: 39 });
        assert_eq!(path.as_slice(), &[Square::Main(38), Square::Main(39)]);
    }

    #[test]
    fn test_path_wraps_around_the_board() {
        let mut state = GameState::new(42);
        let id = PawnId::new(Color::Green, 0);
        place_on_main(&mut state, id, 38);

        let path = move_path(state.pawn(id), Destination::Main { index: 1 });
        assert_eq!(
            path.as_slice(),
            &[Square::Main(39), Square::Main(0), Square::Main(1)]
        );
    }

    #[test]
    fn test_path_into_home_run_hops_once_from_entry() {
        let mut state = GameState::new(42);
        let id = PawnId::new(Color::Blue, 0);
        place_on_main(&mut state, id, 37);

        // entry at 39, then directly onto home slot 1
        let path = move_path(state.pawn(id), Destination::Home { index: 1 });
        assert_eq!(
            path.as_slice(),
            &[
                Square::Main(38),
                Square::Main(39),
                Square::Home(Color::Blue, 1)
            ]
        );
    }

    #[test]
    fn test_path_within_home_run() {
        let mut state = GameState::new(42);
        let id = PawnId::new(Color::Red, 0);
        state.pawn_mut(id).enter_main(30);
        state.pawn_mut(id).enter_home_run(0);

        let path = move_path(state.pawn(id), Destination::Home { index: 2 });
        assert_eq!(
            path.as_slice(),
            &[Square::Home(Color::Red, 1), Square::Home(Color::Red, 2)]
        );
    }

    #[test]
    fn test_apply_move_walks_and_reports_each_step() {
        let mut state = GameState::new(42);
        let id = PawnId::new(Color::Blue, 0);
        place_on_main(&mut state, id, 10);

        let mut recorder = Recorder::default();
        let outcome =
            apply_move(&mut state, id, Destination::Main { index: 13 }, &mut recorder).unwrap();

        assert_eq!(outcome.path.len(), 3);
        assert_eq!(recorder.steps.len(), 3);
        assert_eq!(
            recorder.steps[0],
            (id, Square::Main(10), Square::Main(11))
        );
        assert_eq!(
            recorder.steps[2],
            (id, Square::Main(12), Square::Main(13))
        );
        assert_eq!(
            state.pawn(id).location(),
            Location::OnMain { index: 13, steps: 13 }
        );
    }

    #[test]
    fn test_capture_on_shared_tile() {
        let mut state = GameState::new(42);
        let blue = PawnId::new(Color::Blue, 0);
        let green = PawnId::new(Color::Green, 0);
        place_on_main(&mut state, green, 15);
        place_on_main(&mut state, blue, 13);

        let mut recorder = Recorder::default();
        let outcome =
            apply_move(&mut state, blue, Destination::Main { index: 15 }, &mut recorder).unwrap();

        assert_eq!(
            outcome.captured.as_slice(),
            &[Capture {
                pawn: green,
                spawn_slot: 4
            }]
        );
        assert_eq!(recorder.captures, vec![(green, 4)]);
        assert_eq!(
            state.pawn(green).location(),
            Location::AtHome { spawn_slot: 4 }
        );
        // the mover stays put
        assert_eq!(state.pawn(blue).main_index(), Some(15));
    }

    #[test]
    fn test_no_capture_on_safe_tile() {
        let mut state = GameState::new(42);
        let blue = PawnId::new(Color::Blue, 0);
        let green = PawnId::new(Color::Green, 0);
        place_on_main(&mut state, green, 9);
        place_on_main(&mut state, blue, 7);

        let outcome = apply_move(
            &mut state,
            blue,
            Destination::Main { index: 9 },
            &mut NullObserver,
        )
        .unwrap();

        assert!(outcome.captured.is_empty());
        assert_eq!(state.pawn(green).main_index(), Some(9));
        assert_eq!(state.pawn(blue).main_index(), Some(9));
    }

    #[test]
    fn test_no_capture_of_same_color() {
        let mut state = GameState::new(42);
        let first = PawnId::new(Color::Yellow, 0);
        let second = PawnId::new(Color::Yellow, 1);
        place_on_main(&mut state, first, 25);
        place_on_main(&mut state, second, 23);

        let outcome = apply_move(
            &mut state,
            second,
            Destination::Main { index: 25 },
            &mut NullObserver,
        )
        .unwrap();

        assert!(outcome.captured.is_empty());
        assert_eq!(state.pawn(first).main_index(), Some(25));
    }

    #[test]
    fn test_capture_multiple_opposing_pawns() {
        let mut state = GameState::new(42);
        let red = PawnId::new(Color::Red, 0);
        let green0 = PawnId::new(Color::Green, 0);
        let green1 = PawnId::new(Color::Green, 1);
        // two green pawns stacked on a non-safe tile
        place_on_main(&mut state, green0, 33);
        place_on_main(&mut state, green1, 33);
        place_on_main(&mut state, red, 31);

        let outcome = apply_move(
            &mut state,
            red,
            Destination::Main { index: 33 },
            &mut NullObserver,
        )
        .unwrap();

        assert_eq!(outcome.captured.len(), 2);
        // first victim takes the first free slot, the second the next
        assert_eq!(outcome.captured[0].spawn_slot, 4);
        assert_eq!(outcome.captured[1].spawn_slot, 5);
        assert!(state.pawn(green0).is_at_home());
        assert!(state.pawn(green1).is_at_home());
    }

    #[test]
    fn test_capture_when_entering_from_home_pool() {
        let mut state = GameState::new(42);
        let green = PawnId::new(Color::Green, 0);
        let blue = PawnId::new(Color::Blue, 0);
        // Blue sits on Green's start tile (10, not safe)
        place_on_main(&mut state, blue, 10);

        let outcome = apply_move(
            &mut state,
            green,
            Destination::Main { index: 10 },
            &mut NullObserver,
        )
        .unwrap();

        assert_eq!(outcome.captured.len(), 1);
        assert!(state.pawn(blue).is_at_home());
        assert_eq!(state.pawn(green).main_index(), Some(10));
    }

    #[test]
    fn test_reaching_last_home_slot_finishes() {
        let mut state = GameState::new(42);
        let id = PawnId::new(Color::Blue, 0);
        state.pawn_mut(id).enter_main(0);
        state.pawn_mut(id).enter_home_run(1);

        let mut recorder = Recorder::default();
        let outcome =
            apply_move(&mut state, id, Destination::Home { index: 3 }, &mut recorder).unwrap();

        assert!(outcome.finished);
        assert!(state.pawn(id).is_finished());
        // both home steps were reported before the finish
        assert_eq!(recorder.steps.len(), 2);
        assert_eq!(
            recorder.steps[1].2,
            Square::Home(Color::Blue, 3)
        );
    }

    #[test]
    fn test_apply_move_rejects_finished_mover() {
        let mut state = GameState::new(42);
        let id = PawnId::new(Color::Blue, 0);
        state.pawn_mut(id).finish();

        let result = apply_move(
            &mut state,
            id,
            Destination::Main { index: 5 },
            &mut NullObserver,
        );

        assert_eq!(result, Err(EngineError::IllegalMove { pawn: id }));
    }

    #[test]
    fn test_move_outcome_serialization() {
        let mut state = GameState::new(42);
        let id = PawnId::new(Color::Blue, 0);
        place_on_main(&mut state, id, 37);

        let outcome = apply_move(
            &mut state,
            id,
            Destination::Home { index: 0 },
            &mut NullObserver,
        )
        .unwrap();

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: MoveOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
