//! Turn lifecycle: rolls, selection, commits, and rotation.

use smallvec::SmallVec;
use tracing::debug;

use crate::board;
use crate::core::{Color, GameState, PawnId};
use crate::error::EngineError;
use crate::events::GameEvent;
use crate::policy::PawnPolicy;
use crate::port::MoveObserver;
use crate::rules::{self, MoveOutcome};

/// Which input the controller is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// No roll pending: the active color may roll.
    AwaitingRoll,
    /// A roll is pending: awaiting a pawn selection and commit, or
    /// [`TurnController::pass_turn`] when nothing is movable.
    AwaitingSelection,
    /// A move is being resolved; rolls and commits are rejected.
    MoveInProgress,
}

/// Drives a game: owns the [`GameState`], rotates the turn across the four
/// colors, and enforces the roll → select → commit lifecycle.
///
/// Commands issued outside their valid phase are rejected without touching
/// any state (and logged at debug level); a driving UI can simply ignore
/// the returned error and wait for valid input.
///
/// ## Example
///
/// ```
/// use rust_ludo::{NullObserver, RandomPolicy, TurnController};
///
/// let mut game = TurnController::new(42);
/// let mut policy = RandomPolicy::new(7);
///
/// // play a few fully-automatic turns
/// for _ in 0..8 {
///     game.play_auto_turn(&mut policy, &mut NullObserver).unwrap();
/// }
/// ```
pub struct TurnController {
    state: GameState,
    active: Color,
    current_roll: Option<u8>,
    movable: SmallVec<[PawnId; 4]>,
    selected: Option<usize>,
    moving: bool,
    events: Vec<GameEvent>,
}

impl TurnController {
    /// Create a controller for a fresh game. Blue opens, no roll pending.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            active: Color::Blue,
            current_roll: None,
            movable: SmallVec::new(),
            selected: None,
            moving: false,
            events: Vec::new(),
        }
    }

    /// The game state (read-only; all mutation goes through commits).
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The color whose turn it is.
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active
    }

    /// The pending roll, if any.
    #[must_use]
    pub fn current_roll(&self) -> Option<u8> {
        self.current_roll
    }

    /// Pawns of the active color that can use the pending roll, in creation
    /// order. Empty when no roll is pending or the roll is unusable.
    #[must_use]
    pub fn movable_pawns(&self) -> &[PawnId] {
        &self.movable
    }

    /// The currently selected movable pawn, if any.
    #[must_use]
    pub fn selected_pawn(&self) -> Option<PawnId> {
        self.selected.map(|i| self.movable[i])
    }

    /// Which input the controller is waiting for.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.moving {
            TurnPhase::MoveInProgress
        } else if self.current_roll.is_some() {
            TurnPhase::AwaitingSelection
        } else {
            TurnPhase::AwaitingRoll
        }
    }

    /// Take all events emitted since the last drain, in order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Roll the dice for the active color: uniform 1..=6.
    ///
    /// Recomputes the movable set and emits [`GameEvent::DiceRolled`] and
    /// [`GameEvent::MovablePawnsChanged`]. Rejected while a roll is already
    /// pending or a move is in flight.
    pub fn roll_dice(&mut self) -> Result<u8, EngineError> {
        if self.moving {
            debug!("roll_dice rejected: move in flight");
            return Err(EngineError::InvalidCommand {
                command: "roll_dice",
            });
        }
        if self.current_roll.is_some() {
            debug!("roll_dice rejected: roll already pending");
            return Err(EngineError::InvalidCommand {
                command: "roll_dice",
            });
        }

        let value = self.state.rng.roll_die();
        self.current_roll = Some(value);
        self.movable = rules::movable_pawns(&self.state, self.active, value);
        self.selected = None;

        self.events.push(GameEvent::DiceRolled {
            color: self.active,
            value,
        });
        self.events.push(GameEvent::MovablePawnsChanged {
            pawns: self.movable.to_vec(),
        });

        if self.movable.is_empty() {
            debug!(color = %self.active, value, "no legal moves, turn will pass");
        }
        Ok(value)
    }

    /// Select a movable pawn by index into [`movable_pawns`].
    ///
    /// Purely a UI cursor; no game-state effect.
    ///
    /// [`movable_pawns`]: Self::movable_pawns
    pub fn select_pawn(&mut self, index: usize) -> Result<PawnId, EngineError> {
        if self.moving || self.current_roll.is_none() || index >= self.movable.len() {
            debug!(index, "select_pawn rejected");
            return Err(EngineError::InvalidCommand {
                command: "select_pawn",
            });
        }
        self.selected = Some(index);
        Ok(self.movable[index])
    }

    /// Advance the selection cursor to the next movable pawn, wrapping.
    pub fn cycle_selection(&mut self) -> Result<PawnId, EngineError> {
        if self.moving || self.current_roll.is_none() || self.movable.is_empty() {
            debug!("cycle_selection rejected");
            return Err(EngineError::InvalidCommand {
                command: "cycle_selection",
            });
        }
        let next = self.selected.map_or(0, |i| (i + 1) % self.movable.len());
        self.selected = Some(next);
        Ok(self.movable[next])
    }

    /// Commit a move for the given pawn with the pending roll.
    ///
    /// Resolves the move through the rules engine (the observer sees every
    /// tile), then consumes the roll: a six grants the same color another
    /// roll, anything else rotates the turn.
    pub fn commit_move(
        &mut self,
        pawn: PawnId,
        observer: &mut dyn MoveObserver,
    ) -> Result<MoveOutcome, EngineError> {
        if self.moving {
            debug!("commit_move rejected: move in flight");
            return Err(EngineError::InvalidCommand {
                command: "commit_move",
            });
        }
        let Some(roll) = self.current_roll else {
            debug!("commit_move rejected: no pending roll");
            return Err(EngineError::InvalidCommand {
                command: "commit_move",
            });
        };
        if !self.movable.contains(&pawn) {
            debug!(%pawn, roll, "commit_move rejected: pawn is not movable");
            return Err(EngineError::IllegalMove { pawn });
        }
        let destination = rules::legal_destination(self.state.pawn(pawn), roll)
            .ok_or(EngineError::IllegalMove { pawn })?;

        // resolve the final tile before touching any state
        board::tile_index(destination.square(pawn.color))?;

        self.moving = true;
        let result = rules::apply_move(&mut self.state, pawn, destination, observer);
        self.moving = false;
        let outcome = result?;

        for &square in &outcome.path {
            if let Ok(tile) = board::tile_index(square) {
                self.events.push(GameEvent::PawnStepped { pawn, tile });
            }
        }
        for capture in &outcome.captured {
            self.events.push(GameEvent::PawnCaptured {
                pawn: capture.pawn,
                spawn_slot: capture.spawn_slot,
            });
        }
        if outcome.finished {
            self.events.push(GameEvent::PawnFinished { pawn });
        }

        self.consume_roll(roll);
        Ok(outcome)
    }

    /// Commit the move for the pawn under the selection cursor.
    pub fn commit_selected(
        &mut self,
        observer: &mut dyn MoveObserver,
    ) -> Result<MoveOutcome, EngineError> {
        let Some(pawn) = self.selected_pawn() else {
            debug!("commit_selected rejected: nothing selected");
            return Err(EngineError::InvalidCommand {
                command: "commit_selected",
            });
        };
        self.commit_move(pawn, observer)
    }

    /// Acknowledge an unusable roll and pass the turn.
    ///
    /// Valid only while a roll is pending and nothing is movable. Any
    /// visible delay before passing is the presentation layer's business;
    /// a headless caller passes immediately. A wasted six still grants the
    /// bonus turn.
    pub fn pass_turn(&mut self) -> Result<(), EngineError> {
        let Some(roll) = self.current_roll else {
            debug!("pass_turn rejected: no pending roll");
            return Err(EngineError::InvalidCommand { command: "pass_turn" });
        };
        if self.moving || !self.movable.is_empty() {
            debug!("pass_turn rejected: moves are available");
            return Err(EngineError::InvalidCommand { command: "pass_turn" });
        }
        self.consume_roll(roll);
        Ok(())
    }

    /// Play one full turn with a policy: roll, then commit its choice, or
    /// pass when nothing is movable.
    ///
    /// Returns the move outcome, or `None` when the turn was passed.
    pub fn play_auto_turn(
        &mut self,
        policy: &mut dyn PawnPolicy,
        observer: &mut dyn MoveObserver,
    ) -> Result<Option<MoveOutcome>, EngineError> {
        let roll = self.roll_dice()?;

        if self.movable.is_empty() {
            self.pass_turn()?;
            return Ok(None);
        }

        let choice = policy
            .choose(&self.state, &self.movable, roll)
            .unwrap_or(self.movable[0]);
        debug!(policy = policy.name(), pawn = %choice, roll, "auto turn");
        self.commit_move(choice, observer).map(Some)
    }

    /// Clear the consumed roll and rotate the turn unless it was a six.
    fn consume_roll(&mut self, used: u8) {
        self.current_roll = None;
        self.movable.clear();
        self.selected = None;

        if used != 6 {
            self.active = self.active.next();
            self.events.push(GameEvent::TurnChanged { color: self.active });
        }
    }
}
