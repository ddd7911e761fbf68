//! Turn control: rotation, roll lifecycle, bonus turns.

pub mod controller;

pub use controller::{TurnController, TurnPhase};
