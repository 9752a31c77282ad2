//! Misere Nim game state engine.
//!
//! Boards are ordered pile counts; a move removes one or more objects
//! from a single pile. Whoever removes the last object loses. The
//! engine is a family of pure `Copy` value types: applying a move
//! derives a child state and never mutates its parent, which keeps
//! states usable as ordered map keys in the learning layer.

mod action;
mod board;
mod nim;
mod turn;

pub use action::*;
pub use board::*;
pub use nim::*;
pub use turn::*;
