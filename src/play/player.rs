use crate::game::Action;
use crate::game::Nim;

/// Anything that can choose a legal move at the table:
/// a trained robot or a human at the console.
pub trait Player {
    fn act(&mut self, game: &Nim) -> Action;
}
