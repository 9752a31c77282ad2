use crate::Utility;
use crate::game::Action;
use crate::game::Board;

/// One observed step of play: acting from `board` with `action` left the
/// mover facing `next` on their following turn. Reward is nonzero only
/// at terminal transitions.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    board: Board,
    action: Action,
    next: Board,
    reward: Utility,
}

impl From<(Board, Action, Board, Utility)> for Transition {
    fn from((board, action, next, reward): (Board, Action, Board, Utility)) -> Self {
        Self {
            board,
            action,
            next,
            reward,
        }
    }
}

impl Transition {
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn action(&self) -> &Action {
        &self.action
    }
    pub fn next(&self) -> &Board {
        &self.next
    }
    pub fn reward(&self) -> Utility {
        self.reward
    }
    /// terminal transitions are exactly those that empty the board
    pub fn terminal(&self) -> bool {
        self.next.is_empty()
    }
}
