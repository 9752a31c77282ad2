use super::action::Action;
use super::board::Board;
use super::turn::Turn;
use crate::Utility;

/// Full game state between moves: the board plus the seat to act.
///
/// Misere convention: the seat that removes the last object loses, so
/// at a terminal state the seat left to act is the winner.
#[derive(Debug, Clone, Copy)]
pub struct Nim {
    board: Board,
    turn: Turn,
}

impl From<Board> for Nim {
    fn from(board: Board) -> Self {
        Self {
            board,
            turn: Turn::One,
        }
    }
}

impl Nim {
    /// the default starting position
    pub fn root() -> Self {
        Self::from(Board::from(crate::INITIAL_PILES.as_slice()))
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn over(&self) -> bool {
        self.board.is_empty()
    }

    pub fn options(&self) -> Vec<Action> {
        self.board.options()
    }

    /// child state: the board after the move, the opposing seat to act
    pub fn apply(&self, action: Action) -> Self {
        Self {
            board: self.board.remove(action),
            turn: self.turn.other(),
        }
    }

    /// at terminal states, the seat that did NOT empty the board
    pub fn winner(&self) -> Option<Turn> {
        match self.over() {
            true => Some(self.turn),
            false => None,
        }
    }

    /// terminal payoff for a seat
    pub fn payoff(&self, seat: Turn) -> Utility {
        let winner = self.winner().expect("payoff at terminal state");
        match seat == winner {
            true => crate::REWARD_WIN,
            false => crate::REWARD_LOSS,
        }
    }
}

impl std::fmt::Display for Nim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.board, self.turn)
    }
}
