/// Console seat.
///
/// Prompts for a pile index and a removal count. Invalid input is
/// rejected with a re-prompt rather than failing the session.
pub struct Human;

impl Player for Human {
    fn act(&mut self, game: &Nim) -> Action {
        let ref board = game.board();
        let pile = self.pile(board);
        let take = self.take(board, pile);
        Action::from((pile, take))
    }
}

impl Human {
    fn pile(&self, board: &Board) -> Position {
        let n = board.n();
        Input::new()
            .with_prompt("Pile")
            .report(false)
            .validate_with(|i: &String| -> Result<(), String> {
                match i.trim().parse::<Position>() {
                    Err(_) => Err("Enter a NUMBER".to_string()),
                    Ok(pile) if pile >= n => Err(format!("Pick a pile in 0..{}", n)),
                    Ok(pile) if board.count(pile) == 0 => Err(format!("Pile {} is empty", pile)),
                    Ok(_) => Ok(()),
                }
            })
            .interact()
            .unwrap()
            .trim()
            .parse::<Position>()
            .unwrap()
    }

    fn take(&self, board: &Board, pile: Position) -> Count {
        let most = board.count(pile);
        Input::new()
            .with_prompt("Count")
            .report(false)
            .validate_with(|i: &String| -> Result<(), String> {
                match i.trim().parse::<Count>() {
                    Err(_) => Err("Enter a NUMBER".to_string()),
                    Ok(0) => Err("Take at least one object".to_string()),
                    Ok(take) if take > most => Err(format!("Only {} left in pile {}", most, pile)),
                    Ok(_) => Ok(()),
                }
            })
            .interact()
            .unwrap()
            .trim()
            .parse::<Count>()
            .unwrap()
    }
}

use super::player::Player;
use crate::Count;
use crate::Position;
use crate::game::Action;
use crate::game::Board;
use crate::game::Nim;
use dialoguer::Input;
