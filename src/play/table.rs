/// An interactive match: one human seat, one robot seat.
///
/// The board is rendered before every decision and each move is
/// announced; the winner is declared once the board is empty.
pub struct Table {
    game: Nim,
    seat: Turn,
    human: Human,
    robot: Robot,
}

impl Table {
    pub fn new(agent: Agent, seat: Turn, board: Board) -> Self {
        Self {
            game: Nim::from(board),
            seat,
            human: Human,
            robot: Robot::from(agent),
        }
    }

    /// run the match to completion
    pub fn play(&mut self) {
        log::info!("you are seated as {}", self.seat);
        while !self.game.over() {
            self.show();
            let action = match self.game.turn() == self.seat {
                true => self.human.act(&self.game),
                false => self.robot.act(&self.game),
            };
            println!("{} {}", self.game.turn(), action);
            self.game = self.game.apply(action);
        }
        self.conclude();
    }

    fn show(&self) {
        let ref board = self.game.board();
        println!();
        for pile in 0..board.n() {
            let count = board.count(pile);
            println!(
                "{} {} {}",
                format!("{:>2}", pile).cyan(),
                "●".repeat(count as usize),
                format!("({})", count).dimmed(),
            );
        }
        println!();
    }

    fn conclude(&self) {
        let winner = self.game.winner().expect("terminal state");
        match winner == self.seat {
            true => println!("{}", "YOU WIN".green().bold()),
            false => println!("{}", "YOU LOSE".red().bold()),
        }
    }
}

use super::human::Human;
use super::player::Player;
use super::robot::Robot;
use crate::game::Board;
use crate::game::Nim;
use crate::game::Turn;
use crate::learning::Agent;
use colored::Colorize;
