/// Trained seat. Plays the greedy policy, exploration disabled.
pub struct Robot(Agent);

impl From<Agent> for Robot {
    fn from(agent: Agent) -> Self {
        Self(agent)
    }
}

impl Player for Robot {
    fn act(&mut self, game: &Nim) -> Action {
        self.0.exploit(game)
    }
}

use super::player::Player;
use crate::game::Action;
use crate::game::Nim;
use crate::learning::Agent;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;
    use crate::learning::Transition;

    #[test]
    fn plays_the_greedy_move() {
        let mut agent = Agent::from_seed(0);
        let ref game = Nim::from(Board::from([3].as_slice()));
        let empty = Board::from([0].as_slice());
        agent.update(&Transition::from((game.board(), Action::from((0, 2)), empty, 1.)));
        let mut robot = Robot::from(agent);
        assert!(robot.act(game) == Action::from((0, 2)));
    }
}
