use super::agent::Agent;
use super::transition::Transition;
use crate::N;
use crate::game::Action;
use crate::game::Board;
use crate::game::Nim;

/// Self-play training driver.
///
/// One Trainer owns one Agent and plays it against itself from a fixed
/// root board for a fixed number of episodes. Both seats draw from and
/// write into the same Q-table, so a finished game credits two
/// transitions: the move that emptied the board (a loss) and the
/// opposing seat's pending move (a win).
pub struct Trainer {
    agent: Agent,
    root: Board,
    episodes: usize,
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(Agent::default(), Nim::root().board(), crate::TRAINING_EPISODES)
    }
}

impl Trainer {
    pub fn new(agent: Agent, root: Board, episodes: usize) -> Self {
        Self {
            agent,
            root,
            episodes,
        }
    }

    /// surrender the trained agent
    pub fn agent(self) -> Agent {
        self.agent
    }

    /// run the full training budget, logging progress on an interval
    pub fn solve(mut self) -> Self {
        log::info!("beginning training loop ({} episodes)", self.episodes);
        let mut logged = std::time::Instant::now();
        for episode in 1..=self.episodes {
            self.episode();
            if logged.elapsed() > crate::TRAINING_LOG_INTERVAL {
                logged = std::time::Instant::now();
                log::info!(
                    "episode {:>8} / {} ({} pairs witnessed)",
                    episode,
                    self.episodes,
                    self.agent.memory().len()
                );
            }
        }
        log::info!(
            "done training ({} pairs witnessed)",
            self.agent.memory().len()
        );
        self
    }

    /// one complete self-play game, root to terminal.
    ///
    /// Each seat's latest decision stays pending until the opponent
    /// replies: a nonterminal reply settles it with zero reward and the
    /// board it led to, while the terminal move settles immediately at
    /// a loss and settles the opposing seat's pending decision at a win.
    /// That pending decision can be absent when the very first move
    /// empties the board.
    fn episode(&mut self) {
        let mut game = Nim::from(self.root);
        let mut pending: [Option<(Board, Action)>; N] = [None; N];
        while !game.over() {
            let board = game.board();
            let seat = game.turn();
            let action = self.agent.explore(&game);
            pending[usize::from(seat)] = Some((board, action));
            game = game.apply(action);
            let next = game.board();
            if game.over() {
                self.agent
                    .update(&Transition::from((board, action, next, crate::REWARD_LOSS)));
                if let Some((prior, choice)) = pending[usize::from(game.turn())] {
                    self.agent
                        .update(&Transition::from((prior, choice, next, crate::REWARD_WIN)));
                }
            } else if let Some((prior, choice)) = pending[usize::from(game.turn())] {
                self.agent
                    .update(&Transition::from((prior, choice, next, 0.)));
            }
        }
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Trainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Root: {} ({} pairs witnessed)", self.root, self.agent.memory().len())?;
        writeln!(f, "┌──────┬──────┬──────────┐")?;
        writeln!(f, "│ Pile │ Take │        Q │")?;
        writeln!(f, "├──────┼──────┼──────────┤")?;
        for action in self.root.options() {
            writeln!(
                f,
                "│ {:>4} │ {:>4} │ {:>+8.2} │",
                action.pile(),
                action.take(),
                self.agent.memory().value(&self.root, &action),
            )?;
        }
        writeln!(f, "└──────┴──────┴──────────┘")?;
        Ok(())
    }
}
