//! Misere Nim Q-learning binary.
//!
//! `train` runs self-play and prints the learned root table.
//! `play` trains and then seats a human against the trained agent.

use clap::Parser;
use clap::Subcommand;
use rand::Rng;
use robonim::Probability;
use robonim::Utility;
use robonim::game::Board;
use robonim::game::Nim;
use robonim::game::Turn;
use robonim::learning::Agent;
use robonim::learning::Trainer;
use robonim::play::Table;

#[derive(Parser)]
#[command(about = "tabular Q-learning for misere Nim", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// train an agent through self-play and print its root table
    Train(Options),
    /// train an agent, then play against it
    Play {
        #[command(flatten)]
        options: Options,
        /// seat taken by the human (1 or 2); random when omitted
        #[arg(long)]
        seat: Option<usize>,
    },
}

#[derive(clap::Args)]
struct Options {
    /// number of self-play training episodes
    #[arg(long, default_value_t = robonim::TRAINING_EPISODES)]
    episodes: usize,
    /// comma-separated starting pile counts
    #[arg(long)]
    piles: Option<String>,
    /// RNG seed for reproducible training
    #[arg(long)]
    seed: Option<u64>,
    /// learning rate in [0, 1]
    #[arg(long, default_value_t = robonim::LEARNING_RATE)]
    alpha: Utility,
    /// exploration rate in [0, 1]
    #[arg(long, default_value_t = robonim::EXPLORATION)]
    epsilon: Probability,
}

impl Options {
    fn board(&self) -> anyhow::Result<Board> {
        match self.piles.as_deref() {
            Some(piles) => Board::try_from(piles),
            None => Ok(Nim::root().board()),
        }
    }

    fn agent(&self) -> anyhow::Result<Agent> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(anyhow::anyhow!("alpha must lie in [0, 1], got {}", self.alpha));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(anyhow::anyhow!("epsilon must lie in [0, 1], got {}", self.epsilon));
        }
        let agent = match self.seed {
            Some(seed) => Agent::from_seed(seed),
            None => Agent::default(),
        };
        Ok(agent.alpha(self.alpha).epsilon(self.epsilon))
    }

    fn trainer(&self) -> anyhow::Result<Trainer> {
        Ok(Trainer::new(self.agent()?, self.board()?, self.episodes))
    }
}

fn seat(choice: Option<usize>) -> anyhow::Result<Turn> {
    match choice {
        None => match rand::rng().random::<bool>() {
            true => Ok(Turn::One),
            false => Ok(Turn::Two),
        },
        Some(1) => Ok(Turn::One),
        Some(2) => Ok(Turn::Two),
        Some(n) => Err(anyhow::anyhow!("seat must be 1 or 2, got {}", n)),
    }
}

fn main() -> anyhow::Result<()> {
    robonim::log();
    match Args::parse().command {
        Command::Train(options) => {
            let trainer = options.trainer()?.solve();
            println!("{}", trainer);
        }
        Command::Play { options, seat: s } => {
            let board = options.board()?;
            let human = seat(s)?;
            let agent = options.trainer()?.solve().agent();
            Table::new(agent, human, board).play();
        }
    }
    Ok(())
}
