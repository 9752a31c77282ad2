//! Tabular Q-learning for misere Nim.
//!
//! An agent teaches itself the game through repeated self-play, and a
//! human can then challenge the trained agent at the console. The state
//! engine lives in `game` and the learning loop in `learning`; `play`
//! seats the two against each other.

pub mod game;
pub mod learning;
pub mod play;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Objects remaining in a single pile.
pub type Count = u8;
/// Pile index on the board.
pub type Position = usize;
/// Rewards and Q-value estimates.
pub type Utility = f32;
/// Exploration rates and random draws.
pub type Probability = f32;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of seats at the table.
pub const N: usize = 2;
/// Upper bound on piles per board. Counts past a board's length stay zero.
pub const MAX_PILES: usize = 8;
/// Default starting configuration.
pub const INITIAL_PILES: [Count; 4] = [1, 3, 5, 7];

// ============================================================================
// Q-LEARNING PARAMETERS
// ============================================================================
/// Learning rate (alpha): how far each update moves toward its target.
pub const LEARNING_RATE: Utility = 0.5;
/// Exploration rate (epsilon): probability of a uniformly random legal
/// move during self-play training.
pub const EXPLORATION: Probability = 0.1;
/// Terminal reward for the seat that empties the board (misere loss).
pub const REWARD_LOSS: Utility = -1.0;
/// Terminal reward for the opposing seat.
pub const REWARD_WIN: Utility = 1.0;
/// Default self-play training budget.
pub const TRAINING_EPISODES: usize = 10_000;
/// Interval between progress log messages during training.
pub const TRAINING_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
