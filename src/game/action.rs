use crate::Count;
use crate::Position;
use colored::Colorize;

/// A move: remove `take` objects from pile `pile`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Action {
    pile: Position,
    take: Count,
}

impl From<(Position, Count)> for Action {
    fn from((pile, take): (Position, Count)) -> Self {
        Self { pile, take }
    }
}

impl Action {
    pub fn pile(&self) -> Position {
        self.pile
    }
    pub fn take(&self) -> Count {
        self.take
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            format!("TAKE {} FROM {}", self.take, self.pile).yellow()
        )
    }
}
