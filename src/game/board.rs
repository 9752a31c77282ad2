use super::action::Action;
use crate::Count;
use crate::MAX_PILES;
use crate::Position;

/// Ordered pile counts, length fixed at construction.
///
/// Boards are cheap `Copy` values: a move derives a child Board and
/// leaves its parent untouched. Counts past the configured length are
/// invariantly zero, so the derived comparisons see only the live
/// piles and boards stay usable as ordered map keys.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Board {
    piles: [Count; MAX_PILES],
    n: u8,
}

impl From<&[Count]> for Board {
    fn from(counts: &[Count]) -> Self {
        assert!(!counts.is_empty(), "at least one pile");
        assert!(counts.len() <= MAX_PILES, "at most {} piles", MAX_PILES);
        let mut piles = [0; MAX_PILES];
        piles[..counts.len()].copy_from_slice(counts);
        Self {
            piles,
            n: counts.len() as u8,
        }
    }
}

/// comma-separated pile counts, e.g. "1,3,5,7"
impl TryFrom<&str> for Board {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let counts = s
            .split(',')
            .map(str::trim)
            .map(|c| {
                c.parse::<Count>()
                    .map_err(|e| anyhow::anyhow!("invalid pile count {:?}: {}", c, e))
            })
            .collect::<Result<Vec<Count>, _>>()?;
        match counts.len() {
            n if n > MAX_PILES => Err(anyhow::anyhow!("too many piles: {} > {}", n, MAX_PILES)),
            _ => Ok(Self::from(counts.as_slice())),
        }
    }
}

impl Board {
    /// number of piles on the board
    pub fn n(&self) -> usize {
        self.n as usize
    }

    /// objects remaining in the given pile
    pub fn count(&self, pile: Position) -> Count {
        assert!(pile < self.n(), "pile in range");
        self.piles[pile]
    }

    /// objects remaining across all piles
    pub fn total(&self) -> usize {
        self.piles.iter().map(|&c| c as usize).sum()
    }

    /// terminal exactly when every pile is exhausted
    pub fn is_empty(&self) -> bool {
        self.piles.iter().all(|&c| c == 0)
    }

    /// every legal (pile, take) pair; empty exactly at the terminal board
    pub fn options(&self) -> Vec<Action> {
        (0..self.n())
            .flat_map(|pile| (1..=self.count(pile)).map(move |take| Action::from((pile, take))))
            .collect()
    }

    /// derive the board left behind after a move
    pub fn remove(&self, action: Action) -> Self {
        assert!(action.pile() < self.n(), "pile in range");
        assert!(action.take() >= 1, "take at least one object");
        assert!(action.take() <= self.count(action.pile()), "pile is deep enough");
        let mut child = *self;
        child.piles[action.pile()] -= action.take();
        child
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for pile in 0..self.n() {
            match pile {
                0 => write!(f, "{}", self.count(pile))?,
                _ => write!(f, " {}", self.count(pile))?,
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_are_exactly_the_valid_moves() {
        let board = Board::from([1, 3, 5, 7].as_slice());
        let options = board.options();
        assert!(options.len() == board.total());
        for action in options {
            assert!(action.pile() < board.n());
            assert!(action.take() >= 1);
            assert!(action.take() <= board.count(action.pile()));
        }
    }

    #[test]
    fn options_empty_exactly_at_terminal() {
        assert!(Board::from([0, 0].as_slice()).options().is_empty());
        assert!(Board::from([0, 0].as_slice()).is_empty());
        assert!(!Board::from([0, 1].as_slice()).options().is_empty());
        assert!(!Board::from([0, 1].as_slice()).is_empty());
    }

    #[test]
    fn remove_is_deterministic_and_conserves_objects() {
        let board = Board::from([1, 3, 5, 7].as_slice());
        let action = Action::from((2, 4));
        assert!(board.remove(action) == board.remove(action));
        assert!(board.remove(action).total() == board.total() - 4);
        assert!(board.remove(action).count(2) == 1);
        assert!(board.remove(action).count(0) == board.count(0));
        assert!(board.remove(action).count(1) == board.count(1));
        assert!(board.remove(action).count(3) == board.count(3));
    }

    #[test]
    fn removed_objects_never_come_back() {
        let board = Board::from([2, 2].as_slice());
        let child = board.remove(Action::from((0, 2)));
        for action in child.options() {
            assert!(action.take() <= child.count(action.pile()));
            assert!(action.pile() != 0 || child.count(0) == 0);
        }
    }

    #[test]
    #[should_panic]
    fn remove_rejects_overdraw() {
        Board::from([1, 1].as_slice()).remove(Action::from((0, 2)));
    }

    #[test]
    fn parses_comma_separated_counts() {
        let board = Board::try_from("1, 3,5,7").expect("well-formed board");
        assert!(board == Board::from([1, 3, 5, 7].as_slice()));
        assert!(Board::try_from("1,x,3").is_err());
        assert!(Board::try_from("").is_err());
        assert!(Board::try_from("1,2,3,4,5,6,7,8,9").is_err());
    }
}
