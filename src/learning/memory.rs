use crate::Utility;
use crate::game::Action;
use crate::game::Board;
use std::collections::BTreeMap;

/// Action-value table accumulated across self-play episodes.
///
/// Values default to zero for unseen pairs and are never removed; the
/// table only grows as training witnesses new positions.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    values: BTreeMap<Board, BTreeMap<Action, Utility>>,
}

impl Memory {
    /// lookup Q(board, action), zero if never witnessed
    pub fn value(&self, board: &Board, action: &Action) -> Utility {
        self.values
            .get(board)
            .and_then(|actions| actions.get(action))
            .copied()
            .unwrap_or_default()
    }

    /// mutable access, inserting the zero default on first witness
    pub fn value_mut(&mut self, board: &Board, action: &Action) -> &mut Utility {
        self.values
            .entry(*board)
            .or_insert_with(BTreeMap::default)
            .entry(*action)
            .or_insert(0.)
    }

    /// max over the board's options of Q(board, action), or zero at
    /// terminal boards with no options left
    pub fn future(&self, board: &Board) -> Utility {
        board
            .options()
            .iter()
            .map(|action| self.value(board, action))
            .reduce(Utility::max)
            .unwrap_or_default()
    }

    /// number of (board, action) pairs witnessed so far
    pub fn len(&self) -> usize {
        self.values.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
