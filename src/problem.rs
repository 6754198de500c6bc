use crate::puzzle::{Board, State};

/// A root state paired with the goal it has to reach.
#[derive(Debug, Clone)]
pub struct Problem {
    root: State,
    goal: Board,
}

impl Problem {
    /// Problem with the canonical goal for the root's board size.
    pub fn new(root: Board) -> Self {
        let goal = Board::goal(root.size());
        Self {
            root: State::root(root),
            goal,
        }
    }

    pub fn root(&self) -> &State {
        &self.root
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    pub fn size(&self) -> usize {
        self.root.board().size()
    }

    pub fn is_goal(&self, board: &Board) -> bool {
        *board == self.goal
    }

    /// False when the root and goal have different permutation parity,
    /// so no sequence of moves connects them.
    pub fn is_reachable(&self) -> bool {
        self.root.board().is_solvable() == self.goal.is_solvable()
    }
}
