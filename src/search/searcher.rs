use std::collections::{HashMap, HashSet};

use log::trace;

use super::frontier::Frontier;
use crate::error::SearchError;
use crate::puzzle::{Board, Move, State};

/// Bookkeeping shared by the graph-search strategies. One instance
/// belongs to exactly one search run.
///
/// Every board pushed through [`Searcher::record`] gets an entry in the
/// parent map; the root maps to `None` and ends path reconstruction.
pub struct Searcher<F: Frontier> {
    frontier: F,
    visited: HashSet<Board>,
    parents: HashMap<Board, Option<(Board, Move)>>,
    expansions: usize,
}

impl<F: Frontier> Searcher<F> {
    pub fn new(frontier: F) -> Self {
        Self {
            frontier,
            visited: HashSet::new(),
            parents: HashMap::new(),
            expansions: 0,
        }
    }

    /// Records `root` as the path terminus and enqueues it.
    pub fn start(&mut self, root: State) {
        self.parents.insert(root.board().clone(), None);
        self.frontier.push(root);
    }

    pub fn enqueue(&mut self, state: State) {
        self.frontier.push(state);
    }

    /// Pops the next unexpanded state and counts it as an expansion.
    /// Entries whose board was expanded earlier are discarded.
    pub fn dequeue(&mut self) -> Option<State> {
        while let Some(state) = self.frontier.pop() {
            if self.visited.contains(state.board()) {
                continue;
            }
            self.expansions += 1;
            trace!(
                "expanding {} (g={}, h={})",
                state.board(),
                state.g(),
                state.h()
            );
            return Some(state);
        }
        None
    }

    pub fn record(&mut self, child: &Board, parent: &Board, action: Move) {
        self.parents
            .insert(child.clone(), Some((parent.clone(), action)));
    }

    pub fn mark_visited(&mut self, board: Board) {
        self.visited.insert(board);
    }

    pub fn is_visited(&self, board: &Board) -> bool {
        self.visited.contains(board)
    }

    pub fn is_frontier_member(&self, board: &Board) -> bool {
        self.frontier.contains(board)
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Walks the parent map from `goal` back to the root and returns the
    /// actions in root-to-goal order.
    pub fn reconstruct_path(&self, goal: &Board) -> Result<Vec<Move>, SearchError> {
        let mut actions = Vec::new();
        let mut current = goal;
        loop {
            match self.parents.get(current) {
                Some(Some((parent, action))) => {
                    actions.push(*action);
                    current = parent;
                }
                Some(None) => break,
                None => return Err(SearchError::Unrecorded(current.to_string())),
            }
        }
        actions.reverse();
        Ok(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::frontier::FifoFrontier;

    #[test]
    fn dequeue_counts_expansions() {
        let mut searcher = Searcher::new(FifoFrontier::new());
        searcher.start(State::root(Board::goal(3)));
        assert!(searcher.is_frontier_member(&Board::goal(3)));
        assert!(searcher.dequeue().is_some());
        assert!(searcher.dequeue().is_none());
        assert_eq!(searcher.expansions(), 1);
    }

    #[test]
    fn dequeue_skips_expanded_boards() {
        let mut searcher = Searcher::new(FifoFrontier::new());
        let root = State::root(Board::goal(3));
        searcher.start(root.clone());
        searcher.enqueue(root.clone());
        let first = searcher.dequeue().unwrap();
        searcher.mark_visited(first.into_board());
        assert!(searcher.dequeue().is_none());
        assert_eq!(searcher.expansions(), 1);
    }

    #[test]
    fn reconstructs_recorded_path() {
        let mut searcher = Searcher::new(FifoFrontier::new());
        let root = Board::goal(3);
        let a = root.apply(Move::Down).unwrap();
        let b = a.apply(Move::Right).unwrap();
        searcher.start(State::root(root.clone()));
        searcher.record(&a, &root, Move::Down);
        searcher.record(&b, &a, Move::Right);

        assert_eq!(
            searcher.reconstruct_path(&b).unwrap(),
            vec![Move::Down, Move::Right]
        );
        assert!(searcher.reconstruct_path(&root).unwrap().is_empty());
    }

    #[test]
    fn unrecorded_board_is_an_error() {
        let searcher = Searcher::new(FifoFrontier::new());
        let err = searcher.reconstruct_path(&Board::goal(2)).unwrap_err();
        assert_eq!(err, SearchError::Unrecorded("1-2-3-0".into()));
    }
}
