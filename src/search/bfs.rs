use log::{info, warn};

use super::frontier::FifoFrontier;
use super::searcher::Searcher;
use super::{SearchOutcome, Solution};
use crate::error::SearchError;
use crate::problem::Problem;

/// Breadth-first search. Finds a shortest action sequence since every
/// move costs the same.
pub struct Bfs {
    searcher: Searcher<FifoFrontier>,
}

impl Bfs {
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(FifoFrontier::new()),
        }
    }

    pub fn search(mut self, problem: &Problem) -> Result<SearchOutcome, SearchError> {
        self.searcher.start(problem.root().clone());

        while let Some(state) = self.searcher.dequeue() {
            if problem.is_goal(state.board()) {
                let actions = self.searcher.reconstruct_path(state.board())?;
                let expanded = self.searcher.expansions();
                info!(
                    "BFS found a {}-move path after {} expansions",
                    actions.len(),
                    expanded
                );
                return Ok(SearchOutcome::Found(Solution {
                    cost: actions.len(),
                    actions,
                    expanded,
                    total_expanded: expanded,
                }));
            }

            for (child, action) in state.get_successors() {
                if self.searcher.is_visited(child.board())
                    || self.searcher.is_frontier_member(child.board())
                {
                    continue;
                }
                self.searcher.record(child.board(), state.board(), action);
                self.searcher.enqueue(child);
            }

            self.searcher.mark_visited(state.into_board());
        }

        let expanded = self.searcher.expansions();
        warn!("BFS exhausted the search space after {} expansions", expanded);
        Ok(SearchOutcome::Exhausted { expanded })
    }
}

impl Default for Bfs {
    fn default() -> Self {
        Self::new()
    }
}
