use std::collections::HashMap;

use log::{info, warn};

use super::frontier::PriorityFrontier;
use super::searcher::Searcher;
use super::{SearchOutcome, Solution};
use crate::error::SearchError;
use crate::problem::Problem;
use crate::puzzle::Board;

/// Cost of sliding one tile.
const MOVE_COST: usize = 1;

/// A* with the Manhattan-distance heuristic.
///
/// Expanded boards are never reopened, even if a cheaper route to them
/// shows up later. That only yields optimal paths because Manhattan
/// distance is consistent on the sliding-tile graph; swapping in an
/// inconsistent heuristic breaks this search.
///
/// A successor is queued only when its `g` beats every queued copy of the
/// same board. Stale copies popped after the board was expanded are
/// dropped by [`Searcher::dequeue`] and not counted as expansions.
pub struct AStar {
    searcher: Searcher<PriorityFrontier>,
    best_g: HashMap<Board, usize>,
}

impl AStar {
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(PriorityFrontier::new()),
            best_g: HashMap::new(),
        }
    }

    pub fn search(mut self, problem: &Problem) -> Result<SearchOutcome, SearchError> {
        let root = problem.root().clone();
        let h = root.heuristic_value();
        self.best_g.insert(root.board().clone(), 0);
        self.searcher.start(root.with_costs(0, h));

        while let Some(state) = self.searcher.dequeue() {
            if problem.is_goal(state.board()) {
                let actions = self.searcher.reconstruct_path(state.board())?;
                let expanded = self.searcher.expansions();
                info!(
                    "A* found a path of cost {} after {} expansions",
                    state.g(),
                    expanded
                );
                return Ok(SearchOutcome::Found(Solution {
                    actions,
                    expanded,
                    total_expanded: expanded,
                    cost: state.g(),
                }));
            }

            let g = state.g() + MOVE_COST;
            for (child, action) in state.get_successors() {
                if self.searcher.is_visited(child.board()) {
                    continue;
                }
                // A queued copy that is at least as cheap already covers this board.
                if self
                    .best_g
                    .get(child.board())
                    .is_some_and(|&known| known <= g)
                {
                    continue;
                }

                let h = child.heuristic_value();
                self.best_g.insert(child.board().clone(), g);
                self.searcher.record(child.board(), state.board(), action);
                self.searcher.enqueue(child.with_costs(g, h));
            }

            self.searcher.mark_visited(state.into_board());
        }

        let expanded = self.searcher.expansions();
        warn!("A* exhausted the search space after {} expansions", expanded);
        Ok(SearchOutcome::Exhausted { expanded })
    }
}

impl Default for AStar {
    fn default() -> Self {
        Self::new()
    }
}
