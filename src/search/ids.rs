use log::{debug, info, warn};

use super::{SearchOutcome, Solution};
use crate::problem::Problem;
use crate::puzzle::{Move, State};

/// Depth cap used when the caller doesn't give one.
pub fn default_depth_cap(size: usize) -> usize {
    size * size * 4
}

/// Iterative deepening: depth-limited DFS with limits 0, 1, 2, ...
///
/// No visited set is kept, so boards get revisited; memory stays at one
/// DFS path. Each iteration's expansion count starts from zero and the
/// reported count is the final iteration's. The cumulative count is
/// kept alongside it.
pub struct Ids {
    max_depth: usize,
    expanded: usize,
    total_expanded: usize,
}

impl Ids {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            expanded: 0,
            total_expanded: 0,
        }
    }

    pub fn search(mut self, problem: &Problem) -> SearchOutcome {
        let mut path = Vec::new();

        for depth in 0..=self.max_depth {
            self.expanded = 0;
            let found = self.depth_limited(problem, problem.root(), depth, &mut path);
            self.total_expanded += self.expanded;

            if found {
                info!(
                    "IDS found a {}-move path at depth {} ({} expansions, {} in total)",
                    path.len(),
                    depth,
                    self.expanded,
                    self.total_expanded
                );
                return SearchOutcome::Found(Solution {
                    actions: path,
                    expanded: self.expanded,
                    total_expanded: self.total_expanded,
                    cost: depth,
                });
            }
            debug!("depth {} exhausted after {} expansions", depth, self.expanded);
        }

        warn!(
            "IDS reached its depth cap of {} after {} expansions",
            self.max_depth, self.total_expanded
        );
        SearchOutcome::DepthLimitReached {
            max_depth: self.max_depth,
            expanded: self.total_expanded,
        }
    }

    /// Leaves `path` holding the actions to the goal when it returns true,
    /// and unchanged otherwise.
    fn depth_limited(
        &mut self,
        problem: &Problem,
        state: &State,
        remaining: usize,
        path: &mut Vec<Move>,
    ) -> bool {
        self.expanded += 1;
        if problem.is_goal(state.board()) {
            return true;
        }
        if remaining == 0 {
            return false;
        }

        for (child, action) in state.get_successors() {
            path.push(action);
            if self.depth_limited(problem, &child, remaining - 1, path) {
                return true;
            }
            path.pop();
        }
        false
    }
}
