//! Search strategies over puzzle boards.
//!
//! Breadth-first search and A* share the [`Searcher`] bookkeeping and
//! differ only in their [`Frontier`]. Iterative deepening keeps nothing
//! but the current depth-first path.

pub mod astar;
pub mod bfs;
pub mod frontier;
pub mod ids;
pub mod searcher;

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::error::{PuzzleError, SearchError};
use crate::problem::Problem;
use crate::puzzle::Move;

pub use astar::AStar;
pub use bfs::Bfs;
pub use frontier::{FifoFrontier, Frontier, PriorityFrontier};
pub use ids::Ids;
pub use searcher::Searcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Ids,
    Bfs,
    AStar,
}

impl Algorithm {
    /// Numeric selector used in puzzle input files.
    pub fn selector(&self) -> u8 {
        match self {
            Algorithm::Ids => 1,
            Algorithm::Bfs => 2,
            Algorithm::AStar => 3,
        }
    }
}

impl FromStr for Algorithm {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "ids" => Ok(Algorithm::Ids),
            "2" | "bfs" => Ok(Algorithm::Bfs),
            "3" | "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(PuzzleError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Algorithm::Ids => "IDS",
            Algorithm::Bfs => "BFS",
            Algorithm::AStar => "A*",
        };
        write!(f, "{}", s)
    }
}

/// A path from the root to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub actions: Vec<Move>,
    /// Expansions reported to the caller. For IDS this is the final
    /// iteration only.
    pub expanded: usize,
    /// Expansions across the whole run, equal to `expanded` except for IDS.
    pub total_expanded: usize,
    /// Path length for BFS and IDS, summed move cost for A*.
    pub cost: usize,
}

impl Solution {
    pub fn action_string(&self) -> String {
        self.actions.iter().map(Move::label).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Solution),
    /// Every reachable board was expanded without meeting the goal.
    Exhausted { expanded: usize },
    /// Iterative deepening gave up at its depth cap.
    DepthLimitReached { max_depth: usize, expanded: usize },
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            _ => None,
        }
    }
}

/// Runs the selected strategy. `max_depth` bounds iterative deepening and
/// is ignored by the other strategies.
pub fn solve(
    problem: &Problem,
    algorithm: Algorithm,
    max_depth: Option<usize>,
) -> Result<SearchOutcome, SearchError> {
    debug!(
        "solving {} with {} (size {})",
        problem.root().board(),
        algorithm,
        problem.size()
    );
    match algorithm {
        Algorithm::Bfs => Bfs::new().search(problem),
        Algorithm::AStar => AStar::new().search(problem),
        Algorithm::Ids => match max_depth {
            Some(cap) => Ok(Ids::new(cap).search(problem)),
            None => {
                let cap = ids::default_depth_cap(problem.size());
                // Without a caller bound the default cap is far too deep to
                // exhaust, so parity-unreachable goals stop here.
                if !problem.is_reachable() {
                    warn!(
                        "{} cannot reach the goal; skipping IDS up to depth {}",
                        problem.root().board(),
                        cap
                    );
                    return Ok(SearchOutcome::DepthLimitReached {
                        max_depth: cap,
                        expanded: 0,
                    });
                }
                Ok(Ids::new(cap).search(problem))
            }
        },
    }
}
