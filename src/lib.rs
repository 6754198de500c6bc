//! slider-search: breadth-first, A* and iterative-deepening search on
//! N×N sliding-tile puzzles.
//!
//! ```
//! use slider_search::{problem::Problem, puzzle::Board, search::{self, Algorithm}};
//!
//! let start = Board::parse(3, "1-2-3-4-5-6-7-0-8").unwrap();
//! let problem = Problem::new(start);
//! let outcome = search::solve(&problem, Algorithm::AStar, None).unwrap();
//! let solution = outcome.solution().unwrap();
//! assert_eq!(solution.action_string(), "L");
//! assert_eq!(solution.cost, 1);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod problem;
pub mod puzzle;
pub mod render;
pub mod search;
