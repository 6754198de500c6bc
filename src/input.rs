//! The three-line puzzle file read by the driver and the one-line
//! result it writes back.
//!
//! ```text
//! 3              <- algorithm selector (1 IDS, 2 BFS, 3 A*)
//! 3              <- board size N
//! 1-2-3-4-5-6-7-0-8
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;
use crate::problem::Problem;
use crate::puzzle::Board;
use crate::search::{Algorithm, Solution};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInput {
    pub algorithm: Algorithm,
    pub board: Board,
}

impl PuzzleInput {
    pub fn problem(&self) -> Problem {
        Problem::new(self.board.clone())
    }
}

impl FromStr for PuzzleInput {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());
        let mut next = |what: &str| {
            lines
                .next()
                .ok_or_else(|| PuzzleError::MalformedInput(format!("missing {}", what)))
        };

        let algorithm = next("algorithm selector")?.parse::<Algorithm>()?;
        let size_line = next("board size")?;
        let size = size_line.parse::<usize>().map_err(|_| {
            PuzzleError::MalformedInput(format!("board size '{}' is not a number", size_line))
        })?;
        let board = Board::parse(size, next("initial configuration")?)?;

        Ok(Self { algorithm, board })
    }
}

impl fmt::Display for PuzzleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.algorithm.selector())?;
        writeln!(f, "{}", self.board.size())?;
        writeln!(f, "{}", self.board)
    }
}

/// `<actions> <expanded> <cost>`, e.g. `LU 7 2`.
pub fn format_result(solution: &Solution) -> String {
    format!(
        "{} {} {}",
        solution.action_string(),
        solution.expanded,
        solution.cost
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Move;

    #[test]
    fn parses_three_lines() {
        let input: PuzzleInput = "3\n3\n1-2-3-4-5-6-7-0-8\n".parse().unwrap();
        assert_eq!(input.algorithm, Algorithm::AStar);
        assert_eq!(input.board, Board::parse(3, "1-2-3-4-5-6-7-0-8").unwrap());
        assert_eq!(input.problem().size(), 3);
    }

    #[test]
    fn tolerates_whitespace_and_crlf() {
        let input: PuzzleInput = " 1 \r\n\r\n 2\r\n1-2-0-3\r\n".parse().unwrap();
        assert_eq!(input.algorithm, Algorithm::Ids);
        assert_eq!(input.board.size(), 2);
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            "9\n3\n1-2-3-4-5-6-7-8-0".parse::<PuzzleInput>(),
            Err(PuzzleError::UnknownAlgorithm("9".into()))
        );
        assert_eq!(
            "1\nthree\n1-2-3-4-5-6-7-8-0".parse::<PuzzleInput>(),
            Err(PuzzleError::MalformedInput(
                "board size 'three' is not a number".into()
            ))
        );
        assert_eq!(
            "1\n3\n".parse::<PuzzleInput>(),
            Err(PuzzleError::MalformedInput(
                "missing initial configuration".into()
            ))
        );
        assert_eq!(
            "1\n4294967296\n0\n".parse::<PuzzleInput>(),
            Err(PuzzleError::InvalidSize(4294967296))
        );
        assert_eq!(
            "1\n2\n1-2-3-4-5-6-7-8-0".parse::<PuzzleInput>(),
            Err(PuzzleError::CellCount {
                expected: 4,
                found: 9
            })
        );
    }

    #[test]
    fn display_matches_file_layout() {
        let input = PuzzleInput {
            algorithm: Algorithm::Bfs,
            board: Board::goal(2),
        };
        assert_eq!(input.to_string(), "2\n2\n1-2-3-0\n");
        assert_eq!(input.to_string().parse::<PuzzleInput>().unwrap(), input);
    }

    #[test]
    fn result_line() {
        let solution = Solution {
            actions: vec![Move::Left, Move::Up],
            expanded: 7,
            total_expanded: 7,
            cost: 2,
        };
        assert_eq!(format_result(&solution), "LU 7 2");
    }
}
