use rand::{seq::SliceRandom, Rng};
use std::cmp::Ordering;
use std::fmt;

use crate::error::PuzzleError;

/// Direction a tile slides into the blank.
///
/// `Up` means the tile below the blank moves up, so the blank itself
/// moves one row down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Canonical successor order. Breadth-first and depth-first expansion
    /// visit children in exactly this order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Offset applied to the blank's `(row, col)`.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Down => (-1, 0),
            Move::Left => (0, 1),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn label(&self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }

    /// Tie-break rank among frontier entries with equal `f` and `g`.
    /// Lower ranks are expanded first.
    pub fn priority(&self) -> u8 {
        match self {
            Move::Right => 1,
            Move::Left => 2,
            Move::Down => 3,
            Move::Up => 4,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One configuration of an N×N board, row-major, blank is `0`.
///
/// Equality and hashing look at the cells only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Builds a board, checking that `cells` is a permutation of `0..size²`.
    pub fn new(size: usize, cells: Vec<u32>) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::InvalidSize(size));
        }
        let expected = size
            .checked_mul(size)
            .ok_or(PuzzleError::InvalidSize(size))?;
        if cells.len() != expected {
            return Err(PuzzleError::CellCount {
                expected,
                found: cells.len(),
            });
        }

        let mut seen = vec![false; expected];
        for &value in &cells {
            let idx = value as usize;
            if idx >= expected || seen[idx] {
                return Err(PuzzleError::NotAPermutation(expected));
            }
            seen[idx] = true;
        }

        Ok(Self { size, cells })
    }

    /// Parses the dash-separated form, e.g. `1-2-3-4-5-6-7-8-0`.
    pub fn parse(size: usize, text: &str) -> Result<Self, PuzzleError> {
        let cells = text
            .trim()
            .split('-')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<u32>()
                    .map_err(|_| PuzzleError::InvalidLabel(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(size, cells)
    }

    /// Ascending tiles with the blank in the bottom-right corner.
    pub fn goal(size: usize) -> Self {
        let count = (size * size) as u32;
        let mut cells: Vec<u32> = (1..count).collect();
        cells.push(0);
        Self { size, cells }
    }

    /// Uniformly random solvable board.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(size);
        loop {
            board.cells.shuffle(rng);
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Random walk of `moves` steps away from the goal. Never undoes the
    /// previous step, so the result is usually close to `moves` deep.
    pub fn scrambled<R: Rng + ?Sized>(size: usize, moves: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(size);
        let mut last: Option<Move> = None;
        for _ in 0..moves {
            let options: Vec<(Board, Move)> = board
                .successors()
                .into_iter()
                .filter(|(_, dir)| last.map_or(true, |l| *dir != l.opposite()))
                .collect();
            match options.choose(rng) {
                Some((next, dir)) => {
                    last = Some(*dir);
                    board = next.clone();
                }
                None => break,
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn blank_index(&self) -> usize {
        self.cells
            .iter()
            .position(|&v| v == 0)
            .expect("validated boards always hold exactly one blank")
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::goal(self.size)
    }

    /// Applies one move, or `None` when the move would push the blank
    /// off the board.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let blank = self.blank_index();
        let (row, col) = (blank / self.size, blank % self.size);
        let (dr, dc) = movement.as_offset();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let bound = self.size as isize;
        if new_row < 0 || new_row >= bound || new_col < 0 || new_col >= bound {
            return None;
        }

        let target = new_row as usize * self.size + new_col as usize;
        let mut cells = self.cells.clone();
        cells.swap(blank, target);
        Some(Self {
            size: self.size,
            cells,
        })
    }

    /// Replays a sequence of moves.
    pub fn apply_all(&self, moves: &[Move]) -> Result<Self, PuzzleError> {
        moves.iter().try_fold(self.clone(), |board, &dir| {
            board
                .apply(dir)
                .ok_or(PuzzleError::BlockedMove(dir.label()))
        })
    }

    /// Neighbouring boards in `Move::ALL` order, skipping blocked moves.
    pub fn successors(&self) -> Vec<(Board, Move)> {
        Move::ALL
            .iter()
            .filter_map(|&dir| self.apply(dir).map(|board| (board, dir)))
            .collect()
    }

    /// Sum of Manhattan distances of every tile to its goal cell.
    pub fn manhattan_distance(&self) -> usize {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(idx, &value)| {
                let target = value as usize - 1;
                (idx / size).abs_diff(target / size) + (idx % size).abs_diff(target % size)
            })
            .sum()
    }

    pub fn is_solvable(&self) -> bool {
        let inversions = count_inversions(&self.cells);
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            // Counting the blank's row from the bottom, the goal has it on
            // row 0 with no inversions.
            let blank_row_from_bottom = self.size - 1 - self.blank_index() / self.size;
            (inversions + blank_row_from_bottom) % 2 == 0
        }
    }
}

fn count_inversions(cells: &[u32]) -> usize {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            cells[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.cells.iter().map(u32::to_string).collect();
        write!(f, "{}", labels.join("-"))
    }
}

/// A board as discovered by a search: path cost, heuristic estimate and
/// the move that produced it.
///
/// `g` and `h` are filled in once, by the strategy that discovers the
/// state. Strategies that ignore costs leave them at zero.
#[derive(Debug, Clone)]
pub struct State {
    board: Board,
    g: usize,
    h: usize,
    action: Option<Move>,
}

impl State {
    pub fn root(board: Board) -> Self {
        Self {
            board,
            g: 0,
            h: 0,
            action: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn g(&self) -> usize {
        self.g
    }

    pub fn h(&self) -> usize {
        self.h
    }

    pub fn f(&self) -> usize {
        self.g + self.h
    }

    pub fn action(&self) -> Option<Move> {
        self.action
    }

    pub fn with_costs(mut self, g: usize, h: usize) -> Self {
        self.g = g;
        self.h = h;
        self
    }

    pub fn heuristic_value(&self) -> usize {
        self.board.manhattan_distance()
    }

    /// Child states paired with the move producing them, in `Move::ALL`
    /// order. Children start with zero costs.
    pub fn get_successors(&self) -> Vec<(State, Move)> {
        self.board
            .successors()
            .into_iter()
            .map(|(board, dir)| {
                let child = State {
                    board,
                    g: 0,
                    h: 0,
                    action: Some(dir),
                };
                (child, dir)
            })
            .collect()
    }
}

/// Best-first ordering: `g + h`, then smaller `g`, then the incoming
/// move's priority (root first). `Less` means "expand sooner".
pub fn compare_priority(a: &State, b: &State) -> Ordering {
    let rank = |s: &State| s.action.map_or(0, |m| m.priority());
    a.f()
        .cmp(&b.f())
        .then_with(|| a.g.cmp(&b.g))
        .then_with(|| rank(a).cmp(&rank(b)))
}
