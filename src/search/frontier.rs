use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use crate::puzzle::{compare_priority, Board, State};

/// Discovered-but-unexpanded states, in the order a strategy wants them.
pub trait Frontier {
    fn push(&mut self, state: State);
    fn pop(&mut self) -> Option<State>;
    /// Membership by board value.
    fn contains(&self, board: &Board) -> bool;
    fn len(&self) -> usize;
}

/// Tracks how many queued entries share a board, so membership checks
/// don't have to scan the queue.
#[derive(Debug, Default)]
struct Members(HashMap<Board, usize>);

impl Members {
    fn add(&mut self, board: &Board) {
        *self.0.entry(board.clone()).or_default() += 1;
    }

    fn remove(&mut self, board: &Board) {
        if let Some(count) = self.0.get_mut(board) {
            *count -= 1;
            if *count == 0 {
                self.0.remove(board);
            }
        }
    }

    fn contains(&self, board: &Board) -> bool {
        self.0.contains_key(board)
    }
}

/// First-in first-out queue used by breadth-first search.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<State>,
    members: Members,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, state: State) {
        self.members.add(state.board());
        self.queue.push_back(state);
    }

    fn pop(&mut self) -> Option<State> {
        let state = self.queue.pop_front()?;
        self.members.remove(state.board());
        Some(state)
    }

    fn contains(&self, board: &Board) -> bool {
        self.members.contains(board)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

struct Queued {
    state: State,
    seq: u64,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    // BinaryHeap is a max-heap: reverse so the best entry surfaces first.
    fn cmp(&self, other: &Self) -> Ordering {
        compare_priority(&other.state, &self.state).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue ordered by [`compare_priority`], falling back to
/// insertion order when two entries tie on every key.
#[derive(Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Queued>,
    members: Members,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, state: State) {
        self.members.add(state.board());
        self.heap.push(Queued {
            state,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<State> {
        let Queued { state, .. } = self.heap.pop()?;
        self.members.remove(state.board());
        Some(state)
    }

    fn contains(&self, board: &Board) -> bool {
        self.members.contains(board)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
