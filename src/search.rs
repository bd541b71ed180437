//! Adversarial search for the computer side.
//!
//! The evaluator classifies a position for its side to move by walking the
//! move tree to a fixed depth: `Good` when some move leaves the opponent
//! `Bad`, `Bad` when no move does (including when there is no move at
//! all), `Neutral` past the depth bound. There is no scoring and no
//! tie-breaking: [`find_best_move`] takes the first candidate whose reply
//! position is `Bad` for the opponent, and otherwise falls back to the
//! first legal move.
//!
//! Exploration mutates a working copy of the position and restores it
//! through an explicit snapshot stack, so the live game state is never
//! touched. The recursion counter and the stack are owned by one
//! [`Search`] value per top-level invocation.

use crate::board::{Move, Position};
use crate::rules::{has_won, legal_moves};
use tracing::{debug, instrument};

/// Classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    /// Some continuation leaves the opponent lost.
    Good,
    /// Every continuation favours the opponent, or there is none.
    Bad,
    /// The depth bound cut the search off before a verdict.
    Neutral,
}

/// Recursion bound: evaluation frames deeper than this return
/// [`Outlook::Neutral`].
const MAX_DEPTH: u32 = 3;

/// Capacity of the save/restore stack. With the depth bound and at most
/// one move per token, live entries never exceed `MAX_DEPTH + 2`; pushing
/// past capacity drops the snapshot silently rather than failing.
const STACK_CAPACITY: usize = 100;

/// Fixed-capacity LIFO of position snapshots.
#[derive(Debug)]
pub struct SnapshotStack {
    entries: Vec<Position>,
    high_water: usize,
}

impl SnapshotStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(STACK_CAPACITY),
            high_water: 0,
        }
    }

    /// Saves a snapshot. At capacity the snapshot is dropped, not an
    /// error; see [`Search::high_water`] for the observed bound.
    pub fn push(&mut self, snapshot: Position) {
        if self.entries.len() < STACK_CAPACITY {
            self.entries.push(snapshot);
            self.high_water = self.high_water.max(self.entries.len());
        }
    }

    /// Takes back the most recent snapshot.
    pub fn pop(&mut self) -> Option<Position> {
        self.entries.pop()
    }

    /// Deepest the stack has grown over its lifetime.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl Default for SnapshotStack {
    fn default() -> Self {
        Self::new()
    }
}

/// One search invocation: the recursion counter and snapshot stack that
/// the evaluator threads through the move tree.
#[derive(Debug)]
pub struct Search {
    stack: SnapshotStack,
    depth: u32,
}

impl Search {
    /// Creates a fresh search with an empty stack and zero depth.
    pub fn new() -> Self {
        Self {
            stack: SnapshotStack::new(),
            depth: 0,
        }
    }

    /// Deepest the snapshot stack has grown during this search.
    pub fn high_water(&self) -> usize {
        self.stack.high_water()
    }

    /// Classifies `position` for its side to move.
    ///
    /// `position` is the search's working copy; every return path restores
    /// it to its entry state, and the stack is left balanced.
    pub fn evaluate(&mut self, position: &mut Position) -> Outlook {
        // A decided game needs no lookahead.
        if has_won(position.to_move(), position) {
            return Outlook::Good;
        }
        if has_won(position.to_move().opponent(), position) {
            return Outlook::Bad;
        }

        let saved = position.clone();
        self.stack.push(saved.clone());

        let moves = legal_moves(position);

        self.depth += 1;
        if self.depth > MAX_DEPTH {
            self.depth -= 1;
            if let Some(snapshot) = self.stack.pop() {
                *position = snapshot;
            }
            return Outlook::Neutral;
        }

        for &mv in &moves {
            position.apply(mv);
            position.flip_turn();
            let reply = self.evaluate(position);
            if reply == Outlook::Bad {
                // The opponent is lost after this move; look no further.
                if let Some(snapshot) = self.stack.pop() {
                    *position = snapshot;
                }
                self.depth -= 1;
                return Outlook::Good;
            }
            if let Some(snapshot) = self.stack.pop() {
                *position = snapshot;
            }
            self.stack.push(saved.clone());
        }

        // No move left the opponent lost; that includes having no move.
        if let Some(snapshot) = self.stack.pop() {
            *position = snapshot;
        }
        self.depth -= 1;
        Outlook::Bad
    }

    /// Picks a move for the side to move, or `None` when it has none.
    ///
    /// Candidates are tried in generator order; the first whose reply
    /// position evaluates [`Outlook::Bad`] for the opponent is taken on
    /// the spot, and when none forces anything the first legal move
    /// stands in.
    pub fn best_move(&mut self, position: &Position) -> Option<Move> {
        let moves = legal_moves(position);
        if moves.is_empty() {
            debug!("no legal moves to search");
            return None;
        }

        // Exploration happens on a scratch copy; the live position stays
        // untouched.
        let mut scratch = position.clone();
        let saved = scratch.clone();
        self.stack.push(saved.clone());

        for &mv in &moves {
            scratch.apply(mv);
            scratch.flip_turn();
            if self.evaluate(&mut scratch) == Outlook::Bad {
                debug!(chosen = %mv, "candidate leaves the opponent lost");
                self.stack.pop();
                return Some(mv);
            }
            if let Some(snapshot) = self.stack.pop() {
                scratch = snapshot;
            }
            self.stack.push(saved.clone());
        }

        self.stack.pop();
        debug!(fallback = %moves[0], "no forcing candidate; playing the first legal move");
        Some(moves[0])
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a fresh [`Search`] over `position` and returns its choice.
#[instrument(skip(position), fields(side = ?position.to_move()))]
pub fn find_best_move(position: &Position) -> Option<Move> {
    Search::new().best_move(position)
}
