//! Core domain types: actors, the partitioned board, and game outcomes.

use crate::cell::{Cell, CellSet};
use serde::{Deserialize, Serialize};

/// A party that can own cells.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Actor {
    /// The human player (moves first).
    #[display("user")]
    User,
    /// The computer opponent.
    #[display("computer")]
    Computer,
}

impl Actor {
    /// Returns the other party.
    pub fn opponent(self) -> Self {
        match self {
            Actor::User => Actor::Computer,
            Actor::Computer => Actor::User,
        }
    }
}

/// The 3x3 board as three disjoint cell partitions.
///
/// At all times the available, user-owned, and computer-owned sets are
/// pairwise disjoint and their union is exactly the full board. A cell,
/// once claimed, stays with its owner until the board is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    available: CellSet,
    user: CellSet,
    computer: CellSet,
}

impl Board {
    /// Creates a fresh board with every cell available.
    pub fn new() -> Self {
        Self {
            available: CellSet::ALL,
            user: CellSet::EMPTY,
            computer: CellSet::EMPTY,
        }
    }

    /// The cells nobody has claimed yet.
    pub fn available(&self) -> CellSet {
        self.available
    }

    /// The cells owned by the given actor.
    pub fn owned(&self, actor: Actor) -> CellSet {
        match actor {
            Actor::User => self.user,
            Actor::Computer => self.computer,
        }
    }

    /// Checks whether a cell is still available.
    pub fn is_available(&self, cell: Cell) -> bool {
        self.available.contains(cell)
    }

    /// Checks whether any cells remain to claim.
    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }

    /// Moves a cell from the available set to the actor's owned set.
    ///
    /// The caller must have checked availability; claiming an unavailable
    /// cell is a logic error and is rejected in debug builds.
    pub(crate) fn claim(&mut self, cell: Cell, actor: Actor) {
        debug_assert!(self.available.contains(cell));
        self.available.remove(cell);
        match actor {
            Actor::User => self.user.insert(cell),
            Actor::Computer => self.computer.insert(cell),
        }
        debug_assert!(self.partitions_consistent());
    }

    /// Checks the partition invariant: pairwise disjoint, union the full board.
    pub fn partitions_consistent(&self) -> bool {
        self.available.is_disjoint(self.user)
            && self.available.is_disjoint(self.computer)
            && self.user.is_disjoint(self.computer)
            && self.available.union(self.user).union(self.computer) == CellSet::ALL
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a game, derived from cell ownership versus the winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still being played.
    Ongoing,
    /// The actor completed a winning line.
    Won(Actor),
    /// Every cell is claimed and no line was completed.
    Draw,
}

impl Outcome {
    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Actor> {
        match self {
            Outcome::Won(actor) => Some(*actor),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Checks if the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Checks if the game ended level.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "in progress"),
            Outcome::Won(actor) => write!(f, "{} wins", actor),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_board_partitions() {
        let board = Board::new();
        assert_eq!(board.available(), CellSet::ALL);
        assert!(board.owned(Actor::User).is_empty());
        assert!(board.owned(Actor::Computer).is_empty());
        assert!(board.partitions_consistent());
    }

    #[test]
    fn test_claim_moves_cell_between_partitions() {
        let mut board = Board::new();
        board.claim(Cell::Center, Actor::User);

        assert!(!board.is_available(Cell::Center));
        assert!(board.owned(Actor::User).contains(Cell::Center));
        assert!(!board.owned(Actor::Computer).contains(Cell::Center));
        assert!(board.partitions_consistent());
    }

    #[test]
    fn test_exhaustion() {
        let mut board = Board::new();
        for (i, cell) in Cell::ALL.into_iter().enumerate() {
            let actor = if i % 2 == 0 { Actor::User } else { Actor::Computer };
            board.claim(cell, actor);
        }
        assert!(board.is_exhausted());
        assert!(board.partitions_consistent());
    }

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Actor::User.opponent(), Actor::Computer);
        assert_eq!(Actor::Computer.opponent().opponent(), Actor::Computer);
    }
}
