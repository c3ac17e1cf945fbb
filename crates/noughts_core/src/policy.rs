//! Opponent move selection.

use crate::cell::{Cell, CellSet};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use tracing::instrument;

/// Chooses the computer's next cell.
///
/// A trait seam so tests can script the opponent instead of rolling dice.
pub trait OpponentPolicy {
    /// Picks one of the available cells, or `None` when none remain.
    ///
    /// The sequencer only asks while the game is non-terminal, so the set
    /// is never empty in practice; an empty set yields `None` rather than
    /// a fallback.
    fn choose(&mut self, available: CellSet) -> Option<Cell>;
}

/// Uniform-random selection among the remaining cells.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a policy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a policy with a fixed seed, for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy for RandomPolicy {
    #[instrument(skip(self))]
    fn choose(&mut self, available: CellSet) -> Option<Cell> {
        available.iter().choose(&mut self.rng)
    }
}
