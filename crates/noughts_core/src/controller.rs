//! The game state machine.
//!
//! All mutation flows through a single entry point,
//! [`GameController::handle`], which consumes discrete external triggers
//! (a click accepted by the renderer, an animation completing, a timer
//! firing) and reports the resulting transition as a [`Step`]. Events that
//! arrive out of contract leave the state untouched and return
//! [`Step::Ignored`]; the controller never panics and exposes no error
//! surface.

use crate::cell::{Cell, CellSet};
use crate::rules;
use crate::types::{Actor, Board, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Phase of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The entry animation is still playing; no moves are accepted.
    AwaitingStart,
    /// The user may place a mark.
    UserTurn,
    /// The computer may place a mark.
    ComputerTurn,
    /// A winner or draw is on display, awaiting reset.
    Terminal,
}

/// External triggers the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The entry animation finished.
    IntroFinished,
    /// The renderer accepted a placement on `cell` for `actor`.
    MovePlaced {
        /// The claimed cell.
        cell: Cell,
        /// Who claimed it.
        actor: Actor,
    },
    /// The placement animation for the actor's mark finished.
    PlacementSettled {
        /// Whose mark settled.
        actor: Actor,
    },
    /// The post-game delay elapsed.
    ResetTimerFired,
    /// An explicit restart was requested.
    ResetRequested,
}

/// What a handled event did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The event was out of contract; the state is untouched.
    Ignored,
    /// The game left awaiting-start; the user moves first.
    Started,
    /// A cell moved from the available set to the actor's owned set.
    Placed {
        /// The claimed cell.
        cell: Cell,
        /// Its new owner.
        actor: Actor,
    },
    /// A settled placement did not end the game; play passes on.
    TurnPassed {
        /// Whose move is permitted next.
        next: Actor,
    },
    /// A settled placement ended the game.
    Finished {
        /// How it ended.
        outcome: Outcome,
        /// The cells to highlight: the winning combination, or the whole
        /// board for a draw.
        highlight: CellSet,
    },
    /// The board was restored to a fresh game, user to move.
    Cleared,
}

/// One cohesive game state with a single update entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameController {
    board: Board,
    phase: Phase,
    outcome: Outcome,
    highlight: CellSet,
    /// Actor whose mark is currently animating. While set, no further
    /// placement is accepted and the turn has not yet passed.
    settling: Option<Actor>,
}

impl GameController {
    /// Creates a controller waiting for the entry animation to finish.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingStart,
            outcome: Outcome::Ongoing,
            highlight: CellSet::EMPTY,
            settling: None,
        }
    }

    /// The board partitions.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The derived outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Cells to highlight once the game has ended; empty before then.
    pub fn highlight(&self) -> CellSet {
        self.highlight
    }

    /// Whose move is currently permitted, if anyone's.
    ///
    /// `None` during the intro, while a placement is settling, and after
    /// the game has ended.
    pub fn turn(&self) -> Option<Actor> {
        if self.settling.is_some() {
            return None;
        }
        match self.phase {
            Phase::UserTurn => Some(Actor::User),
            Phase::ComputerTurn => Some(Actor::Computer),
            Phase::AwaitingStart | Phase::Terminal => None,
        }
    }

    /// Applies one external trigger and reports the transition.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: GameEvent) -> Step {
        match event {
            GameEvent::IntroFinished => self.start(),
            GameEvent::MovePlaced { cell, actor } => self.apply_move(cell, actor),
            GameEvent::PlacementSettled { actor } => self.settle(actor),
            GameEvent::ResetTimerFired => {
                if self.phase == Phase::Terminal {
                    self.reset()
                } else {
                    // A timer that outlived its game must not clobber the
                    // current one.
                    debug!(phase = ?self.phase, "stale reset timer ignored");
                    Step::Ignored
                }
            }
            GameEvent::ResetRequested => {
                if self.phase == Phase::AwaitingStart {
                    Step::Ignored
                } else {
                    self.reset()
                }
            }
        }
    }

    fn start(&mut self) -> Step {
        if self.phase != Phase::AwaitingStart {
            debug!(phase = ?self.phase, "intro completion ignored");
            return Step::Ignored;
        }
        self.phase = Phase::UserTurn;
        Step::Started
    }

    fn apply_move(&mut self, cell: Cell, actor: Actor) -> Step {
        if self.turn() != Some(actor) {
            debug!(%actor, phase = ?self.phase, "placement out of turn ignored");
            return Step::Ignored;
        }
        if !self.board.is_available(cell) {
            debug!(%cell, %actor, "placement on claimed cell ignored");
            return Step::Ignored;
        }
        self.board.claim(cell, actor);
        self.settling = Some(actor);
        Step::Placed { cell, actor }
    }

    fn settle(&mut self, actor: Actor) -> Step {
        if self.settling != Some(actor) {
            debug!(%actor, "settle without matching placement ignored");
            return Step::Ignored;
        }
        self.settling = None;

        let owned = self.board.owned(actor);
        match rules::evaluate_outcome(owned, self.board.available()) {
            Some(highlight) => {
                // A full-board highlight with no completed line is the draw
                // case; it renders the same as a win.
                self.outcome = match rules::winning_line(owned) {
                    Some(_) => Outcome::Won(actor),
                    None => Outcome::Draw,
                };
                self.highlight = highlight;
                self.phase = Phase::Terminal;
                Step::Finished {
                    outcome: self.outcome,
                    highlight,
                }
            }
            None => {
                let next = actor.opponent();
                self.phase = match next {
                    Actor::User => Phase::UserTurn,
                    Actor::Computer => Phase::ComputerTurn,
                };
                Step::TurnPassed { next }
            }
        }
    }

    fn reset(&mut self) -> Step {
        self.board = Board::new();
        self.outcome = Outcome::Ongoing;
        self.highlight = CellSet::EMPTY;
        self.settling = None;
        self.phase = Phase::UserTurn;
        Step::Cleared
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
