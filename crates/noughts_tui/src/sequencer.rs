//! Game sequencing between the renderer and the logic core.
//!
//! The sequencer owns the [`GameController`] and the opponent policy. It
//! turns renderer events into controller events, publishes the resulting
//! transitions, and runs the post-game auto-reset timer. Turn progression
//! never depends on animation timing directly: the renderer reports when a
//! presentation step has finished, and only then does play advance.

use anyhow::Result;
use noughts_core::{
    Actor, Cell, CellSet, GameController, GameEvent, OpponentPolicy, Outcome, Step,
};
use std::future;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Events the renderer reports to the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    /// The grid entry animation finished.
    IntroFinished,
    /// The user clicked an empty cell on their turn.
    CellClicked(Cell),
    /// A mark's placement animation finished.
    PlacementSettled(Actor),
    /// The user asked for a fresh board.
    RestartRequested,
}

/// Updates the sequencer publishes to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMsg {
    /// The game left awaiting-start; the user moves first.
    GameStarted,
    /// A mark was placed and should animate in.
    MarkPlaced {
        /// The claimed cell.
        cell: Cell,
        /// Whose mark to draw.
        actor: Actor,
    },
    /// Play passed to the given actor.
    TurnChanged(Actor),
    /// The game ended.
    GameOver {
        /// How it ended.
        outcome: Outcome,
        /// Cells to highlight: the winning combination, or the whole
        /// board for a draw.
        highlight: CellSet,
    },
    /// The board was reset to a fresh game.
    BoardCleared,
}

/// Drives one game loop: renderer events in, board updates out.
pub struct Sequencer<P> {
    game: GameController,
    policy: P,
    reset_delay: Duration,
    rx: mpsc::UnboundedReceiver<UiMsg>,
    tx: mpsc::UnboundedSender<BoardMsg>,
}

impl<P: OpponentPolicy> Sequencer<P> {
    /// Creates a sequencer with a fresh game.
    pub fn new(
        policy: P,
        reset_delay: Duration,
        rx: mpsc::UnboundedReceiver<UiMsg>,
        tx: mpsc::UnboundedSender<BoardMsg>,
    ) -> Self {
        Self {
            game: GameController::new(),
            policy,
            reset_delay,
            rx,
            tx,
        }
    }

    /// Runs until the renderer hangs up.
    ///
    /// The auto-reset deadline lives on this task: it is armed when a game
    /// ends, disarmed by an explicit restart, and dies with the task, so a
    /// stale timer can never fire against a newer game.
    pub async fn run(mut self) -> Result<()> {
        info!("sequencer started");
        let mut reset_at: Option<Instant> = None;

        loop {
            tokio::select! {
                msg = self.rx.recv() => {
                    let Some(msg) = msg else {
                        debug!("renderer hung up; sequencer stopping");
                        return Ok(());
                    };
                    self.on_ui(msg, &mut reset_at)?;
                }
                _ = sleep_until_armed(reset_at), if reset_at.is_some() => {
                    reset_at = None;
                    if let Step::Cleared = self.game.handle(GameEvent::ResetTimerFired) {
                        debug!("auto-reset fired");
                        self.tx.send(BoardMsg::BoardCleared)?;
                    }
                }
            }
        }
    }

    fn on_ui(&mut self, msg: UiMsg, reset_at: &mut Option<Instant>) -> Result<()> {
        match msg {
            UiMsg::IntroFinished => {
                if let Step::Started = self.game.handle(GameEvent::IntroFinished) {
                    info!("intro finished; game on");
                    self.tx.send(BoardMsg::GameStarted)?;
                }
            }
            UiMsg::CellClicked(cell) => {
                let step = self.game.handle(GameEvent::MovePlaced {
                    cell,
                    actor: Actor::User,
                });
                match step {
                    Step::Placed { cell, actor } => {
                        self.tx.send(BoardMsg::MarkPlaced { cell, actor })?;
                    }
                    step => debug!(?step, %cell, "click rejected"),
                }
            }
            UiMsg::PlacementSettled(actor) => {
                match self.game.handle(GameEvent::PlacementSettled { actor }) {
                    Step::Finished { outcome, highlight } => {
                        info!(%outcome, "game over");
                        self.tx.send(BoardMsg::GameOver { outcome, highlight })?;
                        *reset_at = Some(Instant::now() + self.reset_delay);
                    }
                    Step::TurnPassed {
                        next: Actor::Computer,
                    } => {
                        self.tx.send(BoardMsg::TurnChanged(Actor::Computer))?;
                        self.reply()?;
                    }
                    Step::TurnPassed { next: Actor::User } => {
                        self.tx.send(BoardMsg::TurnChanged(Actor::User))?;
                    }
                    step => debug!(?step, %actor, "settle ignored"),
                }
            }
            UiMsg::RestartRequested => {
                if let Step::Cleared = self.game.handle(GameEvent::ResetRequested) {
                    // An armed auto-reset must not fire against the new game.
                    *reset_at = None;
                    self.tx.send(BoardMsg::BoardCleared)?;
                }
            }
        }
        Ok(())
    }

    /// Chooses and applies the computer's move.
    fn reply(&mut self) -> Result<()> {
        let available = self.game.board().available();
        let Some(cell) = self.policy.choose(available) else {
            // Unreachable with a conforming policy: the game only passes
            // the turn while cells remain.
            warn!("opponent had no cell to choose");
            return Ok(());
        };
        if let Step::Placed { cell, actor } = self.game.handle(GameEvent::MovePlaced {
            cell,
            actor: Actor::Computer,
        }) {
            self.tx.send(BoardMsg::MarkPlaced { cell, actor })?;
        }
        Ok(())
    }
}

async fn sleep_until_armed(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => future::pending::<()>().await,
    }
}
