//! Application state and animation playback.
//!
//! The [`App`] is the render model: it mirrors just enough game state to
//! draw the board, gates input before it reaches the sequencer, and plays
//! the tick-driven animations. When an animation completes it reports the
//! fact upward as a [`UiMsg`]; it never advances game state itself.

use crate::input;
use crate::sequencer::{BoardMsg, UiMsg};
use crossterm::event::KeyCode;
use noughts_core::{Actor, Cell, CellSet, Outcome};
use ratatui::layout::Rect;
use tracing::debug;

/// Ticks for the grid entry animation.
pub const INTRO_TICKS: u8 = 12;
/// Ticks for a mark's placement ramp.
pub const PLACE_TICKS: u8 = 6;

/// What the renderer shows in a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Nothing placed.
    Empty,
    /// A mark is ramping in.
    Placing {
        /// Whose mark.
        actor: Actor,
        /// Animation frame, counted up to [`PLACE_TICKS`].
        frame: u8,
    },
    /// A fully drawn mark.
    Settled {
        /// Whose mark.
        actor: Actor,
    },
}

/// Renderer-side mirror of the game phase.
///
/// Used only to gate input and pick the status line; the controller in
/// the sequencer remains authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The grid is still sweeping in.
    Intro,
    /// Waiting for the user to click.
    UserTurn,
    /// The computer is about to reply.
    ComputerTurn,
    /// Outcome on display; the board will clear shortly.
    Terminal,
}

/// Main application state.
pub struct App {
    intro_frame: u8,
    intro_reported: bool,
    cells: [CellView; 9],
    highlight: CellSet,
    stage: Stage,
    terminal_ticks: u8,
    cursor: Cell,
    status: String,
    cell_rects: [Rect; 9],
}

impl App {
    /// Creates the application in its intro state.
    pub fn new() -> Self {
        Self {
            intro_frame: 0,
            intro_reported: false,
            cells: [CellView::Empty; 9],
            highlight: CellSet::EMPTY,
            stage: Stage::Intro,
            terminal_ticks: 0,
            cursor: Cell::Center,
            status: "Drawing the grid...".to_string(),
            cell_rects: [Rect::default(); 9],
        }
    }

    /// Entry animation progress, 0.0 to 1.0.
    pub fn intro_progress(&self) -> f32 {
        f32::from(self.intro_frame) / f32::from(INTRO_TICKS)
    }

    /// Checks whether the entry animation has finished.
    pub fn intro_done(&self) -> bool {
        self.intro_frame >= INTRO_TICKS
    }

    /// The view state of a cell.
    pub fn cell(&self, cell: Cell) -> CellView {
        self.cells[cell.index()]
    }

    /// Cells highlighted by a finished game.
    pub fn highlight(&self) -> CellSet {
        self.highlight
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Checks whether an outcome is on display.
    pub fn is_terminal(&self) -> bool {
        self.stage == Stage::Terminal
    }

    /// Ticks elapsed since the game ended; drives blink and fade.
    pub fn terminal_ticks(&self) -> u8 {
        self.terminal_ticks
    }

    /// The keyboard cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// The status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Advances animations by one tick and reports completions.
    pub fn on_tick(&mut self) -> Vec<UiMsg> {
        let mut notes = Vec::new();

        if self.intro_frame < INTRO_TICKS {
            self.intro_frame += 1;
            if self.intro_frame == INTRO_TICKS && !self.intro_reported {
                self.intro_reported = true;
                notes.push(UiMsg::IntroFinished);
            }
        }

        for view in &mut self.cells {
            if let CellView::Placing { actor, frame } = *view {
                if frame + 1 >= PLACE_TICKS {
                    *view = CellView::Settled { actor };
                    notes.push(UiMsg::PlacementSettled(actor));
                } else {
                    *view = CellView::Placing {
                        actor,
                        frame: frame + 1,
                    };
                }
            }
        }

        if self.stage == Stage::Terminal {
            self.terminal_ticks = self.terminal_ticks.saturating_add(1);
        }

        notes
    }

    /// Applies a sequencer update.
    pub fn apply(&mut self, msg: BoardMsg) {
        debug!(?msg, "applying board update");
        match msg {
            BoardMsg::GameStarted => {
                self.stage = Stage::UserTurn;
                self.status = "Your move.".into();
            }
            BoardMsg::MarkPlaced { cell, actor } => {
                self.cells[cell.index()] = CellView::Placing { actor, frame: 0 };
                if actor == Actor::Computer {
                    self.status = "The computer replies...".into();
                }
            }
            BoardMsg::TurnChanged(actor) => match actor {
                Actor::User => {
                    self.stage = Stage::UserTurn;
                    self.status = "Your move.".into();
                }
                Actor::Computer => {
                    self.stage = Stage::ComputerTurn;
                    self.status = "The computer is thinking...".into();
                }
            },
            BoardMsg::GameOver { outcome, highlight } => {
                self.stage = Stage::Terminal;
                self.terminal_ticks = 0;
                self.highlight = highlight;
                self.status = match outcome {
                    Outcome::Won(Actor::User) => "You win!".into(),
                    Outcome::Won(Actor::Computer) => "The computer wins.".into(),
                    Outcome::Draw => "A draw - every cell filled.".into(),
                    Outcome::Ongoing => "Game over.".into(),
                };
            }
            BoardMsg::BoardCleared => {
                self.cells = [CellView::Empty; 9];
                self.highlight = CellSet::EMPTY;
                self.stage = Stage::UserTurn;
                self.terminal_ticks = 0;
                self.status = "Fresh board - your move.".into();
            }
        }
    }

    /// Whether a click on `cell` should reach the game right now.
    ///
    /// Clicks on owned cells, during the opponent's turn, while a mark is
    /// still animating, during the intro, and after the game has ended
    /// are all swallowed here, before the sequencer sees them.
    pub fn accepts_click(&self, cell: Cell) -> bool {
        self.stage == Stage::UserTurn
            && !self.animating()
            && self.cells[cell.index()] == CellView::Empty
    }

    /// Maps a key press to a target cell, moving the cursor as needed.
    pub fn key_intent(&mut self, code: KeyCode) -> Option<Cell> {
        match code {
            KeyCode::Char(c @ '1'..='9') => Cell::from_index(c as usize - '1' as usize),
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
                None
            }
            _ => None,
        }
    }

    /// Maps a terminal coordinate to the cell drawn there.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Cell> {
        input::hit_test(column, row, &self.cell_rects)
    }

    /// Records where the cells were last drawn, for mouse hit-testing.
    pub fn set_cell_rects(&mut self, rects: [Rect; 9]) {
        self.cell_rects = rects;
    }

    fn animating(&self) -> bool {
        self.cells
            .iter()
            .any(|view| matches!(view, CellView::Placing { .. }))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
