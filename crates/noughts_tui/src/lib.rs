//! Terminal renderer for noughts.
//!
//! The renderer owns presentation only: the grid entry animation, mark
//! placement ramps, outcome highlighting, and input gating. Game logic
//! lives in `noughts_core`; the two sides talk over channels - the
//! renderer reports [`UiMsg`] events (clicks, animation completions) and
//! consumes [`BoardMsg`] updates from the [`Sequencer`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod sequencer;
pub mod ui;

pub use app::{App, CellView, Stage};
pub use cli::Cli;
pub use sequencer::{BoardMsg, Sequencer, UiMsg};
