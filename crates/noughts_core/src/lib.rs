//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Cells**: 9 board positions and bitmask cell sets ([`Cell`],
//!   [`CellSet`])
//! - **Board**: three disjoint partitions - available, user-owned,
//!   computer-owned ([`Board`])
//! - **Rules**: pure win/draw evaluation against the 8 fixed lines
//!   ([`rules`])
//! - **Controller**: the phase state machine with a single `handle` entry
//!   point ([`GameController`])
//! - **Policy**: uniform-random opponent move selection ([`RandomPolicy`])
//!
//! The crate contains no I/O and no timing; presentation concerns live in
//! the renderer crate, which drives this one through [`GameEvent`]s.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod controller;
mod policy;
pub mod rules;
mod types;

pub use cell::{Cell, CellSet};
pub use controller::{GameController, GameEvent, Phase, Step};
pub use policy::{OpponentPolicy, RandomPolicy};
pub use types::{Actor, Board, Outcome};
