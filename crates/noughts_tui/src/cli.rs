//! Command-line interface for noughts.

use clap::Parser;

/// Tic-tac-toe in the terminal against a random opponent.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the opponent's move selection (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// How long a finished game stays on screen before the board resets.
    #[arg(long, default_value = "2000", value_name = "MILLIS")]
    pub reset_delay_ms: u64,

    /// Animation tick length.
    #[arg(long, default_value = "60", value_name = "MILLIS")]
    pub tick_ms: u64,
}
