//! Terminal tic-tac-toe against a random opponent.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::RandomPolicy;
use noughts_tui::{App, BoardMsg, Cli, Sequencer, UiMsg, ui};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!(seed = ?cli.seed, "Starting noughts");

    let policy = match cli.seed {
        Some(seed) => RandomPolicy::from_seed(seed),
        None => RandomPolicy::new(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channels between the renderer and the game sequencer.
    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let (board_tx, mut board_rx) = mpsc::unbounded_channel();

    let sequencer = Sequencer::new(
        policy,
        Duration::from_millis(cli.reset_delay_ms),
        ui_rx,
        board_tx,
    );
    let sequencer_handle = tokio::spawn(async move {
        if let Err(e) = sequencer.run().await {
            tracing::error!(error = %e, "Sequencer error");
        }
    });

    let app = App::new();
    let res = run_app(
        &mut terminal,
        app,
        ui_tx,
        &mut board_rx,
        Duration::from_millis(cli.tick_ms),
    )
    .await;

    sequencer_handle.abort();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    ui_tx: mpsc::UnboundedSender<UiMsg>,
    board_rx: &mut mpsc::UnboundedReceiver<BoardMsg>,
    tick: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        // Updates from the sequencer.
        while let Ok(msg) = board_rx.try_recv() {
            app.apply(msg);
        }

        // One input event per pass, then let the tick catch up.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => ui_tx.send(UiMsg::RestartRequested)?,
                    code => {
                        if let Some(cell) = app.key_intent(code) {
                            if app.accepts_click(cell) {
                                ui_tx.send(UiMsg::CellClicked(cell))?;
                            }
                        }
                    }
                },
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        if let Some(cell) = app.hit_test(mouse.column, mouse.row) {
                            if app.accepts_click(cell) {
                                ui_tx.send(UiMsg::CellClicked(cell))?;
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        // Animation tick: advances playback and reports completions.
        if last_tick.elapsed() >= tick {
            for msg in app.on_tick() {
                ui_tx.send(msg)?;
            }
            last_tick = Instant::now();
        }
    }
}
