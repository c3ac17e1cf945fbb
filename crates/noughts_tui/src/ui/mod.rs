//! Rendering.

pub mod board;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

/// Draws one frame and records cell geometry for mouse hit-testing.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(board::BOARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    app.set_cell_rects(board::cell_rects(chunks[0]));
    board::render(f, chunks[0], app);

    let status = Paragraph::new(app.status()).alignment(Alignment::Center);
    f.render_widget(status, chunks[1]);

    let help = Paragraph::new("click or 1-9 to place | arrows + enter to aim | r restart | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);
}
