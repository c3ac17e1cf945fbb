//! Board grid and mark rendering.
//!
//! The grid sweeps in line by line during the intro, marks brighten
//! through a short style ramp as they are placed, and a finished game
//! blinks its highlight while the remaining marks fade out.

use crate::app::{App, CellView, Stage};
use noughts_core::{Actor, Cell};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
/// Total width of the drawn grid, separators included.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Total height of the drawn grid, separators included.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Rects of the 9 cells inside `area`, row-major.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board = grid_rect(area);
    let mut rects = [Rect::default(); 9];
    for row in 0..3u16 {
        for col in 0..3u16 {
            rects[(row * 3 + col) as usize] = Rect {
                x: board.x + col * (CELL_WIDTH + 1),
                y: board.y + row * (CELL_HEIGHT + 1),
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            };
        }
    }
    rects
}

/// Renders the grid and, once the intro has finished, the cells.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let board = grid_rect(area);
    render_grid(f, board, app.intro_progress());

    if app.intro_done() {
        let rects = cell_rects(area);
        for cell in Cell::ALL {
            render_cell(f, rects[cell.index()], app, cell);
        }
    }
}

/// Centers the fixed-size grid in the available area.
fn grid_rect(area: Rect) -> Rect {
    let width = BOARD_WIDTH.min(area.width);
    let height = BOARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Draws the four separator lines, revealed progressively: the horizontal
/// pair sweeps left to right, then the vertical pair top to bottom.
fn render_grid(f: &mut Frame, board: Rect, progress: f32) {
    let chrome = Style::default().fg(Color::DarkGray);

    let sweep = (progress * 2.0).clamp(0.0, 1.0);
    let drawn = (f32::from(board.width) * sweep) as u16;
    if drawn > 0 {
        for dy in [CELL_HEIGHT, 2 * CELL_HEIGHT + 1] {
            let rect = Rect {
                x: board.x,
                y: board.y + dy,
                width: drawn.min(board.width),
                height: 1,
            };
            let sep = Paragraph::new("─".repeat(rect.width as usize)).style(chrome);
            f.render_widget(sep, rect);
        }
    }

    let sweep = (progress * 2.0 - 1.0).clamp(0.0, 1.0);
    let drawn = (f32::from(board.height) * sweep) as u16;
    if drawn > 0 {
        for dx in [CELL_WIDTH, 2 * CELL_WIDTH + 1] {
            let height = drawn.min(board.height);
            let rect = Rect {
                x: board.x + dx,
                y: board.y,
                width: 1,
                height,
            };
            let sep =
                Paragraph::new(Text::from(vec![Line::from("│"); height as usize])).style(chrome);
            f.render_widget(sep, rect);
        }
    }
}

fn render_cell(f: &mut Frame, rect: Rect, app: &App, cell: Cell) {
    let highlighted = app.is_terminal() && app.highlight().contains(cell);

    let (glyph, style) = match app.cell(cell) {
        CellView::Empty => {
            let mut style = Style::default().fg(Color::DarkGray);
            if app.stage() == Stage::UserTurn && cell == app.cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ((cell.index() + 1).to_string(), style)
        }
        CellView::Placing { actor, frame } => {
            (mark_glyph(actor).to_string(), placing_style(actor, frame))
        }
        CellView::Settled { actor } => (
            mark_glyph(actor).to_string(),
            settled_style(app, actor, highlighted),
        ),
    };

    // middle row of the 3-tall cell
    let text = Text::from(vec![Line::from(""), Line::from(glyph)]);
    let widget = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(widget, rect);
}

fn mark_glyph(actor: Actor) -> &'static str {
    match actor {
        Actor::User => "X",
        Actor::Computer => "O",
    }
}

fn mark_color(actor: Actor) -> Color {
    match actor {
        Actor::User => Color::Blue,
        Actor::Computer => Color::Red,
    }
}

/// Brightness ramp while a mark is placed.
fn placing_style(actor: Actor, frame: u8) -> Style {
    let color = mark_color(actor);
    match frame {
        0 | 1 => Style::default().fg(Color::DarkGray),
        2 | 3 => Style::default().fg(color).add_modifier(Modifier::DIM),
        4 => Style::default().fg(color),
        _ => Style::default().fg(color).add_modifier(Modifier::BOLD),
    }
}

/// Settled marks: bold while play continues; blinking when part of the
/// outcome highlight; fading away once the game has ended.
fn settled_style(app: &App, actor: Actor, highlighted: bool) -> Style {
    let color = mark_color(actor);
    if highlighted {
        let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        if (app.terminal_ticks() / 3) % 2 == 0 {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    } else if app.is_terminal() {
        match app.terminal_ticks() {
            0..=6 => Style::default().fg(color),
            7..=14 => Style::default().fg(color).add_modifier(Modifier::DIM),
            _ => Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        }
    } else {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rects_do_not_overlap_separators() {
        let area = Rect::new(0, 0, 60, 20);
        let rects = cell_rects(area);

        for (i, a) in rects.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in rects.iter().skip(i + 1) {
                assert!(a.intersection(*b).is_empty());
            }
        }
    }

    #[test]
    fn test_grid_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let board = grid_rect(area);
        assert_eq!(board.width, BOARD_WIDTH);
        assert_eq!(board.height, BOARD_HEIGHT);
        assert_eq!(board.x, (100 - BOARD_WIDTH) / 2);
        assert_eq!(board.y, (40 - BOARD_HEIGHT) / 2);
    }
}
