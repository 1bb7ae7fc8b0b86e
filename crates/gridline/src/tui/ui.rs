//! Stateless UI rendering for the line game.

use super::app::App;
use crate::glyphs::glyph_for;
use gridline_core::{Cell, Grid, Line as GridLine};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Width of one rendered cell, in terminal columns.
const CELL_WIDTH: u16 = 4;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Grid
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Gridline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_grid(frame, chunks[1], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("←↑↓→ move · Enter place · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    draw_particles(frame, app);
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let grid = app.game().grid();
    let size = grid.size();
    let winning = app.game().winning_line();

    let lines: Vec<Line> = (0..size)
        .map(|row| {
            let spans: Vec<Span> = (0..size)
                .map(|col| {
                    let index = grid.index_of(row, col);
                    cell_span(grid, index, index == app.cursor(), winning)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let width = u16::try_from(size)
        .unwrap_or(u16::MAX)
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2);
    let height = u16::try_from(size).unwrap_or(u16::MAX).saturating_add(2);
    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, center_rect(area, width, height));
}

fn cell_span(
    grid: &Grid,
    index: usize,
    under_cursor: bool,
    winning: Option<GridLine>,
) -> Span<'static> {
    let (text, mut style) = match grid.cells()[index] {
        Cell::Empty => (" ·  ".to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => {
            let glyph = glyph_for(player);
            (
                format!(" {}  ", glyph.symbol),
                Style::default().fg(glyph.color).add_modifier(Modifier::BOLD),
            )
        }
    };
    if winning.is_some_and(|line| line.contains(grid.size(), index)) {
        style = style.bg(Color::Gray);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

fn draw_particles(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let mut celebration = app.celebration().borrow_mut();
    celebration.set_area(area.width, area.height);

    let buffer = frame.buffer_mut();
    for p in celebration.particles() {
        if p.x < 0.0 || p.y < 0.0 {
            continue;
        }
        let (x, y) = (p.x as u16, p.y as u16);
        if let Some(cell) = buffer.cell_mut((area.x + x, area.y + y)) {
            cell.set_char(p.symbol).set_fg(p.color);
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celebration::Celebration;
    use crate::tui::input::Command;
    use gridline_core::{Game, GameConfig};
    use ratatui::{Terminal, backend::TestBackend};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(
            Game::new(GameConfig::new(3, 2).unwrap()),
            Rc::new(RefCell::new(Celebration::new(9))),
        )
    }

    #[test]
    fn test_renders_title_and_status() {
        let screen = render(&app());
        assert!(screen.contains("Gridline"));
        assert!(screen.contains("Player 1 to move"));
    }

    #[test]
    fn test_renders_player_glyphs() {
        let mut app = app();
        app.apply(Command::Place);
        let screen = render(&app);
        assert!(screen.contains('X'));
        assert!(screen.contains("Player 2 to move"));
    }

    #[test]
    fn test_render_keeps_celebration_inside_frame() {
        let mut app = app();
        app.celebration().borrow_mut().start(gridline_core::PlayerId::FIRST);
        for _ in 0..5 {
            app.tick();
            render(&app);
        }
        let celebration = app.celebration().borrow();
        assert!(celebration.particles().iter().all(|p| p.x < 60.0 && p.y < 20.0));
    }

    #[test]
    fn test_largest_grid_renders_without_overflow() {
        let app = App::new(
            Game::new(GameConfig::new(gridline_core::MAX_GRID_SIZE, 2).unwrap()),
            Rc::new(RefCell::new(Celebration::new(1))),
        );
        let screen = render(&app);
        assert!(screen.contains("Player 1 to move"));
    }
}
