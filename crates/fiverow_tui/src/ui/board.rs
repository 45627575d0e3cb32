//! The board pane: the grid itself, the cursor, and the winning run.

use crate::app::{App, Focus};
use fiverow::{Player, Square};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Draws the board pane and records the grid region for mouse hit-testing.
pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let size = app.history.size();
    let grid = centered(inner, (size * 2) as u16, size as u16);
    app.board_area = grid;

    let winning = app
        .history
        .outcome()
        .winning_line()
        .map(|line| line.to_vec())
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(size);
    for row in 0..size {
        let mut spans = Vec::with_capacity(size);
        for col in 0..size {
            let index = row * size + col;
            spans.push(square_span(app, index, &winning));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), grid);
}

/// Styles one square as a two-column cell.
fn square_span(app: &App, index: usize, winning: &[usize]) -> Span<'static> {
    let (text, mut style) = match app.history.board().get(index) {
        Some(Square::Occupied(Player::X)) => (
            "X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            "O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (". ", Style::default().fg(Color::DarkGray)),
    };
    if winning.contains(&index) {
        style = Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    let under_cursor = index == app.cursor_row * app.history.size() + app.cursor_col;
    if under_cursor && app.focus == Focus::Board {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

/// Centers a `width` x `height` region inside `area`, clipping when the
/// terminal is too small.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centering_splits_slack() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(centered(area, 20, 10), Rect::new(10, 5, 20, 10));
    }

    #[test]
    fn test_centering_clips_oversized() {
        let area = Rect::new(2, 1, 10, 4);
        assert_eq!(centered(area, 32, 16), Rect::new(2, 1, 10, 4));
    }
}
