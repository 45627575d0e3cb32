//! The move list pane: one entry per snapshot, selectable and clickable.

use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Draws the move list and records its region for mouse hit-testing.
pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Moves");
    app.moves_area = block.inner(area);

    let items: Vec<ListItem> = app.move_labels().into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.moves_state);
}
