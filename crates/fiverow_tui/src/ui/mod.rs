//! Screen layout: status bar on top, board beside the move list, help below.

pub mod board;
pub mod moves;

use crate::app::App;
use fiverow::Outcome;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Draws one frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_status(frame, app, rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(rows[1]);
    board::draw(frame, app, panes[0]);
    moves::draw(frame, app, panes[1]);

    draw_controls(frame, rows[2]);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let style = match app.history.outcome() {
        Outcome::Win { .. } => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Outcome::Draw => Style::default().fg(Color::Yellow),
        Outcome::InProgress => Style::default(),
    };
    let status = Paragraph::new(app.status_line())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "q: quit | tab: switch pane | arrows: move | enter: place or jump | [ ]: back / forward | n: new game",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
