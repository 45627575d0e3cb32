//! Application state and input handling for the terminal client.

use crate::config::Settings;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use fiverow::{History, Outcome};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tracing::{debug, warn};

/// Which pane owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys steer the board cursor; enter places a mark.
    Board,
    /// Arrow keys steer the move list; enter jumps to the selection.
    Moves,
}

/// State for one terminal session.
///
/// The game itself lives entirely in [`History`]; everything else here is
/// presentation state: cursor position, pane focus, list selection, and
/// the screen regions recorded during drawing so mouse clicks can be
/// resolved against them.
pub struct App {
    /// Resolved session settings.
    pub settings: Settings,
    /// The game timeline.
    pub history: History,
    /// Board cursor row.
    pub cursor_row: usize,
    /// Board cursor column.
    pub cursor_col: usize,
    /// Pane that currently owns the keyboard.
    pub focus: Focus,
    /// Selection state of the move list.
    pub moves_state: ListState,
    /// Grid region drawn last frame, for mouse hit-testing.
    pub board_area: Rect,
    /// Move-list region drawn last frame, for mouse hit-testing.
    pub moves_area: Rect,
    /// Set when the user asks to leave.
    pub should_quit: bool,
}

impl App {
    /// Creates a session with a fresh game and the cursor mid-board.
    pub fn new(settings: Settings) -> Self {
        let size = *settings.size();
        let mut moves_state = ListState::default();
        moves_state.select(Some(0));
        Self {
            settings,
            history: History::new(size, *settings.win_length()),
            cursor_row: size / 2,
            cursor_col: size / 2,
            focus: Focus::Board,
            moves_state,
            board_area: Rect::default(),
            moves_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Status line above the board.
    pub fn status_line(&self) -> String {
        match self.history.outcome() {
            Outcome::Win { winner, .. } => format!("Winner: {winner}"),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.history.to_move()),
        }
    }

    /// One label per snapshot for the move list.
    pub fn move_labels(&self) -> Vec<String> {
        let current = self.history.current();
        (0..self.history.snapshots().len())
            .map(|index| Self::move_label(index, current))
            .collect()
    }

    /// Label for one move-list entry.
    pub fn move_label(index: usize, current: usize) -> String {
        if index == current {
            format!("You are at move #{index}")
        } else if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{index}")
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Handles one key press.
    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            KeyCode::Char('n') => self.reset(),
            KeyCode::Char('[') => self.step_back(),
            KeyCode::Char(']') => self.step_forward(),
            _ => match self.focus {
                Focus::Board => self.on_board_key(code),
                Focus::Moves => self.on_moves_key(code),
            },
        }
    }

    fn on_board_key(&mut self, code: KeyCode) {
        let size = self.history.size();
        match code {
            KeyCode::Up => self.cursor_row = self.cursor_row.saturating_sub(1),
            KeyCode::Down => {
                if self.cursor_row + 1 < size {
                    self.cursor_row += 1;
                }
            }
            KeyCode::Left => self.cursor_col = self.cursor_col.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor_col + 1 < size {
                    self.cursor_col += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_at(self.cursor_row * size + self.cursor_col);
            }
            _ => {}
        }
    }

    fn on_moves_key(&mut self, code: KeyCode) {
        let last = self.history.move_count();
        let selected = self.moves_state.selected().unwrap_or(0);
        match code {
            KeyCode::Up => self.moves_state.select(Some(selected.saturating_sub(1))),
            KeyCode::Down => self.moves_state.select(Some((selected + 1).min(last))),
            KeyCode::Home => self.moves_state.select(Some(0)),
            KeyCode::End => self.moves_state.select(Some(last)),
            KeyCode::Enter => self.jump(selected),
            _ => {}
        }
    }

    /// Handles one mouse event. Only left-button presses do anything: on
    /// the grid they place a mark, on the move list they time-travel.
    pub fn on_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = self.board_index_at(event.column, event.row) {
            self.focus = Focus::Board;
            self.cursor_row = index / self.history.size();
            self.cursor_col = index % self.history.size();
            self.play_at(index);
        } else if let Some(target) = self.move_item_at(event.column, event.row) {
            self.focus = Focus::Moves;
            self.jump(target);
        }
    }

    /// Board index under a screen position, if it lands on the grid.
    /// Cells are drawn two columns wide.
    pub fn board_index_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.board_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let size = self.history.size();
        let col = ((column - area.x) / 2) as usize;
        let board_row = (row - area.y) as usize;
        if col < size && board_row < size {
            Some(board_row * size + col)
        } else {
            None
        }
    }

    /// Move-list entry under a screen position, accounting for scroll.
    pub fn move_item_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.moves_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let index = self.moves_state.offset() + (row - area.y) as usize;
        if index < self.history.snapshots().len() {
            Some(index)
        } else {
            None
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Plays at `index`. Illegal requests leave the game as it was.
    fn play_at(&mut self, index: usize) {
        let history = std::mem::take(&mut self.history);
        self.history = history.play(index);
        self.sync_selection();
    }

    /// Moves the history pointer. Targets always come from the move list
    /// or the step keys, so rejection indicates a bookkeeping bug.
    fn jump(&mut self, target: usize) {
        match self.history.jump_to(target) {
            Ok(pointer) => {
                debug!(pointer, "jumped");
                self.sync_selection();
            }
            Err(err) => warn!(%err, "jump rejected"),
        }
    }

    fn step_back(&mut self) {
        let current = self.history.current();
        if current > 0 {
            self.jump(current - 1);
        }
    }

    fn step_forward(&mut self) {
        let current = self.history.current();
        if current < self.history.move_count() {
            self.jump(current + 1);
        }
    }

    /// Abandons the game and starts over with the same settings.
    fn reset(&mut self) {
        let size = *self.settings.size();
        self.history = History::new(size, *self.settings.win_length());
        self.cursor_row = size / 2;
        self.cursor_col = size / 2;
        self.sync_selection();
    }

    /// Keeps the move-list selection on the current snapshot.
    fn sync_selection(&mut self) {
        self.moves_state.select(Some(self.history.current()));
    }
}
