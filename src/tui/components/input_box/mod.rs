//! # InputBox Component
//!
//! Editing surface for the chat draft.
//!
//! ## Responsibilities
//!
//! - Capture text input, paste and editing keys
//! - Report every edit so the parent can dispatch `Action::SetDraft`
//! - Report Enter so the parent can dispatch `Action::SubmitDraft`
//! - Follow the core draft when it changes underneath (cleared after a send)
//!
//! ## State Management
//!
//! The buffer mirrors `ChatState::draft`. The core owns the truth; the box
//! keeps a copy only because it also tracks the cursor inside it.

mod layout;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use layout::{
    CONTENT_OFFSET, MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, cursor_position, inner_width,
    next_char_boundary, prev_char_boundary, wrap_ranges,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The buffer changed; carries the new text
    Edited(String),
    /// Enter pressed
    Submit,
    /// Only the cursor moved
    CursorMoved,
}

pub struct InputBox {
    pub buffer: String,
    /// Cursor as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible wrapped line
    scroll_offset: u16,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll_offset: 0,
        }
    }

    /// Adopt the core draft if it differs from the buffer.
    pub fn sync(&mut self, draft: &str) {
        if self.buffer != draft {
            self.buffer = draft.to_string();
            self.cursor = self.buffer.len();
            self.scroll_offset = 0;
        }
    }

    /// Required height for the current buffer, clamped to the viewport limit.
    pub fn calculate_height(&self, outer_width: u16) -> u16 {
        let lines = wrap_ranges(&self.buffer, inner_width(outer_width)).len();
        let (cursor_row, _) = cursor_position(&self.buffer, self.cursor, inner_width(outer_width));
        let lines = u16::try_from(lines).unwrap_or(u16::MAX).max(cursor_row + 1);
        lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn insert(&mut self, text: &str) -> InputEvent {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
        InputEvent::Edited(self.buffer.clone())
    }

    fn update_scroll_offset(&mut self, width: u16) {
        let (row, _) = cursor_position(&self.buffer, self.cursor, width);
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = row + 1 - MAX_VISIBLE_LINES;
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        self.update_scroll_offset(width);

        let lines: Vec<Line> = wrap_ranges(&self.buffer, width)
            .into_iter()
            .skip(usize::from(self.scroll_offset))
            .take(usize::from(MAX_VISIBLE_LINES))
            .map(|r| Line::raw(&self.buffer[r]))
            .collect();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
            .title("Ihre Nachricht (Enter senden · Esc beenden)");

        let input = Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        let (row, col) = cursor_position(&self.buffer, self.cursor, width);
        let visible_row = row.saturating_sub(self.scroll_offset);
        frame.set_cursor_position((
            area.x + CONTENT_OFFSET + col,
            area.y + 1 + visible_row,
        ));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut encoded = [0u8; 4];
                Some(self.insert(c.encode_utf8(&mut encoded)))
            }
            // Enter sends, so pasted line breaks become spaces
            TuiEvent::Paste(text) => Some(self.insert(&text.replace(['\r', '\n'], " "))),
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::Edited(self.buffer.clone())
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::Edited(self.buffer.clone())
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor > 0).then(|| {
                self.cursor = 0;
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::CursorMoved
            }),
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> InputBox {
        let mut input = InputBox::new();
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    #[test]
    fn test_typing_reports_full_buffer() {
        let mut input = InputBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('R')),
            Some(InputEvent::Edited("R".into()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('ü')),
            Some(InputEvent::Edited("Rü".into()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::Edited("R".into()))
        );
    }

    #[test]
    fn test_edit_in_the_middle() {
        let mut input = typed("Wein");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::InputChar('W'));
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "Wein");
        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "Wen");
    }

    #[test]
    fn test_boundaries_emit_nothing() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorEnd), None);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("Rot\nWeiß".into()));
        assert_eq!(input.buffer, "Rot Weiß");
    }

    #[test]
    fn test_submit_leaves_buffer_to_the_core() {
        let mut input = typed("Hallo");
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(InputEvent::Submit));
        assert_eq!(input.buffer, "Hallo");

        input.sync("");
        assert!(input.buffer.is_empty());
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_height_grows_and_caps() {
        let input = typed("abcdefghij");
        // inner width 10 - 4 = 6 → "abcdef" | "ghij"
        assert_eq!(input.calculate_height(10), 2 + VERTICAL_OVERHEAD);
        let long = typed(&"x".repeat(100));
        assert_eq!(long.calculate_height(10), MAX_VISIBLE_LINES + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_render_shows_text() {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        let mut input = typed("Ein Rotwein bitte");
        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Ein Rotwein bitte"));
        assert!(text.contains("Ihre Nachricht"));
    }
}
