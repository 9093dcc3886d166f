//! # MessageList Component
//!
//! Scrollable view of the chat thread.
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent scroll state) and the message views
//! of the current `ViewTree` (props).
//!
//! The list sticks to the bottom while the user hasn't scrolled up, so a
//! reply arriving from the simulator is scrolled into view automatically.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::render::MessageView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Message;
use crate::tui::event::TuiEvent;

/// Lines moved per ScrollUp/ScrollDown.
const SCROLL_STEP: u16 = 1;

/// Scroll state for the message list. Lives in `TuiState`.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Height of every message at the last rendered width
    pub heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            heights: Vec::new(),
            viewport_height: 0,
        }
    }

    fn content_height(&self) -> u16 {
        self.heights.iter().sum()
    }

    fn max_offset(&self) -> u16 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset();
        let max_y = i32::from(self.max_offset());
        let target = (i32::from(current.y) + delta).clamp(0, max_y);
        // clamp keeps target within u16 range
        let y = u16::try_from(target).unwrap_or(0);
        self.scroll_state.set_offset(Position { x: current.x, y });
        self.stick_to_bottom = i32::from(y) >= max_y;
    }
}

impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        let page = i32::from(self.viewport_height.saturating_sub(1).max(1));
        let delta = match event {
            TuiEvent::ScrollUp => -i32::from(SCROLL_STEP),
            TuiEvent::ScrollDown => i32::from(SCROLL_STEP),
            TuiEvent::ScrollPageUp => -page,
            TuiEvent::ScrollPageDown => page,
            _ => return None,
        };
        self.scroll_by(delta);
        Some(())
    }
}

pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [MessageView<'a>],
}

impl<'a> MessageList<'a> {
    pub fn new(state: &'a mut MessageListState, messages: &'a [MessageView<'a>]) -> Self {
        Self { state, messages }
    }
}

impl Component for MessageList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for the scrollbar

        self.state.heights = self
            .messages
            .iter()
            .map(|m| Message::calculate_height(m, content_width))
            .collect();
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let total_height = self.state.content_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset = 0u16;
        for (view, &height) in self.messages.iter().zip(&self.state.heights) {
            scroll_view.render_widget(
                Message::new(view),
                Rect::new(0, y_offset, content_width, height),
            );
            y_offset += height;
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chat::Sender;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn views(texts: &[&'static str]) -> Vec<MessageView<'static>> {
        texts
            .iter()
            .map(|&text| MessageView {
                sender: Sender::User,
                text,
                wines: &[],
            })
            .collect()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn renders_all_messages_when_they_fit() {
        let messages = views(&["Erste", "Zweite"]);
        let mut state = MessageListState::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| MessageList::new(&mut state, &messages).render(f, f.area()))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Erste"));
        assert!(text.contains("Zweite"));
        assert_eq!(state.heights, vec![3, 3]);
    }

    #[test]
    fn sticks_to_newest_message() {
        let messages = views(&["Eins", "Zwei", "Drei", "Vier"]);
        let mut state = MessageListState::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|f| MessageList::new(&mut state, &messages).render(f, f.area()))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Vier"));
        assert!(!text.contains("Eins"));
    }

    #[test]
    fn scrolling_up_unpins_and_bottom_repins() {
        let mut state = MessageListState::new();
        state.heights = vec![3, 3, 3, 3];
        state.viewport_height = 6;
        state.scroll_state.set_offset(Position { x: 0, y: 6 });

        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);
        assert_eq!(state.scroll_state.offset().y, 5);

        state.handle_event(&TuiEvent::ScrollPageDown);
        assert!(state.stick_to_bottom);
        assert_eq!(state.scroll_state.offset().y, 6);
    }

    #[test]
    fn scroll_never_goes_above_top() {
        let mut state = MessageListState::new();
        state.heights = vec![3, 3, 3, 3];
        state.viewport_height = 6;

        state.handle_event(&TuiEvent::ScrollPageUp);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn ignores_unrelated_events() {
        let mut state = MessageListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }
}
