//! # TabBar Component
//!
//! Top line of the screen: the three view tabs on the left, a short status
//! on the right ("Sommelier tippt…" while replies are pending).
//!
//! Stateless: the headers come straight from the `ViewTree`, so the bar can
//! never disagree with the body about which view is active.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::render::TabHeader;
use crate::tui::component::Component;

const SEPARATOR: &str = " │ ";

pub struct TabBar<'a> {
    pub tabs: &'a [TabHeader],
    pub status: &'a str,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a [TabHeader], status: &'a str) -> Self {
        Self { tabs, status }
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(self.tabs.len() * 2);
        for (i, header) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            }
            let label = format!("F{} {}", i + 1, header.label);
            let style = if header.active {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(label, style));
        }
        spans
    }
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = self.tab_spans();

        if !self.status.is_empty() {
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let status_width = self.status.width();
            let gap = (area.width as usize).saturating_sub(used + status_width);
            if gap > 0 {
                spans.push(Span::raw(" ".repeat(gap)));
                spans.push(Span::styled(
                    self.status.to_string(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
