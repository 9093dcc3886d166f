//! # Profile Component
//!
//! Taste dimensions as horizontal percentage bars, followed by the
//! preference tags.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, LineGauge, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::render::ProfileView;
use crate::tui::component::Component;

pub struct Profile<'a> {
    pub view: &'a ProfileView<'a>,
}

impl<'a> Profile<'a> {
    pub fn new(view: &'a ProfileView<'a>) -> Self {
        Self { view }
    }

    fn render_dimensions(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Geschmacksprofil");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label_width = self
            .view
            .dimensions
            .iter()
            .map(|d| d.name.width())
            .max()
            .unwrap_or(0);
        let label_width = u16::try_from(label_width).unwrap_or(u16::MAX).saturating_add(1);

        let rows = Layout::vertical(vec![Constraint::Length(1); self.view.dimensions.len()])
            .split(inner);
        for (dimension, row) in self.view.dimensions.iter().zip(rows.iter()) {
            let [label_area, gauge_area] =
                Layout::horizontal([Constraint::Length(label_width), Constraint::Min(0)]).areas(*row);

            frame.render_widget(Paragraph::new(dimension.name), label_area);
            let gauge = LineGauge::default()
                .ratio(f64::from(dimension.percent) / 100.0)
                .label(format!("{:>3}%", dimension.percent))
                .filled_style(Style::default().fg(Color::Magenta))
                .unfilled_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(gauge, gauge_area);
        }
    }

    fn render_tags(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.view.tags.len() * 2);
        for tag in self.view.tags {
            spans.push(Span::styled(
                format!(" {tag} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }

        let tags = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("Vorlieben"),
            );
        frame.render_widget(tags, area);
    }
}

impl Component for Profile<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bars_height = u16::try_from(self.view.dimensions.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let [bars_area, tags_area] =
            Layout::vertical([Constraint::Length(bars_height), Constraint::Min(3)]).areas(area);

        self.render_dimensions(frame, bars_area);
        self.render_tags(frame, tags_area);
    }
}
