//! # Cellar Component
//!
//! Bottle slots laid out as a grid, three per row, with the filled/empty
//! summary underneath. Filled slots take the color of their wine style.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::content::WineColor;
use crate::core::render::{CellarView, SlotView};
use crate::tui::component::Component;

const COLUMNS: usize = 3;
const SLOT_HEIGHT: u16 = 3;

pub struct Cellar<'a> {
    pub view: &'a CellarView<'a>,
}

impl<'a> Cellar<'a> {
    pub fn new(view: &'a CellarView<'a>) -> Self {
        Self { view }
    }

    fn summary_text(&self) -> String {
        let summary = self.view.summary;
        format!(
            "{} belegt · {} frei · {} Plätze",
            summary.filled, summary.empty, summary.total
        )
    }
}

pub(crate) fn color_for(color: WineColor) -> Color {
    match color {
        WineColor::Red => Color::Red,
        WineColor::White => Color::LightYellow,
        WineColor::Rose => Color::LightMagenta,
        WineColor::Sparkling => Color::Yellow,
        WineColor::Orange => Color::LightRed,
        WineColor::Other => Color::Gray,
    }
}

fn slot_widget<'s>(slot: &SlotView<'s>, number: usize) -> Paragraph<'s> {
    let (text, style) = if slot.filled {
        (
            slot.wine.unwrap_or("Flasche"),
            Style::default().fg(color_for(slot.color)),
        )
    } else {
        ("leer", Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
    };

    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style)
                .title(format!("#{number}")),
        )
}

impl Component for Cellar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = self.view.slots.len().div_ceil(COLUMNS);
        let grid_height = u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_mul(SLOT_HEIGHT);
        let [grid_area, summary_area] =
            Layout::vertical([Constraint::Max(grid_height), Constraint::Length(1)]).areas(area);

        let row_areas = Layout::vertical(vec![Constraint::Length(SLOT_HEIGHT); rows]).split(grid_area);
        for (row_index, (chunk, row_area)) in self
            .view
            .slots
            .chunks(COLUMNS)
            .zip(row_areas.iter())
            .enumerate()
        {
            let cells = Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS]).split(*row_area);
            for (col_index, (slot, cell)) in chunk.iter().zip(cells.iter()).enumerate() {
                let number = row_index * COLUMNS + col_index + 1;
                frame.render_widget(slot_widget(slot, number), *cell);
            }
        }

        frame.render_widget(
            Paragraph::new(self.summary_text())
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            summary_area,
        );
    }
}
