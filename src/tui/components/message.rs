use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::chat::{Sender, WineRecommendation};
use crate::core::render::MessageView;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Indent of the wine details under the wine name.
const WINE_INDENT: &str = "  ";

/// A single chat bubble, created fresh each frame.
///
/// Text is wrapped up front with `textwrap` and handed to the `Paragraph`
/// line by line, so [`calculate_height`](Self::calculate_height) and the
/// drawn output can't disagree. Recommendations are listed below the text,
/// each as a name line, a region/grape line and a wrapped description.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub view: &'a MessageView<'a>,
}

impl<'a> Message<'a> {
    pub fn new(view: &'a MessageView<'a>) -> Self {
        Self { view }
    }

    /// Rows needed to draw `view` at the given outer width.
    pub fn calculate_height(view: &MessageView<'_>, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Too narrow for borders + padding; still occupy a row.
            return 1;
        }
        let lines = content_lines(view, content_width).len() as u16;
        lines.max(1) + VERTICAL_OVERHEAD
    }
}

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

fn text_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(Color::Green),
        Sender::Bot => Style::default().fg(Color::White),
    }
}

fn wrapped<'s>(text: &str, width: u16, style: Style, indent: &'static str) -> Vec<Line<'s>> {
    let options = wrap_options(width).initial_indent(indent).subsequent_indent(indent);
    textwrap::wrap(text.trim(), options)
        .into_iter()
        .map(|l| Line::from(Span::styled(l.into_owned(), style)))
        .collect()
}

fn wine_lines(wine: &WineRecommendation, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let header = format!("🍷 {} · {} Pkt. · {}", wine.name, wine.points, wine.price);
    lines.extend(wrapped(
        &header,
        width,
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        "",
    ));
    lines.extend(wrapped(
        &format!("{} · {}", wine.region, wine.grape),
        width,
        Style::default().fg(Color::Gray),
        WINE_INDENT,
    ));
    if !wine.description.trim().is_empty() {
        lines.extend(wrapped(
            &wine.description,
            width,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            WINE_INDENT,
        ));
    }
    lines
}

fn content_lines(view: &MessageView<'_>, width: u16) -> Vec<Line<'static>> {
    let mut lines = wrapped(view.text, width, text_style(view.sender), "");
    for wine in view.wines {
        lines.push(Line::default());
        lines.extend(wine_lines(wine, width));
    }
    lines
}

impl Widget for Message<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let (role, border_style) = match self.view.sender {
            Sender::User => ("Sie", Style::default().fg(Color::Green).add_modifier(Modifier::DIM)),
            Sender::Bot => ("Sommelier", Style::default().fg(Color::Magenta).add_modifier(Modifier::DIM)),
        };

        let block = Block::bordered()
            .title(role)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let lines = content_lines(self.view, inner_area.width);
        Paragraph::new(lines).render(inner_area, buf);
    }
}
