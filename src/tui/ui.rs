//! Frame layout: tab bar on top, the active view below it. The chat view
//! adds the input box and the quick-action row at the bottom.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::render::{ChatView, ViewBody, ViewTree};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Cellar, MessageList, Profile, TabBar};

const TYPING_STATUS: &str = "Sommelier tippt…";

pub fn draw_ui(frame: &mut Frame, tree: &ViewTree<'_>, tui: &mut TuiState) {
    let [tab_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    let status = match &tree.body {
        ViewBody::Chat(chat) if chat.pending_replies > 0 => TYPING_STATUS,
        _ => "",
    };
    TabBar::new(&tree.tabs, status).render(frame, tab_area);

    match &tree.body {
        ViewBody::Chat(chat) => draw_chat(frame, body_area, chat, tui),
        ViewBody::Profile(profile) => Profile::new(profile).render(frame, body_area),
        ViewBody::Cellar(cellar) => Cellar::new(cellar).render(frame, body_area),
    }
}

fn draw_chat(frame: &mut Frame, area: Rect, chat: &ChatView<'_>, tui: &mut TuiState) {
    tui.input_box.sync(chat.draft);
    let input_height = tui.input_box.calculate_height(area.width);
    let quick_height = u16::from(!chat.quick_actions.is_empty());

    let [list_area, input_area, quick_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(input_height),
        Constraint::Length(quick_height),
    ])
    .areas(area);

    MessageList::new(&mut tui.message_list, &chat.messages).render(frame, list_area);
    tui.input_box.render(frame, input_area);

    if quick_height > 0 {
        frame.render_widget(Paragraph::new(quick_actions_line(chat.quick_actions)), quick_area);
    }
}

/// Decorative shortcut labels; they are not wired to any action.
fn quick_actions_line(labels: &[String]) -> Line<'_> {
    let style = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled("Schnellauswahl: ", style)];
    for label in labels {
        spans.push(Span::styled(format!("[{label}] "), style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::render::render;
    use crate::core::view::Tab;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &crate::core::state::App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let tree = render(app);
        terminal.draw(|f| draw_ui(f, &tree, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn chat_tab_shows_thread_input_and_quick_actions() {
        let app = test_app();
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Willkommen!"));
        assert!(text.contains("Ihre Nachricht"));
        assert!(text.contains("[Zum Essen]"));
        assert!(!text.contains("Geschmacksprofil"));
    }

    #[test]
    fn typing_status_while_reply_pending() {
        let mut app = test_app();
        update(&mut app, Action::SetDraft("Hallo".into()));
        update(&mut app, Action::SubmitDraft);
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains(TYPING_STATUS));
    }

    #[test]
    fn profile_tab_replaces_chat_body() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(Tab::Profile));
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Geschmacksprofil"));
        assert!(!text.contains("Ihre Nachricht"));
    }

    #[test]
    fn cellar_tab_shows_summary() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(Tab::Cellar));
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("5 belegt · 4 frei · 9 Plätze"));
    }

    #[test]
    fn input_box_follows_cleared_draft() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.input_box.buffer = "Hallo".to_string();
        update(&mut app, Action::SetDraft("Hallo".into()));
        update(&mut app, Action::SubmitDraft);

        draw(&app, &mut tui);
        assert!(tui.input_box.buffer.is_empty());
    }
}
