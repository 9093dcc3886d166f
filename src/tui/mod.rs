//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, draws the `ViewTree`,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop redraws only when the app revision moved or a TUI-local event
//! (scrolling, cursor movement, resize) arrived. Between events it sleeps up
//! to 100ms so that simulated replies show up promptly once their timers
//! fire.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::runtime::Session;
use crate::core::view::Tab;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

/// Translate a terminal event into a core action, or handle it locally.
///
/// Returns `None` when the event was presentation-only.
fn route_event(event: &TuiEvent, active_tab: Tab, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::SelectTab(tab) => Some(Action::SelectTab(*tab)),
        TuiEvent::NextTab => Some(Action::SelectTab(active_tab.next())),
        TuiEvent::PrevTab => Some(Action::SelectTab(active_tab.prev())),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            if active_tab == Tab::Chat {
                tui.message_list.handle_event(event);
            }
            None
        }
        TuiEvent::Resize => None,
        // Text entry only exists on the chat tab
        _ if active_tab != Tab::Chat => None,
        _ => match tui.input_box.handle_event(event)? {
            InputEvent::Edited(text) => Some(Action::SetDraft(text)),
            InputEvent::Submit => Some(Action::SubmitDraft),
            InputEvent::CursorMoved => None,
        },
    }
}

/// Route one event and dispatch the resulting action.
///
/// The input box follows the core draft right away, so keys later in the
/// same batch edit the post-submit draft and not the text just sent.
fn apply_event(event: &TuiEvent, session: &mut Session, tui: &mut TuiState) -> Effect {
    let active_tab = session.app().view.active_tab();
    let Some(action) = route_event(event, active_tab, tui) else {
        return Effect::None;
    };
    let effect = session.dispatch(action);
    tui.input_box.sync(session.app().chat.draft());
    effect
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut session = Session::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut drawn_revision = None;
    let mut needs_redraw = true;

    'main: loop {
        if needs_redraw || drawn_revision != Some(session.app().revision()) {
            let tree = session.view();
            terminal.draw(|f| ui::draw_ui(f, &tree, &mut tui))?;
            drawn_revision = Some(session.app().revision());
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(POLL_TIMEOUT);
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if apply_event(&event, &mut session, &mut tui) == Effect::Quit {
                break 'main;
            }
        }

        // Replies whose timers fired since the last pass
        session.drain_replies();
    }

    session.cancel_pending();
    ratatui::restore();
    Ok(())
}
