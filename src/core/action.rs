//! # Actions
//!
//! Everything that can happen in the shell becomes an `Action`.
//! User presses F2? That's `Action::SelectTab(Tab::Profile)`.
//! The reply timer fires? That's `Action::BotReply(message)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing what the runtime should do next. No side effects
//! here. Timers and I/O happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::chat::Message;
use crate::core::state::App;
use crate::core::view::Tab;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTab(Tab),
    SetDraft(String),
    SubmitDraft,
    BotReply(Message),
    Quit,
}

/// What the runtime has to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; re-render.
    Render,
    /// A user message was appended; start one reply timer and re-render.
    ScheduleReply,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectTab(tab) => {
            if !app.view.select_tab(tab) {
                return Effect::None;
            }
            debug!("Switched to tab {}", tab);
            app.touch();
            Effect::Render
        }
        Action::SetDraft(text) => {
            if app.chat.draft() == text {
                return Effect::None;
            }
            app.chat.set_draft(text);
            app.touch();
            Effect::Render
        }
        Action::SubmitDraft => {
            let Some(chars) = app.chat.submit_draft().map(|m| m.text.chars().count()) else {
                debug!("Ignoring blank submission");
                return Effect::None;
            };
            info!(
                "[{}] User message #{} ({} chars)",
                app.session_id,
                app.chat.messages().len(),
                chars
            );
            app.pending_replies += 1;
            app.touch();
            Effect::ScheduleReply
        }
        Action::BotReply(message) => {
            app.pending_replies = app.pending_replies.saturating_sub(1);
            app.chat.append_bot_message(message);
            info!(
                "[{}] Bot reply appended, {} still pending",
                app.session_id, app.pending_replies
            );
            app.touch();
            Effect::Render
        }
        Action::Quit => Effect::Quit,
    }
}
