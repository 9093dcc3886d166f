//! # Application State
//!
//! Core business state for one session. Domain logic only, no TUI types.
//! Presentation state (scroll offsets, cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── session_id: String          // log correlation
//! ├── view: ViewState             // active tab
//! ├── chat: ChatState             // messages + draft
//! ├── content: Arc<Content>       // read-only profile/cellar/quick actions
//! ├── pending_replies: usize      // simulated replies still in flight
//! └── revision: u64               // bumped on every state change
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! `revision` is how readers find out that something changed: renderers
//! compare it with the last revision they drew.

use std::sync::Arc;

use crate::core::chat::ChatState;
use crate::core::content::Content;
use crate::core::view::ViewState;

pub struct App {
    pub session_id: String,
    pub view: ViewState,
    pub chat: ChatState,
    pub content: Arc<Content>,
    pub pending_replies: usize,
    revision: u64,
}

impl App {
    pub fn new(content: Arc<Content>) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            view: ViewState::new(),
            chat: ChatState::new(content.seed.clone()),
            content,
            pending_replies: 0,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::core::chat::Sender;
    use crate::core::view::Tab;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.view.active_tab(), Tab::Chat);
        assert_eq!(app.chat.messages().len(), 3);
        assert_eq!(app.chat.messages()[2].sender, Sender::Bot);
        assert_eq!(app.chat.draft(), "");
        assert_eq!(app.pending_replies, 0);
        assert_eq!(app.revision(), 0);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(test_app().session_id, test_app().session_id);
    }
}
