//! # Chat State
//!
//! The conversation thread and the draft the user is composing.
//!
//! ```text
//! ChatState
//! ├── messages: Vec<Message>   // append-only, chronological = render order
//! └── draft: String            // uncommitted input
//! ```
//!
//! The message vector is private: callers only ever see `&[Message]`, and the
//! two append paths (`submit_draft`, `append_bot_message`) are the only way it
//! grows. Nothing edits or removes a message once it is in the list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A wine suggestion attached to a bot message. Purely descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineRecommendation {
    pub name: String,
    pub region: String,
    pub grape: String,
    pub points: u8,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wines: Option<Vec<WineRecommendation>>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            wines: None,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            wines: None,
        }
    }

    pub fn with_wines(mut self, wines: Vec<WineRecommendation>) -> Self {
        self.wines = Some(wines);
        self
    }

    /// Recommendations carried by this message (empty slice when none).
    pub fn wines(&self) -> &[WineRecommendation] {
        self.wines.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    messages: Vec<Message>,
    draft: String,
}

impl ChatState {
    /// Start a thread from the seed conversation.
    pub fn new(seed: Vec<Message>) -> Self {
        Self {
            messages: seed,
            draft: String::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft. Anything goes while composing, including "".
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commit the draft as a user message.
    ///
    /// Whitespace-only drafts are ignored: nothing is appended and the draft
    /// is left exactly as it was. On success the trimmed text is appended,
    /// the draft is cleared, and the new message is returned.
    pub fn submit_draft(&mut self) -> Option<&Message> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return None;
        }
        let message = Message::user(trimmed);
        self.draft.clear();
        self.messages.push(message);
        self.messages.last()
    }

    /// Append a reply produced by the response simulator.
    pub fn append_bot_message(&mut self, message: Message) {
        debug_assert_eq!(message.sender, Sender::Bot, "bot path received a user message");
        self.messages.push(message);
    }
}
