//! # Renderer
//!
//! A pure projection from application state to a framework-independent
//! view tree. The TUI draws this tree; the headless mode serializes it.
//!
//! ```text
//! ViewTree
//! ├── tabs: [TabHeader; 3]     // fixed order, exactly one active
//! └── body: ViewBody           // only the active view is built
//!     ├── Chat    { messages, draft, quick_actions, pending_replies }
//!     ├── Profile { dimensions, tags }
//!     └── Cellar  { slots, summary }
//! ```
//!
//! Nothing here is cached or stored. Calling `render` twice on the same
//! state yields equal trees, and derived numbers such as the cellar summary
//! are recomputed from the slot list every time.

use serde::Serialize;

use crate::core::chat::{Message, Sender, WineRecommendation};
use crate::core::content::{CellarSlot, WineColor};
use crate::core::state::App;
use crate::core::view::Tab;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewTree<'a> {
    pub tabs: Vec<TabHeader>,
    pub body: ViewBody<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabHeader {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewBody<'a> {
    Chat(ChatView<'a>),
    Profile(ProfileView<'a>),
    Cellar(CellarView<'a>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatView<'a> {
    pub messages: Vec<MessageView<'a>>,
    pub draft: &'a str,
    /// Decorative shortcut labels; they carry no behavior.
    pub quick_actions: &'a [String],
    pub pending_replies: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MessageView<'a> {
    pub sender: Sender,
    pub text: &'a str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub wines: &'a [WineRecommendation],
}

impl<'a> From<&'a Message> for MessageView<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            sender: message.sender,
            text: &message.text,
            wines: message.wines(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView<'a> {
    pub dimensions: Vec<DimensionView<'a>>,
    pub tags: &'a [String],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionView<'a> {
    pub name: &'a str,
    /// Bar fill, clamped to 0..=100.
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellarView<'a> {
    pub slots: Vec<SlotView<'a>>,
    pub summary: CellarSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotView<'a> {
    pub filled: bool,
    pub wine: Option<&'a str>,
    pub color: WineColor,
}

impl<'a> From<&'a CellarSlot> for SlotView<'a> {
    fn from(slot: &'a CellarSlot) -> Self {
        Self {
            filled: slot.filled,
            wine: slot.wine.as_deref(),
            color: slot.color(),
        }
    }
}

/// Filled/empty counts, always derived from the slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CellarSummary {
    pub filled: usize,
    pub empty: usize,
    pub total: usize,
}

impl CellarSummary {
    pub fn from_slots(slots: &[CellarSlot]) -> Self {
        let total = slots.len();
        let filled = slots.iter().filter(|s| s.filled).count();
        Self {
            filled,
            empty: total - filled,
            total,
        }
    }
}

pub fn render(app: &App) -> ViewTree<'_> {
    let active = app.view.active_tab();
    let tabs = Tab::ALL
        .iter()
        .map(|&tab| TabHeader {
            tab,
            label: tab.label(),
            active: tab == active,
        })
        .collect();

    let body = match active {
        Tab::Chat => ViewBody::Chat(ChatView {
            messages: app.chat.messages().iter().map(MessageView::from).collect(),
            draft: app.chat.draft(),
            quick_actions: &app.content.quick_actions,
            pending_replies: app.pending_replies,
        }),
        Tab::Profile => ViewBody::Profile(ProfileView {
            dimensions: app
                .content
                .taste_profile
                .iter()
                .map(|d| DimensionView {
                    name: &d.name,
                    percent: d.value.min(100),
                })
                .collect(),
            tags: &app.content.preferences,
        }),
        Tab::Cellar => ViewBody::Cellar(CellarView {
            slots: app.content.cellar.iter().map(SlotView::from).collect(),
            summary: CellarSummary::from_slots(&app.content.cellar),
        }),
    };

    ViewTree { tabs, body }
}
