//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components created fresh each frame from a piece of the `ViewTree`:
//! - `TabBar`: Top line with the three tabs and a status hint
//! - `Message`: One chat bubble (a plain ratatui `Widget`), including attached wine recommendations
//! - `Profile`: Taste bars and preference tags
//! - `Cellar`: Slot grid and filled/empty summary
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames:
//! - `InputBox`: Draft editor with cursor, emits edits and submits
//! - `MessageList`: Scrollable chat thread (state in `MessageListState`)
//!
//! ## Props-Based Data Flow
//!
//! Components receive their data as props borrowed from the `ViewTree`, never
//! from `App` directly. Whatever the renderer projected is exactly what gets
//! drawn.
//!
//! ```rust,ignore
//! let tree = session.view();
//! TabBar::new(&tree.tabs, status).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── tab_bar.rs       (Tabs + status)
//! ├── message.rs       (Single chat bubble)
//! ├── message_list.rs  (Scrollable thread)
//! ├── profile.rs       (Taste profile view)
//! ├── cellar.rs        (Cellar view)
//! └── input_box/       (Draft editor)
//! ```

pub mod cellar;
pub mod input_box;
pub mod message;
pub mod message_list;
pub mod profile;
mod tab_bar;

pub use cellar::Cellar;
pub use input_box::{InputBox, InputEvent};
pub use message_list::{MessageList, MessageListState};
pub use profile::Profile;
pub use tab_bar::TabBar;
