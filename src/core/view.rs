//! # View State
//!
//! Which of the three views is on screen. Exactly one tab is active at
//! any time; the session starts on [`Tab::Chat`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three mutually exclusive views of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Chat,
    Profile,
    Cellar,
}

impl Tab {
    /// Tab order as shown in the tab bar.
    pub const ALL: [Tab; 3] = [Tab::Chat, Tab::Profile, Tab::Cellar];

    /// Position of this tab in [`Tab::ALL`].
    pub fn index(self) -> usize {
        match self {
            Tab::Chat => 0,
            Tab::Profile => 1,
            Tab::Cellar => 2,
        }
    }

    /// Look up a tab by position.
    ///
    /// The trigger set is closed, so an out-of-range index is a caller bug:
    /// debug builds panic, release builds get `None`.
    pub fn from_index(index: usize) -> Option<Tab> {
        debug_assert!(index < Tab::ALL.len(), "invalid tab index {index}");
        Tab::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Chat => "Chat",
            Tab::Profile => "Profil",
            Tab::Cellar => "Keller",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tab::Chat => "chat",
            Tab::Profile => "profile",
            Tab::Cellar => "cellar",
        };
        f.write_str(name)
    }
}

/// Returned when a string does not name one of the three tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTabError(pub String);

impl fmt::Display for ParseTabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab '{}' (expected chat, profile or cellar)", self.0)
    }
}

impl std::error::Error for ParseTabError {}

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(Tab::Chat),
            "profile" => Ok(Tab::Profile),
            "cellar" => Ok(Tab::Cellar),
            _ => Err(ParseTabError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_tab: Tab,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Make `tab` the active view. Returns `false` if it already was.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }
}
