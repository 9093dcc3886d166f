//! # Core Application Logic
//!
//! This module contains the shell's state model.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • render() (view tree) │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   JSON     │      │   Tests    │
//!     │  Adapter   │      │   dump     │      │            │
//!     │ (ratatui)  │      │ (headless) │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`view`]: `ViewState` and the `Tab` enum
//! - [`chat`]: `ChatState`, messages and wine recommendations
//! - [`content`]: static seed/profile/cellar data injected at startup
//! - [`state`]: the `App` struct holding all session state
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`simulator`]: delayed canned replies
//! - [`runtime`]: `Session`, which wires the reducer to the simulator
//! - [`render`]: the pure `ViewTree` projection
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod chat;
pub mod config;
pub mod content;
pub mod render;
pub mod runtime;
pub mod simulator;
pub mod state;
pub mod view;
