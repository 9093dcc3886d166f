//! Sommelier library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::action::{Action, Effect};
pub use crate::core::runtime::Session;
pub use crate::core::view::Tab;
