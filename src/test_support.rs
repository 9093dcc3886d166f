//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::time::Duration;

use crate::core::content::Content;
use crate::core::runtime::Session;
use crate::core::simulator::ResponseSimulator;
use crate::core::state::App;

/// Reply delay used by session tests (matches the shipped default).
pub const TEST_DELAY: Duration = Duration::from_millis(1000);

pub fn test_content() -> Content {
    Content::default()
}

/// Creates a test App over the built-in content.
pub fn test_app() -> App {
    test_app_with(test_content())
}

pub fn test_app_with(content: Content) -> App {
    App::new(Arc::new(content))
}

/// Creates a session with a fixed-text simulator. Needs a tokio runtime.
pub fn test_session() -> Session {
    Session::new(
        Arc::new(test_content()),
        ResponseSimulator::new(TEST_DELAY, "Test-Antwort"),
    )
}
