use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen.
///
/// Components get their data as props (struct fields, usually borrowed from
/// the `ViewTree`) and draw into the `Rect` they are given. `render` takes
/// `&mut self` so that stateful components can update scroll offsets and
/// layout caches while drawing, like ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The higher-level event this component emits.
    type Event;

    /// Handle a `TuiEvent`, optionally producing a higher-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
