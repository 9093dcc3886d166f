//! # Session Runtime
//!
//! Glues the pure reducer to the one asynchronous piece, the reply timer.
//!
//! ```text
//!   dispatch(action) ──► update() ──► Effect::ScheduleReply ──► simulator.schedule(tx)
//!                                                                     │  (delay)
//!   drain_replies() / next_reply() ◄── rx ◄── Action::BotReply ◄──────┘
//! ```
//!
//! Every mutation, including timer replies, goes through `update()` on the
//! caller's thread, so handlers never overlap. Dropping a `Session` drops its
//! simulator, which aborts any reply still waiting on its timer.

use std::sync::Arc;

use log::info;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::content::Content;
use crate::core::render::{ViewTree, render};
use crate::core::simulator::ResponseSimulator;
use crate::core::state::App;

pub struct Session {
    app: App,
    simulator: ResponseSimulator,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
}

impl Session {
    pub fn new(content: Arc<Content>, simulator: ResponseSimulator) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(content);
        info!(
            "[{}] Session started ({} seed messages, reply delay {:?})",
            app.session_id,
            app.chat.messages().len(),
            simulator.delay()
        );
        Self {
            app,
            simulator,
            tx,
            rx,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            Arc::new(config.content.clone()),
            ResponseSimulator::new(config.reply_delay, config.reply_text.clone()),
        )
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Apply an action and carry out its effect.
    ///
    /// Scheduling a reply spawns a tokio task, so a session that receives
    /// submits must live inside a runtime.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        let effect = update(&mut self.app, action);
        if effect == Effect::ScheduleReply {
            self.simulator.schedule(self.tx.clone());
        }
        effect
    }

    /// Apply every reply that has already arrived. Returns how many.
    pub fn drain_replies(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            update(&mut self.app, action);
            applied += 1;
        }
        applied
    }

    /// Wait for the next reply and apply it.
    pub async fn next_reply(&mut self) -> Effect {
        match self.rx.recv().await {
            Some(action) => update(&mut self.app, action),
            // Unreachable while `self.tx` is alive
            None => Effect::None,
        }
    }

    /// Project the current state into a view tree.
    pub fn view(&self) -> ViewTree<'_> {
        render(&self.app)
    }

    /// Drop replies that have not fired yet.
    pub fn cancel_pending(&mut self) {
        self.simulator.cancel_all();
        self.app.pending_replies = 0;
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!(
            "[{}] Session ended with {} messages",
            self.app.session_id,
            self.app.chat.messages().len()
        );
    }
}
