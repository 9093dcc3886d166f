//! # Response Simulator
//!
//! Stands in for a recommendation backend. Each successful submit starts a
//! one-shot timer; when it expires, a fixed acknowledgment is sent back to the
//! event loop as `Action::BotReply`. The timer task never touches state.
//!
//! Timer handles are kept so that pending replies can be dropped when the
//! session ends instead of firing into a dead channel.

use std::time::Duration;

use log::{debug, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;
use tokio::time::{Instant, sleep_until};

use crate::core::action::Action;
use crate::core::chat::Message;

pub struct ResponseSimulator {
    delay: Duration,
    reply_text: String,
    pending: Vec<AbortHandle>,
}

impl ResponseSimulator {
    pub fn new(delay: Duration, reply_text: impl Into<String>) -> Self {
        Self {
            delay,
            reply_text: reply_text.into(),
            pending: Vec::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start one reply timer. Must be called from within a tokio runtime.
    ///
    /// The deadline is fixed here, at the moment the submit succeeded, not
    /// when the spawned task first gets polled.
    pub fn schedule(&mut self, tx: UnboundedSender<Action>) {
        self.pending.retain(|handle| !handle.is_finished());

        let deadline = Instant::now() + self.delay;
        let reply = Message::bot(self.reply_text.clone());
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            if tx.send(Action::BotReply(reply)).is_err() {
                warn!("Dropping simulated reply: receiver closed");
            }
        });

        self.pending.push(handle.abort_handle());
        debug!(
            "Scheduled simulated reply in {:?} ({} timers live)",
            self.delay,
            self.pending.len()
        );
    }

    /// Number of timers that have not fired yet.
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }

    /// Abort every timer that has not fired yet.
    pub fn cancel_all(&mut self) {
        let live = self.pending();
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        if live > 0 {
            debug!("Cancelled {} pending simulated replies", live);
        }
    }
}

impl Drop for ResponseSimulator {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    const DELAY: Duration = Duration::from_millis(1000);

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut simulator = ResponseSimulator::new(DELAY, "Einen Moment");
        let start = Instant::now();

        simulator.schedule(tx);

        match rx.recv().await {
            Some(Action::BotReply(message)) => {
                assert_eq!(message, Message::bot("Einen Moment"));
                assert!(message.wines.is_none());
            }
            other => panic!("expected BotReply, got {other:?}"),
        }
        assert!(start.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_arrives_early() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut simulator = ResponseSimulator::new(DELAY, "Einen Moment");
        simulator.schedule(tx);

        let early = timeout(DELAY - Duration::from_millis(1), rx.recv()).await;
        assert!(early.is_err(), "reply delivered before the delay elapsed");
        assert_eq!(simulator.pending(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn each_schedule_sends_one_reply() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut simulator = ResponseSimulator::new(DELAY, "ok");
        simulator.schedule(tx.clone());
        simulator.schedule(tx);

        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
        // Every sender is gone once both tasks have finished
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_all_drops_pending_replies() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut simulator = ResponseSimulator::new(DELAY, "ok");
        simulator.schedule(tx);
        simulator.cancel_all();

        assert_eq!(simulator.pending(), 0);
        // The aborted task drops its sender without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_simulator_cancels_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut simulator = ResponseSimulator::new(DELAY, "ok");
            simulator.schedule(tx);
        }
        assert!(rx.recv().await.is_none());
    }
}
