use std::sync::Arc;
use std::time::Duration;

use sommelier::core::chat::Sender;
use sommelier::core::content::{CellarSlot, Content};
use sommelier::core::render::ViewBody;
use sommelier::core::simulator::ResponseSimulator;
use sommelier::{Action, Effect, Session, Tab};
use tokio::time::{Instant, timeout};

// ============================================================================
// Helper Functions
// ============================================================================

const DELAY: Duration = Duration::from_millis(1000);
const REPLY: &str = "Danke, ich schaue nach.";

fn session_with(content: Content) -> Session {
    Session::new(Arc::new(content), ResponseSimulator::new(DELAY, REPLY))
}

fn session() -> Session {
    session_with(Content::default())
}

fn submit(session: &mut Session, text: &str) -> Effect {
    session.dispatch(Action::SetDraft(text.to_string()));
    session.dispatch(Action::SubmitDraft)
}

fn message_count(session: &Session) -> usize {
    session.app().chat.messages().len()
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_fresh_session_shows_seed_chat() {
    let session = session();
    assert_eq!(session.app().view.active_tab(), Tab::Chat);

    let tree = session.view();
    let ViewBody::Chat(chat) = tree.body else {
        panic!("expected chat body");
    };
    let senders: Vec<_> = chat.messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, [Sender::Bot, Sender::User, Sender::Bot]);
    assert_eq!(chat.messages[2].wines.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_tab_sequence_ends_on_last_selection() {
    let mut session = session();
    for tab in [Tab::Cellar, Tab::Profile, Tab::Profile, Tab::Chat, Tab::Cellar] {
        session.dispatch(Action::SelectTab(tab));
    }
    assert_eq!(session.app().view.active_tab(), Tab::Cellar);
    assert!(matches!(session.view().body, ViewBody::Cellar(_)));
}

// ============================================================================
// Submitting and simulated replies
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_submit_then_reply_after_delay() {
    let mut session = session();
    let start = Instant::now();

    assert_eq!(
        submit(&mut session, "Empfehlen Sie mir einen Weißwein"),
        Effect::ScheduleReply
    );
    assert_eq!(session.app().chat.draft(), "");
    assert_eq!(message_count(&session), 4);

    session.next_reply().await;
    assert!(start.elapsed() >= DELAY);

    let messages = session.app().chat.messages();
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[3].sender, Sender::User);
    assert_eq!(messages[3].text, "Empfehlen Sie mir einen Weißwein");
    assert_eq!(messages[4].sender, Sender::Bot);
    assert_eq!(messages[4].text, REPLY);
}

#[tokio::test(start_paused = true)]
async fn test_whitespace_submit_is_ignored() {
    let mut session = session();
    assert_eq!(submit(&mut session, "   "), Effect::None);
    assert_eq!(session.app().chat.draft(), "   ");
    assert_eq!(message_count(&session), 3);
    assert!(timeout(DELAY * 2, session.next_reply()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_sends_get_one_reply_each() {
    let mut session = session();
    submit(&mut session, "Rot oder Weiß?");
    tokio::time::sleep(Duration::from_millis(200)).await;
    submit(&mut session, "Und zum Dessert?");

    session.next_reply().await;
    session.next_reply().await;

    let tail: Vec<_> = session.app().chat.messages()[3..]
        .iter()
        .map(|m| (m.sender, m.text.as_str()))
        .collect();
    assert_eq!(
        tail,
        [
            (Sender::User, "Rot oder Weiß?"),
            (Sender::User, "Und zum Dessert?"),
            (Sender::Bot, REPLY),
            (Sender::Bot, REPLY),
        ]
    );
    assert!(timeout(DELAY * 2, session.next_reply()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_reply_lands_while_another_tab_is_active() {
    let mut session = session();
    submit(&mut session, "Hallo");
    session.dispatch(Action::SelectTab(Tab::Profile));

    session.next_reply().await;
    assert_eq!(message_count(&session), 5);
    assert!(matches!(session.view().body, ViewBody::Profile(_)));

    session.dispatch(Action::SelectTab(Tab::Chat));
    let ViewBody::Chat(chat) = session.view().body else {
        panic!("expected chat body");
    };
    assert_eq!(chat.messages.last().map(|m| m.text), Some(REPLY));
}

// ============================================================================
// Injected content
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_injected_cellar_drives_summary() {
    let pattern = [true, true, false, true, false, true, false, true, false];
    let content = Content {
        cellar: pattern
            .iter()
            .map(|&filled| CellarSlot {
                filled,
                ..Default::default()
            })
            .collect(),
        ..Content::default()
    };
    let mut session = session_with(content);
    session.dispatch(Action::SelectTab(Tab::Cellar));

    let ViewBody::Cellar(cellar) = session.view().body else {
        panic!("expected cellar body");
    };
    assert_eq!(cellar.summary.filled, 5);
    assert_eq!(cellar.summary.empty, 4);
    assert_eq!(cellar.summary.filled + cellar.summary.empty, cellar.slots.len());
}
