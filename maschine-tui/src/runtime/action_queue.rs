use crate::search::SearchOutcome;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work finished off the event loop, delivered back to it.
#[derive(Debug, Clone)]
pub(super) enum Action {
    SearchCompleted { seq: u64, outcome: SearchOutcome },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
