//! Action handlers: UpdateAction dispatch and deferred task spawning

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use crate::handler::{DeferredKind, UpdateAction};
use crate::message::Message;

/// Pending deferred deliveries, at most one per kind
#[derive(Debug, Default)]
pub struct DeferredTasks {
    tasks: HashMap<DeferredKind, JoinHandle<()>>,
}

impl DeferredTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `handle` as the task for `kind`, aborting the one it replaces
    pub fn replace(&mut self, kind: DeferredKind, handle: JoinHandle<()>) {
        if let Some(previous) = self.tasks.insert(kind, handle) {
            previous.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for (kind, handle) in self.tasks.drain() {
            trace!("Aborting deferred {:?}", kind);
            handle.abort();
        }
    }

    /// Whether any deferred delivery has not fired yet
    pub fn has_pending(&self) -> bool {
        self.tasks.values().any(|handle| !handle.is_finished())
    }

    /// Forget finished tasks
    pub fn prune(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }
}

impl Drop for DeferredTasks {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Execute an action, spawning a timer task for deferred deliveries
pub fn handle_action(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    deferred: &mut DeferredTasks,
) {
    if let UpdateAction::CancelDeferred = action {
        deferred.abort_all();
        return;
    }

    let Some((kind, delay, message)) = action.deferred() else {
        return;
    };

    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            let join = handle.spawn(deliver_after(delay, message, msg_tx.clone()));
            deferred.replace(kind, join);
        }
        Err(_) => {
            // No runtime to time against: queue it behind the current dispatch
            warn!("No async runtime, delivering deferred {:?} without delay", kind);
            if let Err(e) = msg_tx.try_send(message) {
                warn!("Failed to queue deferred {:?}: {}", kind, e);
            }
        }
    }
}

async fn deliver_after(delay: Duration, message: Message, msg_tx: mpsc::Sender<Message>) {
    tokio::time::sleep(delay).await;
    // Receiver gone means the engine was dropped
    let _ = msg_tx.send(message).await;
}
