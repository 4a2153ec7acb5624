//! Engine - owns one picker instance and its event loop plumbing
//!
//! The Engine wraps the TEA state with the message channel, the deferred task
//! map and the event broadcaster. Hosts drive it either synchronously
//! (`open()`, `set_time()`, `send()`) or by pumping `next_message()` while
//! deferred tasks deliver through `msg_tx`.

use std::time::Duration;

use timepick_core::prelude::*;
use tokio::sync::{broadcast, mpsc};

use crate::actions::{handle_action, DeferredTasks};
use crate::config::{Configuration, PickerOptions};
use crate::event::{PickerEvent, TimeSnapshot};
use crate::handler;
use crate::message::Message;
use crate::state::{PickerState, PickerView};

/// Upper bound on waiting for a single deferred delivery in `settle()`
const SETTLE_TIMEOUT: Duration = Duration::from_secs(1);

/// A text field the picker binds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInput {
    pub id: String,
    /// Initial field value
    pub value: String,
}

impl HostInput {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Orchestration engine for a single picker.
///
/// Operations never fail. A picker whose construction failed is inert and
/// silently ignores everything.
pub struct Engine {
    /// TEA picker state (the Model)
    pub state: PickerState,

    /// Sender half of the message channel. Deferred tasks and async host
    /// sources deliver through clones of it.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel
    pub msg_rx: mpsc::Receiver<Message>,

    deferred: DeferredTasks,

    event_tx: broadcast::Sender<PickerEvent>,

    host_id: Option<String>,
}

impl Engine {
    /// Bind a picker to exactly one host input.
    ///
    /// Zero or several hosts, or an unusable interval, log a warning and yield
    /// an inert engine. The host's current value is applied as the initial
    /// time.
    pub fn create(hosts: &[HostInput], options: PickerOptions) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        let (state, host) = match Self::bind(hosts, &options) {
            Ok((config, host)) => (PickerState::new(config), Some(host)),
            Err(e) if e.is_configuration() => {
                warn!("Picker disabled: {}", e);
                (PickerState::inert(), None)
            }
            Err(e) => {
                error!("Picker disabled by unexpected error: {}", e);
                (PickerState::inert(), None)
            }
        };

        let mut engine = Self {
            state,
            msg_tx,
            msg_rx,
            deferred: DeferredTasks::new(),
            event_tx,
            host_id: host.map(|h| h.id.clone()),
        };

        if let Some(host) = host {
            debug!("Picker bound to {:?}", host.id);
            engine.process_message(Message::TextChanged {
                text: host.value.clone(),
            });
        }

        engine
    }

    fn bind<'a>(
        hosts: &'a [HostInput],
        options: &PickerOptions,
    ) -> Result<(Configuration, &'a HostInput)> {
        let host = match hosts {
            [] => return Err(Error::NoHost),
            [host] => host,
            _ => return Err(Error::MultipleHosts { count: hosts.len() }),
        };
        let config = Configuration::from_options(options)?;
        Ok((config, host))
    }

    pub fn is_inert(&self) -> bool {
        self.state.inert
    }

    /// Id of the bound host input, `None` when inert
    pub fn host_id(&self) -> Option<&str> {
        self.host_id.as_deref()
    }

    /// Subscribe to picker events.
    ///
    /// Events queued by one processing cycle are broadcast together once the
    /// cycle completes. Slow subscribers see `RecvError::Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<PickerEvent> {
        self.event_tx.subscribe()
    }

    /// Deliver a host event
    pub fn send(&mut self, msg: Message) {
        self.process_message(msg);
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Follow-up messages run to completion within the same call. Actions are
    /// dispatched as they are returned, then queued notifications are
    /// broadcast.
    pub fn process_message(&mut self, msg: Message) {
        trace!("Processing {}", msg.label());

        let mut next = Some(msg);
        while let Some(m) = next {
            let result = handler::update(&mut self.state, m);
            if let Some(action) = result.action {
                handle_action(action, &self.msg_tx, &mut self.deferred);
            }
            next = result.message;
        }

        for event in self.state.take_events() {
            debug!("Emitting {} ({:?})", event.event_type(), event.display_text());
            // Err only means there are no subscribers
            let _ = self.event_tx.send(event);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next queued message.
    ///
    /// The engine holds a sender itself, so this only resolves with `None`
    /// if that invariant is broken.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Process messages until no deferred delivery is outstanding.
    ///
    /// Returns the number of messages processed.
    pub async fn settle(&mut self) -> usize {
        let mut count = 0;
        loop {
            count += self.drain_pending_messages();
            self.deferred.prune();
            if !self.deferred.has_pending() {
                // A task that just finished has already queued its message
                count += self.drain_pending_messages();
                return count;
            }

            match tokio::time::timeout(SETTLE_TIMEOUT, self.msg_rx.recv()).await {
                Ok(Some(msg)) => {
                    self.process_message(msg);
                    count += 1;
                }
                Ok(None) => return count,
                Err(_) => {
                    warn!("Deferred delivery did not arrive within {:?}", SETTLE_TIMEOUT);
                    return count;
                }
            }
        }
    }

    pub fn open(&mut self) {
        self.process_message(Message::OpenRequested);
    }

    pub fn close(&mut self) {
        self.process_message(Message::CloseRequested);
    }

    /// Apply text as if the host field changed
    pub fn set_time(&mut self, text: &str) {
        self.process_message(Message::SetTime {
            text: text.to_string(),
        });
    }

    pub fn get_time(&self) -> TimeSnapshot {
        self.state.snapshot()
    }

    /// Renderable snapshot; calling it twice yields equal views
    pub fn render(&self) -> PickerView {
        self.state.view()
    }

    /// Tear down the picker. Further operations are no-ops.
    pub fn destroy(&mut self) {
        self.process_message(Message::Destroy);
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.is_destroyed()
    }
}
