//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event mapping
//! - `time_entry`: The set-time operation shared by several transitions
//! - `navigation`: Keyboard navigation through the slot list

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod time_entry;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Delay between a slot activation and the close it causes
pub const CLOSE_DELAY: Duration = Duration::from_millis(100);

/// Delay between an open and listening for outside interactions, so the
/// event that opened the picker cannot close it again
pub const ARM_DELAY: Duration = Duration::from_millis(100);

/// Kinds of deferred work; at most one of each is pending per picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredKind {
    Close,
    ArmOutsideListener,
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Deliver `DeferredClose { generation }` after `delay`
    ScheduleClose { generation: u64, delay: Duration },

    /// Deliver `OutsideListenerArmed { generation }` after `delay`
    ArmOutsideListener { generation: u64, delay: Duration },

    /// Abort every pending deferred task
    CancelDeferred,
}

impl UpdateAction {
    /// The message this action delivers later, if it schedules one
    pub fn deferred(&self) -> Option<(DeferredKind, Duration, Message)> {
        match *self {
            UpdateAction::ScheduleClose { generation, delay } => Some((
                DeferredKind::Close,
                delay,
                Message::DeferredClose { generation },
            )),
            UpdateAction::ArmOutsideListener { generation, delay } => Some((
                DeferredKind::ArmOutsideListener,
                delay,
                Message::OutsideListenerArmed { generation },
            )),
            UpdateAction::CancelDeferred => None,
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
