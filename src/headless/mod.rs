//! Headless mode - NDJSON commands in, NDJSON events out
//!
//! A host without a DOM drives the picker over stdin and reads its
//! notifications from stdout. This keeps end-to-end tests free of any
//! rendering layer.
//!
//! # Command Format
//!
//! One JSON object per line, tagged by `cmd`:
//!
//! ```json
//! {"cmd":"focus"}
//! {"cmd":"key","key":"down"}
//! {"cmd":"click","target":"outside"}
//! ```
//!
//! # Event Format
//!
//! One JSON object per line, tagged by `event`:
//!
//! ```json
//! {"event":"open","hour":null,"minute":null,"display_text":"","timestamp":1704700001000}
//! {"event":"change","hour":9,"minute":0,"display_text":"9:00 am","timestamp":1704700002000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::error;

use timepick_app::{
    InputKey, InteractionKind, InteractionTarget, Message, PickerEvent, PickerView, TimeSnapshot,
};
use timepick_core::prelude::*;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The picker opened
    Open {
        hour: Option<u8>,
        minute: Option<u8>,
        display_text: String,
        timestamp: i64,
    },

    /// The picker closed
    Close {
        hour: Option<u8>,
        minute: Option<u8>,
        display_text: String,
        timestamp: i64,
    },

    /// A time was set or reset
    Change {
        hour: Option<u8>,
        minute: Option<u8>,
        display_text: String,
        timestamp: i64,
    },

    /// Reply to `get`
    Time {
        hour: Option<u8>,
        minute: Option<u8>,
        display_text: String,
        timestamp: i64,
    },

    /// Reply to `render`
    View { view: PickerView, timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        /// Set when the session cannot continue
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.emit_to(&mut stdout);
    }

    /// Write this event as one NDJSON line
    pub fn emit_to(&self, out: &mut impl Write) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Short label for this event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Close { .. } => "close",
            Self::Change { .. } => "change",
            Self::Time { .. } => "time",
            Self::View { .. } => "view",
            Self::Error { .. } => "error",
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn from_picker_event(event: &PickerEvent) -> Self {
        let TimeSnapshot {
            hour,
            minute,
            display_text,
        } = event.snapshot();
        let timestamp = Self::now();
        match event {
            PickerEvent::Open { .. } => Self::Open {
                hour,
                minute,
                display_text,
                timestamp,
            },
            PickerEvent::Close { .. } => Self::Close {
                hour,
                minute,
                display_text,
                timestamp,
            },
            PickerEvent::Change { .. } => Self::Change {
                hour,
                minute,
                display_text,
                timestamp,
            },
        }
    }

    pub fn time(snapshot: TimeSnapshot) -> Self {
        Self::Time {
            hour: snapshot.hour,
            minute: snapshot.minute,
            display_text: snapshot.display_text,
            timestamp: Self::now(),
        }
    }

    pub fn view(view: PickerView) -> Self {
        Self::View {
            view,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Report an error; unrecoverable ones are flagged fatal
    pub fn from_error(err: &Error) -> Self {
        Self::error(err.to_string(), !err.is_recoverable())
    }
}

/// Commands accepted on stdin
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum HeadlessCommand {
    /// Focus moved to `target` (the bound input by default)
    Focus {
        #[serde(default = "bound_input")]
        target: InteractionTarget,
    },

    /// Pointer click on `target` (outside the control by default)
    Click {
        #[serde(default = "outside")]
        target: InteractionTarget,
    },

    /// Key press while the input has focus
    Key { key: String },

    /// Typing in the field, not yet committed
    Edit { text: String },

    /// Committed field change
    Change { text: String },

    /// Activate the slot at `index`
    Select { index: usize },

    Open,
    Close,
    Get,
    Render,
    Destroy,
    Quit,
}

fn bound_input() -> InteractionTarget {
    InteractionTarget::BoundInput
}

fn outside() -> InteractionTarget {
    InteractionTarget::Outside
}

/// What the runner does with a parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Feed a message to the engine
    Deliver(Message),
    /// Reply with the current time
    Get,
    /// Reply with the current view
    Render,
    Quit,
}

impl HeadlessCommand {
    /// Parse one input line. Bare `q`/`quit` are accepted as shorthands.
    pub fn parse(line: &str) -> Result<Self> {
        match line.trim() {
            "q" | "quit" => Ok(Self::Quit),
            trimmed => Ok(serde_json::from_str(trimmed)?),
        }
    }

    pub fn into_request(self) -> Result<Request> {
        let msg = match self {
            Self::Focus {
                target: InteractionTarget::BoundInput,
            } => Message::Focus,
            Self::Focus { target } => Message::OutsideInteraction {
                target,
                kind: InteractionKind::Focus,
            },
            Self::Click {
                target: InteractionTarget::BoundInput,
            } => Message::InputClicked,
            Self::Click { target } => Message::OutsideInteraction {
                target,
                kind: InteractionKind::Click,
            },
            Self::Key { key } => match InputKey::from_name(&key) {
                Some(key) => Message::Key(key),
                None => return Err(Error::invalid_command(format!("unknown key {key:?}"))),
            },
            Self::Edit { text } => Message::InputEdited { text },
            Self::Change { text } => Message::TextChanged { text },
            Self::Select { index } => Message::SlotActivated { index },
            Self::Open => Message::OpenRequested,
            Self::Close => Message::CloseRequested,
            Self::Destroy => Message::Destroy,
            Self::Get => return Ok(Request::Get),
            Self::Render => return Ok(Request::Render),
            Self::Quit => return Ok(Request::Quit),
        };
        Ok(Request::Deliver(msg))
    }
}
