//! Notifications emitted by a picker for host collaborators
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`, the way a DOM control would dispatch custom
//! `open` / `close` / `change` events on its input.

use serde::Serialize;
use timepick_core::Time;

/// Current value as reported to hosts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TimeSnapshot {
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub display_text: String,
}

impl TimeSnapshot {
    pub fn new(time: Option<Time>, display_text: impl Into<String>) -> Self {
        Self {
            hour: time.map(|t| t.hour),
            minute: time.map(|t| t.minute),
            display_text: display_text.into(),
        }
    }

    pub fn time(&self) -> Option<Time> {
        match (self.hour, self.minute) {
            (Some(hour), Some(minute)) => Some(Time::new(hour, minute)),
            _ => None,
        }
    }
}

/// Notification emitted by a picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The picker opened
    Open {
        time: Option<Time>,
        display_text: String,
    },
    /// The picker closed
    Close {
        time: Option<Time>,
        display_text: String,
    },
    /// A time was set or reset
    Change {
        time: Option<Time>,
        display_text: String,
    },
}

impl PickerEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Close { .. } => "close",
            Self::Change { .. } => "change",
        }
    }

    pub fn time(&self) -> Option<Time> {
        match self {
            Self::Open { time, .. } | Self::Close { time, .. } | Self::Change { time, .. } => *time,
        }
    }

    pub fn display_text(&self) -> &str {
        match self {
            Self::Open { display_text, .. }
            | Self::Close { display_text, .. }
            | Self::Change { display_text, .. } => display_text,
        }
    }

    pub fn snapshot(&self) -> TimeSnapshot {
        TimeSnapshot::new(self.time(), self.display_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels() {
        let event = PickerEvent::Change {
            time: Some(Time::new(13, 0)),
            display_text: "1:00 pm".to_string(),
        };
        assert_eq!(event.event_type(), "change");
        assert_eq!(event.time(), Some(Time::new(13, 0)));
        assert_eq!(event.display_text(), "1:00 pm");
    }

    #[test]
    fn test_snapshot_of_absent_time() {
        let snapshot = TimeSnapshot::new(None, "");
        assert_eq!(snapshot.hour, None);
        assert_eq!(snapshot.time(), None);
        assert_eq!(snapshot, TimeSnapshot::default());
    }

    #[test]
    fn test_snapshot_serializes_flat() {
        let snapshot = TimeSnapshot::new(Some(Time::new(9, 30)), "9:30");
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["hour"], 9);
        assert_eq!(json["minute"], 30);
        assert_eq!(json["display_text"], "9:30");
    }
}
