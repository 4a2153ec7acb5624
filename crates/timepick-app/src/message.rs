//! Message types for the picker (TEA pattern)

use serde::Deserialize;

use crate::input_key::InputKey;

/// Where an interaction landed, relative to the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionTarget {
    /// The bound text field itself
    #[serde(alias = "input")]
    BoundInput,
    /// Anywhere inside the slot surface
    #[serde(alias = "picker")]
    PickerSurface,
    /// Anywhere else in the document
    Outside,
}

impl InteractionTarget {
    /// Interactions on the field or the slot surface never close the picker
    pub fn is_inside(&self) -> bool {
        !matches!(self, InteractionTarget::Outside)
    }
}

/// How the interaction arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    #[default]
    Click,
    /// Focus moved, usually by Tab
    Focus,
}

/// All possible messages/actions for one picker instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Host Events
    // ─────────────────────────────────────────────────────────
    /// The bound field received focus
    Focus,
    /// The bound field was clicked (re-opens a closed picker that kept focus)
    InputClicked,
    /// A click or focus change somewhere in the document
    OutsideInteraction {
        target: InteractionTarget,
        kind: InteractionKind,
    },
    /// A slot was clicked or confirmed
    SlotActivated { index: usize },
    /// The field's value was changed externally (host `change` event)
    TextChanged { text: String },
    /// A keystroke edited the field; carries the field's current text
    InputEdited { text: String },
    /// Key released in the field or the slot list
    Key(InputKey),

    // ─────────────────────────────────────────────────────────
    // Public Operations
    // ─────────────────────────────────────────────────────────
    /// Programmatic open
    OpenRequested,
    /// Programmatic close
    CloseRequested,
    /// Programmatic set-time
    SetTime { text: String },
    /// Tear the instance down
    Destroy,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Highlight and commit the next enabled slot
    NavigateNext,
    /// Highlight and commit the previous enabled slot
    NavigatePrevious,

    // ─────────────────────────────────────────────────────────
    // Deferred Actions (sent back by the scheduler)
    // ─────────────────────────────────────────────────────────
    /// Close scheduled after a slot activation
    DeferredClose { generation: u64 },
    /// Start listening for outside interactions after an open
    OutsideListenerArmed { generation: u64 },
}

impl Message {
    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::InputClicked => "input_clicked",
            Self::OutsideInteraction { .. } => "outside_interaction",
            Self::SlotActivated { .. } => "slot_activated",
            Self::TextChanged { .. } => "text_changed",
            Self::InputEdited { .. } => "input_edited",
            Self::Key(_) => "key",
            Self::OpenRequested => "open_requested",
            Self::CloseRequested => "close_requested",
            Self::SetTime { .. } => "set_time",
            Self::Destroy => "destroy",
            Self::NavigateNext => "navigate_next",
            Self::NavigatePrevious => "navigate_previous",
            Self::DeferredClose { .. } => "deferred_close",
            Self::OutsideListenerArmed { .. } => "outside_listener_armed",
        }
    }
}
