//! Picker state (the Model in TEA)

use serde::Serialize;
use timepick_core::Time;

use crate::config::Configuration;
use crate::event::{PickerEvent, TimeSnapshot};
use crate::slots::{self, Slot};

/// Lifecycle phase of one picker instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPhase {
    #[default]
    Closed,
    Open,
    /// Terminal: every further message is rejected
    Destroyed,
}

/// Which notification to queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Notification {
    Open,
    Close,
    Change,
}

/// Complete state of one picker instance.
///
/// `display_text` always equals the formatted `current_time`, or `""` when no
/// time is set. `input_text` mirrors what the host field should show; it only
/// differs from `display_text` while the user is typing or when rejected
/// input is flagged with the invalid marker.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Immutable after construction
    pub config: Configuration,

    pub phase: PickerPhase,

    pub current_time: Option<Time>,

    pub display_text: String,

    /// Host field mirror
    pub input_text: String,

    /// Cosmetic invalid-input marker
    pub invalid: bool,

    /// Slot surface, built on first open
    pub slots: Option<Vec<Slot>>,

    /// Bumped on every open/close/destroy; stale deferred messages carry an
    /// older value and are dropped
    pub generation: u64,

    /// Whether outside interactions are listened to
    pub outside_armed: bool,

    /// Set when construction failed; the instance ignores everything
    pub inert: bool,

    pending_events: Vec<PickerEvent>,
}

impl PickerState {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            phase: PickerPhase::Closed,
            current_time: None,
            display_text: String::new(),
            input_text: String::new(),
            invalid: false,
            slots: None,
            generation: 0,
            outside_armed: false,
            inert: false,
            pending_events: Vec::new(),
        }
    }

    /// State for a picker whose construction failed
    pub fn inert() -> Self {
        Self {
            inert: true,
            ..Self::new(Configuration::default())
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == PickerPhase::Open
    }

    pub fn is_destroyed(&self) -> bool {
        self.phase == PickerPhase::Destroyed
    }

    pub fn is_mounted(&self) -> bool {
        self.slots.is_some()
    }

    /// Build the slot surface unless it already exists
    pub(crate) fn mount(&mut self) {
        if self.slots.is_none() {
            self.slots = Some(slots::generate_slots(&self.config));
        }
    }

    pub(crate) fn unmount(&mut self) {
        self.slots = None;
    }

    pub(crate) fn bump_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Slot matching the current display text. Derived, never stored.
    pub fn highlighted_index(&self) -> Option<usize> {
        if self.current_time.is_none() {
            return None;
        }
        slots::position_of_label(self.slots.as_deref()?, &self.display_text)
    }

    pub fn snapshot(&self) -> TimeSnapshot {
        TimeSnapshot::new(self.current_time, self.display_text.clone())
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        let time = self.current_time;
        let display_text = self.display_text.clone();
        let event = match notification {
            Notification::Open => PickerEvent::Open { time, display_text },
            Notification::Close => PickerEvent::Close { time, display_text },
            Notification::Change => PickerEvent::Change { time, display_text },
        };
        self.pending_events.push(event);
    }

    /// Drain notifications queued by the last update
    pub fn take_events(&mut self) -> Vec<PickerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Renderable snapshot of the picker
    pub fn view(&self) -> PickerView {
        let is_open = self.is_open();
        PickerView {
            is_open,
            expanded: is_open,
            mounted: self.is_mounted(),
            title: self.config.title.clone(),
            large: self.config.large,
            slots: self.slots.clone().unwrap_or_default(),
            selected: self.highlighted_index(),
            input_text: self.input_text.clone(),
            invalid: self.invalid,
        }
    }
}

/// Data handed to the rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerView {
    pub is_open: bool,
    /// Expanded-state signal for the bound field
    pub expanded: bool,
    pub mounted: bool,
    pub title: String,
    pub large: bool,
    pub slots: Vec<Slot>,
    /// Index into `slots` of the highlighted entry
    pub selected: Option<usize>,
    pub input_text: String,
    pub invalid: bool,
}
