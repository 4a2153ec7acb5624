//! timepick-app - Picker state and orchestration for timepick
//!
//! This crate implements the TEA (The Elm Architecture) pattern for a single
//! time picker: validated configuration, constraint checks, slot generation,
//! the update function and the Engine that schedules deferred work and
//! broadcasts events to host collaborators.

pub mod actions;
pub mod config;
pub mod constraints;
pub mod engine;
pub mod event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod slots;
pub mod state;

// Re-export primary types
pub use config::{Configuration, PickerOptions};
pub use engine::{Engine, HostInput};
pub use event::{PickerEvent, TimeSnapshot};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{InteractionKind, InteractionTarget, Message};
pub use slots::Slot;
pub use state::{PickerPhase, PickerState, PickerView};
