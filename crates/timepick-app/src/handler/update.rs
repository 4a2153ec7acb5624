//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, trace};

use crate::message::{InteractionKind, InteractionTarget, Message};
use crate::slots::Direction;
use crate::state::{Notification, PickerPhase, PickerState};

use super::{
    keys::handle_key, navigation::navigate, time_entry, UpdateAction, UpdateResult, ARM_DELAY,
    CLOSE_DELAY,
};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut PickerState, message: Message) -> UpdateResult {
    if state.inert {
        trace!("Inert picker ignoring {}", message.label());
        return UpdateResult::none();
    }
    if state.is_destroyed() {
        debug!("Destroyed picker rejecting {}", message.label());
        return UpdateResult::none();
    }

    match message {
        Message::Focus | Message::InputClicked | Message::OpenRequested => open(state),

        Message::CloseRequested => close(state),

        Message::OutsideInteraction { target, kind } => handle_interaction(state, target, kind),

        Message::SlotActivated { index } => activate_slot(state, index),

        Message::TextChanged { text } | Message::SetTime { text } => {
            time_entry::set_time(state, &text);
            UpdateResult::none()
        }

        Message::InputEdited { text } => {
            time_entry::edit_input(state, &text);
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::NavigateNext => navigate(state, Direction::Forward),
        Message::NavigatePrevious => navigate(state, Direction::Backward),

        Message::DeferredClose { generation } => {
            if generation != state.generation {
                debug!("Dropping stale deferred close ({generation} != {})", state.generation);
                return UpdateResult::none();
            }
            close(state)
        }

        Message::OutsideListenerArmed { generation } => {
            if generation == state.generation && state.is_open() {
                state.outside_armed = true;
            }
            UpdateResult::none()
        }

        Message::Destroy => destroy(state),
    }
}

fn open(state: &mut PickerState) -> UpdateResult {
    if state.is_open() {
        return UpdateResult::none();
    }

    if !state.is_mounted() {
        state.mount();
        debug!(
            "Mounted slot surface with {} slots",
            state.slots.as_ref().map_or(0, Vec::len)
        );
    }

    state.phase = PickerPhase::Open;
    state.outside_armed = false;
    let generation = state.bump_generation();
    state.notify(Notification::Open);

    UpdateResult::action(UpdateAction::ArmOutsideListener {
        generation,
        delay: ARM_DELAY,
    })
}

fn close(state: &mut PickerState) -> UpdateResult {
    if !state.is_open() {
        return UpdateResult::none();
    }

    state.phase = PickerPhase::Closed;
    state.outside_armed = false;
    state.bump_generation();
    state.notify(Notification::Close);

    UpdateResult::action(UpdateAction::CancelDeferred)
}

fn handle_interaction(
    state: &mut PickerState,
    target: InteractionTarget,
    kind: InteractionKind,
) -> UpdateResult {
    if !state.is_open() {
        return UpdateResult::none();
    }
    if !state.outside_armed {
        trace!("Outside listener not armed yet, ignoring {:?}", kind);
        return UpdateResult::none();
    }
    if target.is_inside() {
        return UpdateResult::none();
    }

    debug!("Outside {:?} closes the picker", kind);
    close(state)
}

fn activate_slot(state: &mut PickerState, index: usize) -> UpdateResult {
    if !state.is_open() {
        return UpdateResult::none();
    }

    let label = match state.slots.as_deref().and_then(|slots| slots.get(index)) {
        Some(slot) if !slot.disabled => slot.label.clone(),
        Some(_) => {
            debug!("Ignoring activation of disabled slot {index}");
            return UpdateResult::none();
        }
        None => return UpdateResult::none(),
    };

    time_entry::set_time(state, &label);

    UpdateResult::action(UpdateAction::ScheduleClose {
        generation: state.generation,
        delay: CLOSE_DELAY,
    })
}

fn destroy(state: &mut PickerState) -> UpdateResult {
    // Emits the close notification if open
    let _ = close(state);

    state.unmount();
    state.phase = PickerPhase::Destroyed;
    state.outside_armed = false;
    state.bump_generation();
    debug!("Picker destroyed");

    UpdateResult::action(UpdateAction::CancelDeferred)
}
