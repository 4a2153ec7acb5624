//! Keyboard navigation through the slot list

use tracing::debug;

use super::time_entry::set_time;
use super::UpdateResult;
use crate::slots::{first_enabled, next_enabled, Direction};
use crate::state::PickerState;

/// Move the highlight one enabled slot in `direction` and commit it.
///
/// Without a highlighted slot both directions jump to the first enabled
/// slot. At either end of the enabled slots nothing moves.
pub(crate) fn navigate(state: &mut PickerState, direction: Direction) -> UpdateResult {
    if !state.is_open() {
        return UpdateResult::none();
    }

    let current = state.highlighted_index();
    let Some(slots) = state.slots.as_deref() else {
        return UpdateResult::none();
    };

    let target = match current {
        Some(index) => next_enabled(slots, index, direction),
        None => first_enabled(slots),
    };

    let Some(index) = target else {
        debug!("No enabled slot {:?} of {:?}", direction, current);
        return UpdateResult::none();
    };

    let label = slots[index].label.clone();
    set_time(state, &label);
    UpdateResult::none()
}
