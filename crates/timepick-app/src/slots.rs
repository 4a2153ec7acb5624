//! Slot list generation and navigation over it.

use serde::Serialize;
use timepick_core::Time;

use crate::config::Configuration;
use crate::constraints;

/// One selectable entry in the rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub time: Time,
    pub label: String,
    pub disabled: bool,
}

/// Direction for keyboard navigation through the slot list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Every slot in the display window, hour ascending then minute ascending.
///
/// Covers `[start_hour, end_hour)` crossed with the interval grid. The result
/// depends on the configuration only, so it may be cached or rebuilt freely.
pub fn generate_slots(config: &Configuration) -> Vec<Slot> {
    let minutes = config.grid().minutes();
    let mut slots = Vec::with_capacity(
        usize::from(config.end_hour.saturating_sub(config.start_hour)) * minutes.len(),
    );

    for hour in config.start_hour..config.end_hour {
        for &minute in minutes {
            let time = Time::new(hour, minute);
            slots.push(Slot {
                time,
                label: config.format(time),
                disabled: !constraints::is_valid(hour, minute, config),
            });
        }
    }

    slots
}

/// First enabled slot, if any
pub fn first_enabled(slots: &[Slot]) -> Option<usize> {
    slots.iter().position(|slot| !slot.disabled)
}

/// Next enabled slot from `from` in `direction`, skipping disabled ones.
///
/// Returns `None` past the first/last enabled slot; callers keep the current
/// selection in that case instead of wrapping.
pub fn next_enabled(slots: &[Slot], from: usize, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Forward => slots
            .iter()
            .enumerate()
            .skip(from.saturating_add(1))
            .find(|(_, slot)| !slot.disabled)
            .map(|(i, _)| i),
        Direction::Backward => slots
            .iter()
            .enumerate()
            .take(from.min(slots.len()))
            .rev()
            .find(|(_, slot)| !slot.disabled)
            .map(|(i, _)| i),
    }
}

/// Index of the slot whose label equals `label`
pub fn position_of_label(slots: &[Slot], label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    slots.iter().position(|slot| slot.label == label)
}
