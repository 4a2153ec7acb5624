//! The set-time operation and live validation of typed text

use timepick_core::{parse_time, ParsedTime};
use tracing::debug;

use crate::constraints;
use crate::state::{Notification, PickerState};

/// Apply raw field text to the picker.
///
/// - empty text resets the time when `allow_reset` is set, otherwise the field
///   reverts to the last valid display text
/// - a valid time replaces the current one and is echoed back formatted
/// - a recognized but rejected time raises the invalid marker when
///   `mark_invalid` is set, otherwise the field reverts
/// - unrecognized text reverts the field
pub(crate) fn set_time(state: &mut PickerState, raw: &str) {
    match parse_time(raw) {
        ParsedTime::Empty if state.config.allow_reset => {
            debug!("Time reset");
            state.current_time = None;
            state.display_text.clear();
            state.input_text.clear();
            state.invalid = false;
            state.notify(Notification::Change);
        }
        ParsedTime::Time(time) => match constraints::check(time.hour, time.minute, &state.config) {
            Ok(()) => {
                state.current_time = Some(time);
                state.display_text = state.config.format(time);
                state.input_text = state.display_text.clone();
                state.invalid = false;
                debug!("Time set to {} ({:?})", time, state.display_text);
                state.notify(Notification::Change);
            }
            Err(violation) if state.config.mark_invalid => {
                debug!("Rejected {} ({:?}), marking input invalid", time, violation);
                state.input_text = raw.to_string();
                state.invalid = true;
            }
            Err(violation) => {
                debug!("Rejected {} ({:?}), reverting input", time, violation);
                state.input_text = state.display_text.clone();
            }
        },
        ParsedTime::Empty | ParsedTime::Unrecognized => {
            debug!("Reverting input {:?} to {:?}", raw, state.display_text);
            state.input_text = state.display_text.clone();
            state.invalid = false;
        }
    }
}

/// Mirror typed text and refresh the invalid marker without committing.
///
/// Only active with `mark_invalid`; otherwise typing is left alone until the
/// host reports a change.
pub(crate) fn edit_input(state: &mut PickerState, text: &str) {
    state.input_text = text.to_string();
    if !state.config.mark_invalid {
        return;
    }

    state.invalid = match parse_time(text) {
        ParsedTime::Time(time) => !constraints::is_valid(time.hour, time.minute, &state.config),
        ParsedTime::Empty => !state.config.allow_reset,
        ParsedTime::Unrecognized => true,
    };
}
