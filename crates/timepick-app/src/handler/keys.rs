//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::PickerState;

/// Convert key events to messages based on the picker's phase
pub fn handle_key(state: &PickerState, key: InputKey) -> Option<Message> {
    if !state.is_open() {
        return None;
    }

    match key {
        // Both confirm and cancel just close; the value is already committed
        InputKey::Enter | InputKey::Esc => Some(Message::CloseRequested),

        InputKey::Up => Some(Message::NavigatePrevious),
        InputKey::Down => Some(Message::NavigateNext),

        // Caret movement and typing stay inside the field
        InputKey::Left | InputKey::Right | InputKey::Char(_) => None,
    }
}
