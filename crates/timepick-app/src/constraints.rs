//! Constraint validation for hour/minute pairs.
//!
//! The same check drives manual entry, slot generation and keyboard
//! navigation, so a slot is disabled exactly when typing its label would be
//! rejected.

use crate::config::Configuration;

/// The first rule an hour/minute pair failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Below the min hour, above the max hour or past 23
    OutOfRange,
    /// On the max hour but past minute 0
    PastMaxHour,
    /// Minute not on the interval grid
    OffGrid,
    /// Explicitly disabled
    Disabled,
}

/// Check the rules in order; the first failing rule wins.
pub fn check(hour: u8, minute: u8, config: &Configuration) -> Result<(), Violation> {
    if hour < config.min_hour || hour > config.max_hour || hour > 23 {
        return Err(Violation::OutOfRange);
    }
    if hour == config.max_hour && minute > 0 {
        return Err(Violation::PastMaxHour);
    }
    if !config.grid().contains(minute) {
        return Err(Violation::OffGrid);
    }
    if config
        .disabled_times
        .iter()
        .any(|t| t.hour == hour && t.minute == minute)
    {
        return Err(Violation::Disabled);
    }
    Ok(())
}

pub fn is_valid(hour: u8, minute: u8, config: &Configuration) -> bool {
    check(hour, minute, config).is_ok()
}
