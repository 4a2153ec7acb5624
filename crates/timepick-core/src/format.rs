//! Display formatting for picker times.

use serde::{Deserialize, Serialize};

use crate::time::Time;

/// Default pattern for 12-hour display. The trailing `apm` carries both
/// markers; one of them is stripped per render.
pub const DEFAULT_FORMAT_12: &str = "H:M apm";

/// Default pattern for 24-hour display.
pub const DEFAULT_FORMAT_24: &str = "H:M";

/// Clock used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ClockMode {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
}

impl ClockMode {
    pub fn is_am_pm(&self) -> bool {
        matches!(self, ClockMode::TwelveHour)
    }
}

impl std::fmt::Display for ClockMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockMode::TwentyFourHour => write!(f, "24h"),
            ClockMode::TwelveHour => write!(f, "12h"),
        }
    }
}

/// Render `time` through `pattern`.
///
/// The first `H` becomes the hour and the first `M` the zero-padded minute.
/// In am/pm mode the hour is folded onto 1..=12 and the marker letter of the
/// opposite period (`p` before noon, `a` from noon on) is removed from the
/// pattern first, so `"H:M apm"` renders as `"9:30 am"` or `"1:00 pm"`.
pub fn format_time(time: Time, pattern: &str, am_pm: bool, pad_hour: bool) -> String {
    let mut pattern = pattern.to_string();
    let mut display_hour = time.hour;

    if am_pm {
        if time.hour > 12 {
            display_hour = time.hour - 12;
        } else if time.hour == 0 {
            display_hour = 12;
        }
        let opposite = if time.hour < 12 { 'p' } else { 'a' };
        if let Some(pos) = pattern.find(|c: char| c.to_ascii_lowercase() == opposite) {
            pattern.remove(pos);
        }
    }

    let hour = if pad_hour {
        format!("{display_hour:02}")
    } else {
        display_hour.to_string()
    };

    pattern
        .replacen('H', &hour, 1)
        .replacen('M', &format!("{:02}", time.minute), 1)
}
