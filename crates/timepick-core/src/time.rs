//! Structured time value and the free-form time text parser.
//!
//! The parser is deliberately forgiving: it accepts `10:30`, `1030`, `4.30 PM`,
//! `12:00am`, `11:00 foo` and similar input typed into a text field. It does not
//! range-check the result; `13:00pm` parses to hour 25 and it is up to the
//! constraint validator to reject it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Hour (1-2 digits), optional single non-digit separator, minute (exactly 2
/// digits), optional single non-word character, optional am/pm marker, then
/// anything.
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([0-9]{1,2})\D?([0-9]{2})\W?(a|p)?.*$")
        .expect("time pattern is a valid regex")
});

/// An hour/minute pair. Replaced wholesale, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
}

impl Time {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Outcome of parsing a piece of field text.
///
/// `Empty` and `Unrecognized` are kept apart because the picker treats them
/// differently: an emptied field may reset the time, garbage text only
/// reverts the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTime {
    /// Empty or whitespace-only text
    Empty,
    /// Text that does not look like a time
    Unrecognized,
    /// A recognized time, not yet validated
    Time(Time),
}

impl ParsedTime {
    pub fn time(self) -> Option<Time> {
        match self {
            ParsedTime::Time(time) => Some(time),
            ParsedTime::Empty | ParsedTime::Unrecognized => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ParsedTime::Empty)
    }
}

/// Parse free-form time text.
///
/// 12-hour markers convert the hour: `p` adds 12 unless the hour is 12, `a`
/// turns 12 into 0. Without a marker the hour is taken literally, so 24h
/// input works in 12h display mode too.
pub fn parse_time(text: &str) -> ParsedTime {
    if text.trim().is_empty() {
        return ParsedTime::Empty;
    }

    let Some(caps) = TIME_PATTERN.captures(text) else {
        return ParsedTime::Unrecognized;
    };

    // Both groups are 1-2 ASCII digits, so they always fit a u8
    let (Ok(mut hour), Ok(minute)) = (caps[1].parse::<u8>(), caps[2].parse::<u8>()) else {
        return ParsedTime::Unrecognized;
    };

    match caps.get(3).map(|m| m.as_str().to_ascii_lowercase()) {
        Some(marker) if marker == "p" && hour != 12 => hour += 12,
        Some(marker) if marker == "a" && hour == 12 => hour = 0,
        _ => {}
    }

    ParsedTime::Time(Time::new(hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> Option<(u8, u8)> {
        parse_time(text).time().map(|t| (t.hour, t.minute))
    }

    #[test]
    fn test_parse_accepts_flexible_input() {
        let cases = [
            (" 10:00AM", (10, 0)),
            (" 10:30 ", (10, 30)),
            ("11:00 foo", (11, 0)),
            ("12:00 pm", (12, 0)),
            ("1:00pm", (13, 0)),
            ("4:30 PM", (16, 30)),
            ("18:00", (18, 0)),
            ("12:00am", (0, 0)),
            ("7.15", (7, 15)),
            ("0930", (9, 30)),
        ];

        for (input, expected) in cases {
            assert_eq!(parsed(input), Some(expected), "input {input:?}");
        }
    }

    #[test]
    fn test_parse_single_letter_marker_is_enough() {
        assert_eq!(parsed("3:45p"), Some((15, 45)));
        assert_eq!(parsed("12:15A"), Some((0, 15)));
    }

    #[test]
    fn test_parse_am_leaves_morning_hours_alone() {
        assert_eq!(parsed("9:00 am"), Some((9, 0)));
        assert_eq!(parsed("12:30 PM"), Some((12, 30)));
    }

    #[test]
    fn test_parse_does_not_range_check() {
        assert_eq!(parsed("13:00pm"), Some((25, 0)));
        assert_eq!(parsed("10:75"), Some((10, 75)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["dh4kj6", "abc", "1:5", ":30", "noon"] {
            assert_eq!(parse_time(input), ParsedTime::Unrecognized, "input {input:?}");
        }
    }

    #[test]
    fn test_parse_empty_is_distinct_from_unrecognized() {
        assert_eq!(parse_time(""), ParsedTime::Empty);
        assert_eq!(parse_time("   "), ParsedTime::Empty);
        assert!(parse_time("\t").is_empty());
        assert!(!parse_time("x").is_empty());
    }

    #[test]
    fn test_time_display_is_zero_padded() {
        assert_eq!(Time::new(7, 5).to_string(), "07:05");
        assert_eq!(Time::new(18, 30).to_string(), "18:30");
    }

    #[test]
    fn test_time_ordering_follows_the_clock() {
        assert!(Time::new(9, 30) < Time::new(10, 0));
        assert!(Time::new(10, 0) < Time::new(10, 15));
    }
}
