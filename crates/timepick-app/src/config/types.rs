//! Configuration types for the picker
//!
//! Defines:
//! - `PickerOptions` - The raw option set as written by a host (TOML/JSON)
//! - `Configuration` - The validated, immutable record a picker runs with
//! - `IntervalGrid` - Minute offsets derived from the interval

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use timepick_core::prelude::*;
use timepick_core::{format_time, parse_time, ClockMode, ParsedTime, Time};
use timepick_core::{DEFAULT_FORMAT_12, DEFAULT_FORMAT_24};

/// Largest accepted interval in minutes
pub const MAX_INTERVAL: u32 = 60;

/// Picker options as supplied by the host.
///
/// Every field is optional in the source document; missing fields take the
/// documented defaults. camelCase aliases are accepted for hosts that write
/// JSON the way browser code does.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PickerOptions {
    /// Appointment interval in minutes
    #[serde(default = "default_interval")]
    pub interval: u32,

    /// Min pickable hour
    #[serde(default, alias = "minTime")]
    pub min_time: u8,

    /// Max pickable hour (only minute 0 of it is pickable)
    #[serde(default = "default_hour_limit", alias = "maxTime")]
    pub max_time: u8,

    /// First displayed hour
    #[serde(default, alias = "startTime")]
    pub start_time: u8,

    /// Displayed hours end before this one
    #[serde(default = "default_hour_limit", alias = "endTime")]
    pub end_time: u8,

    /// Disabled times as free-form text, e.g. `["10:30", "1:30 pm"]`
    #[serde(default)]
    pub disabled: Vec<String>,

    /// 24h or 12h display
    #[serde(default)]
    pub mode: ClockMode,

    /// Large button style, passed through to the renderer
    #[serde(default)]
    pub large: bool,

    /// Zero pad the hour (07:15)
    #[serde(default, alias = "leadingZero")]
    pub leading_zero: bool,

    /// Whether an entered time can be cleared again
    #[serde(default = "default_true", alias = "allowReset")]
    pub allow_reset: bool,

    /// Title handed to the renderer
    #[serde(default = "default_title")]
    pub title: String,

    /// Flag rejected input with an invalid marker instead of reverting it
    #[serde(default, alias = "markInvalid")]
    pub mark_invalid: bool,

    /// 12h display pattern, must contain `H` and `M`
    #[serde(default = "default_format_12", alias = "timeFormat12")]
    pub time_format_12: String,

    /// 24h display pattern, must contain `H` and `M`
    #[serde(default = "default_format_24", alias = "timeFormat24")]
    pub time_format_24: String,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            min_time: 0,
            max_time: default_hour_limit(),
            start_time: 0,
            end_time: default_hour_limit(),
            disabled: Vec::new(),
            mode: ClockMode::default(),
            large: false,
            leading_zero: false,
            allow_reset: true,
            title: default_title(),
            mark_invalid: false,
            time_format_12: default_format_12(),
            time_format_24: default_format_24(),
        }
    }
}

fn default_interval() -> u32 {
    60
}

fn default_hour_limit() -> u8 {
    24
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Timepicker".to_string()
}

fn default_format_12() -> String {
    DEFAULT_FORMAT_12.to_string()
}

fn default_format_24() -> String {
    DEFAULT_FORMAT_24.to_string()
}

/// Valid minute offsets: `{0, interval, 2*interval, ...}` below 60.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalGrid {
    minutes: Vec<u8>,
}

impl IntervalGrid {
    /// Build the grid. Callers guarantee `1 <= interval <= 60`.
    pub fn new(interval: u32) -> Self {
        let step = interval.clamp(1, MAX_INTERVAL) as usize;
        Self {
            minutes: (0u8..60).step_by(step).collect(),
        }
    }

    pub fn contains(&self, minute: u8) -> bool {
        self.minutes.contains(&minute)
    }

    pub fn minutes(&self) -> &[u8] {
        &self.minutes
    }
}

/// Immutable picker configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub interval: u32,
    pub min_hour: u8,
    pub max_hour: u8,
    pub start_hour: u8,
    pub end_hour: u8,
    pub mode: ClockMode,
    pub disabled_times: BTreeSet<Time>,
    pub allow_reset: bool,
    pub leading_zero: bool,
    pub mark_invalid: bool,
    pub large: bool,
    pub title: String,
    pub time_format_12: String,
    pub time_format_24: String,
    grid: IntervalGrid,
}

impl Configuration {
    /// Validate options into a configuration.
    ///
    /// Fails for an interval of 0 or above 60. Disabled entries that do not
    /// parse as a time are skipped with a warning.
    pub fn from_options(options: &PickerOptions) -> Result<Self> {
        if options.interval == 0 {
            return Err(Error::IntervalZero);
        }
        if options.interval > MAX_INTERVAL {
            return Err(Error::IntervalTooLarge {
                interval: options.interval,
            });
        }

        let mut disabled_times = BTreeSet::new();
        for entry in &options.disabled {
            match parse_time(entry) {
                ParsedTime::Time(time) => {
                    disabled_times.insert(time);
                }
                ParsedTime::Empty | ParsedTime::Unrecognized => {
                    warn!("Ignoring unrecognized disabled time {:?}", entry);
                }
            }
        }

        Ok(Self {
            interval: options.interval,
            min_hour: options.min_time,
            max_hour: options.max_time,
            start_hour: options.start_time,
            end_hour: options.end_time,
            mode: options.mode,
            disabled_times,
            allow_reset: options.allow_reset,
            leading_zero: options.leading_zero,
            mark_invalid: options.mark_invalid,
            large: options.large,
            title: options.title.clone(),
            time_format_12: options.time_format_12.clone(),
            time_format_24: options.time_format_24.clone(),
            grid: IntervalGrid::new(options.interval),
        })
    }

    pub fn grid(&self) -> &IntervalGrid {
        &self.grid
    }

    /// Display pattern for the configured mode
    pub fn pattern(&self) -> &str {
        match self.mode {
            ClockMode::TwelveHour => &self.time_format_12,
            ClockMode::TwentyFourHour => &self.time_format_24,
        }
    }

    /// Display text for `time` under this configuration
    pub fn format(&self, time: Time) -> String {
        format_time(time, self.pattern(), self.mode.is_am_pm(), self.leading_zero)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        let options = PickerOptions::default();
        Self {
            interval: options.interval,
            min_hour: options.min_time,
            max_hour: options.max_time,
            start_hour: options.start_time,
            end_hour: options.end_time,
            mode: options.mode,
            disabled_times: BTreeSet::new(),
            allow_reset: options.allow_reset,
            leading_zero: options.leading_zero,
            mark_invalid: options.mark_invalid,
            large: options.large,
            title: options.title,
            time_format_12: options.time_format_12,
            time_format_24: options.time_format_24,
            grid: IntervalGrid::new(options.interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PickerOptions::default();
        assert_eq!(options.interval, 60);
        assert_eq!(options.max_time, 24);
        assert_eq!(options.end_time, 24);
        assert!(options.allow_reset);
        assert!(!options.mark_invalid);
        assert_eq!(options.mode, ClockMode::TwentyFourHour);
        assert_eq!(options.time_format_12, "H:M apm");
    }

    #[test]
    fn test_grid_for_common_intervals() {
        assert_eq!(IntervalGrid::new(60).minutes(), &[0]);
        assert_eq!(IntervalGrid::new(30).minutes(), &[0, 30]);
        assert_eq!(IntervalGrid::new(15).minutes(), &[0, 15, 30, 45]);
    }

    #[test]
    fn test_grid_for_non_divisor_interval() {
        assert_eq!(IntervalGrid::new(45).minutes(), &[0, 45]);
        assert_eq!(IntervalGrid::new(25).minutes(), &[0, 25, 50]);
        assert!(!IntervalGrid::new(25).contains(15));
    }

    #[test]
    fn test_from_options_rejects_large_interval() {
        let options = PickerOptions {
            interval: 90,
            ..Default::default()
        };
        let err = Configuration::from_options(&options).unwrap_err();
        assert!(matches!(err, Error::IntervalTooLarge { interval: 90 }));
    }

    #[test]
    fn test_from_options_rejects_zero_interval() {
        let options = PickerOptions {
            interval: 0,
            ..Default::default()
        };
        assert!(matches!(
            Configuration::from_options(&options),
            Err(Error::IntervalZero)
        ));
    }

    #[test]
    fn test_from_options_parses_disabled_times() {
        let options = PickerOptions {
            disabled: vec![
                "1:30 pm".to_string(),
                "10:00".to_string(),
                "soon".to_string(),
            ],
            ..Default::default()
        };
        let config = Configuration::from_options(&options).unwrap();
        assert_eq!(config.disabled_times.len(), 2);
        assert!(config.disabled_times.contains(&Time::new(13, 30)));
        assert!(config.disabled_times.contains(&Time::new(10, 0)));
    }

    #[test]
    fn test_default_configuration_matches_default_options() {
        let from_options = Configuration::from_options(&PickerOptions::default()).unwrap();
        assert_eq!(from_options, Configuration::default());
    }

    #[test]
    fn test_pattern_follows_mode() {
        let options = PickerOptions {
            mode: ClockMode::TwelveHour,
            ..Default::default()
        };
        let config = Configuration::from_options(&options).unwrap();
        assert_eq!(config.pattern(), "H:M apm");
        assert_eq!(config.format(Time::new(0, 0)), "12:00 am");
        assert_eq!(Configuration::default().format(Time::new(9, 0)), "9:00");
    }

    #[test]
    fn test_options_accept_camel_case_json() {
        let json = r#"{"interval": 30, "maxTime": 18, "startTime": 9, "endTime": 21,
                       "mode": "12h", "allowReset": false, "disabled": ["2:00 pm"]}"#;
        let options: PickerOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.interval, 30);
        assert_eq!(options.max_time, 18);
        assert_eq!(options.start_time, 9);
        assert_eq!(options.end_time, 21);
        assert_eq!(options.mode, ClockMode::TwelveHour);
        assert!(!options.allow_reset);
        assert_eq!(options.title, "Timepicker");
    }
}
