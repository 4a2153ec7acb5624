//! Option loading from TOML files and JSON documents

use std::path::Path;

use timepick_core::prelude::*;

use super::types::PickerOptions;

// ─────────────────────────────────────────────────────────────────────────────
// Options Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load picker options from a TOML file
///
/// Returns default options if the file doesn't exist or can't be parsed.
pub fn load_options(path: &Path) -> PickerOptions {
    if !path.exists() {
        debug!("No options file at {:?}, using defaults", path);
        return PickerOptions::default();
    }

    match read_options(path) {
        Ok(options) => {
            debug!("Loaded picker options from {:?}", path);
            options
        }
        Err(e) => {
            warn!("Failed to load {:?}: {}", path, e);
            PickerOptions::default()
        }
    }
}

/// Read picker options from a TOML file, failing on any error
pub fn read_options(path: &Path) -> Result<PickerOptions> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_options_toml(&content)
        .with_context(|| format!("Invalid options in {}", path.display()))
}

/// Parse picker options from TOML text
pub fn parse_options_toml(content: &str) -> Result<PickerOptions> {
    Ok(toml::from_str(content)?)
}

/// Parse picker options from a JSON document
pub fn parse_options_json(content: &str) -> Result<PickerOptions> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use timepick_core::ClockMode;

    #[test]
    fn test_load_options_defaults_when_missing() {
        let temp = tempdir().unwrap();
        let options = load_options(&temp.path().join("picker.toml"));
        assert_eq!(options, PickerOptions::default());
    }

    #[test]
    fn test_load_options_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("picker.toml");
        let content = r#"
interval = 30
mode = "12h"
max_time = 18
start_time = 9
end_time = 21
disabled = ["1:30 pm", "2:00 pm", "5:30 pm"]
leading_zero = true
"#;
        std::fs::write(&path, content).unwrap();

        let options = load_options(&path);
        assert_eq!(options.interval, 30);
        assert_eq!(options.mode, ClockMode::TwelveHour);
        assert_eq!(options.max_time, 18);
        assert_eq!(options.disabled.len(), 3);
        assert!(options.leading_zero);
        // Untouched fields keep their defaults
        assert!(options.allow_reset);
        assert_eq!(options.min_time, 0);
    }

    #[test]
    fn test_load_options_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("picker.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert_eq!(load_options(&path), PickerOptions::default());
        assert!(matches!(read_options(&path), Err(Error::Toml(_))));
    }

    #[test]
    fn test_read_options_missing_file() {
        let temp = tempdir().unwrap();
        let err = read_options(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_read_options_unreadable_path() {
        let temp = tempdir().unwrap();
        // Exists, but a directory cannot be read as text
        let err = read_options(temp.path()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_parse_options_json() {
        let options = parse_options_json(r#"{"interval": 15, "markInvalid": true}"#).unwrap();
        assert_eq!(options.interval, 15);
        assert!(options.mark_invalid);

        assert!(matches!(parse_options_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_options_round_trip_through_toml() {
        let options = PickerOptions {
            interval: 20,
            disabled: vec!["10:20".to_string()],
            ..Default::default()
        };
        let text = toml::to_string_pretty(&options).unwrap();
        assert_eq!(parse_options_toml(&text).unwrap(), options);
    }
}
