//! Picker configuration
//!
//! Supports:
//! - TOML option files (`picker.toml`)
//! - JSON option documents from hosts

pub mod settings;
pub mod types;

pub use settings::{load_options, parse_options_json, parse_options_toml, read_options};
pub use types::*;
