//! timepick Library
//!
//! A time-slot picker engine with a headless NDJSON host.

// Module declarations
pub mod headless;

// Re-export main entry points
pub use headless::runner::{run_headless, HeadlessSession};
pub use timepick_app::{Engine, HostInput, PickerOptions};
