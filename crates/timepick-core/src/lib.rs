//! # timepick-core - Core Time Types
//!
//! Foundation crate for timepick. Provides the structured time value, the
//! free-form parser, display formatting, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Time (`time`)
//! - [`Time`] - An hour/minute pair
//! - [`ParsedTime`] - Parse outcome: empty, unrecognized or a time
//! - [`parse_time()`] - Forgiving parser for field text (`"1:00pm"`, `" 10:30 "`)
//!
//! ### Formatting (`format`)
//! - [`ClockMode`] - 24h or 12h display
//! - [`format_time()`] - Render a time through an `H`/`M` pattern
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use timepick_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod logging;
pub mod prelude;
pub mod time;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use format::{format_time, ClockMode, DEFAULT_FORMAT_12, DEFAULT_FORMAT_24};
pub use time::{parse_time, ParsedTime, Time};
