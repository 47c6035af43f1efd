//! Level-based formatting helpers for console logging: priority comparisons
//! between log levels and colored, indentation-aware line prefixes.
//!
//! Nothing here writes output except the [`logging`] helpers used by the
//! `levelfmt` binary.

pub mod cli;
pub mod config;
pub mod level;
pub mod logging;
pub mod prefix;
pub mod style;

pub use level::{LogLevel, log_gt, log_gte, log_lt, log_lte};
pub use prefix::{
    INDENT_UNIT, render_level_prefix, render_message_prefix, render_message_prefix_with,
};
pub use style::{ColoredStyler, PlainStyler, TextStyler};
