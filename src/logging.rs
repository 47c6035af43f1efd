use crate::level::{LogLevel, log_lt};
use crate::prefix::render_message_prefix_with;
use crate::style::{ColoredStyler, PlainStyler, TextStyler};

/// Diagnostics with a minimum level and nested groups.
pub struct Logger {
    min_level: LogLevel,
    depth: usize,
    color: bool,
}

impl Logger {
    pub fn new(min_level: LogLevel, color: bool) -> Self {
        Logger {
            min_level,
            depth: 0,
            color,
        }
    }

    pub fn group(&mut self, label: &str) {
        self.log(LogLevel::Info, label);
        self.depth += 1;
    }

    pub fn group_end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn log(&self, level: LogLevel, msg: &str) {
        if let Some(line) = self.line(level, msg) {
            eprintln!("{line}");
        }
    }

    /// The line `log` would print, or `None` if `level` is filtered out.
    pub fn line(&self, level: LogLevel, msg: &str) -> Option<String> {
        if log_lt(level, self.min_level) {
            return None;
        }
        let styler: &dyn TextStyler = if self.color {
            &ColoredStyler
        } else {
            &PlainStyler
        };
        Some(format!(
            "{}{msg}",
            render_message_prefix_with(styler, level, self.depth)
        ))
    }
}
