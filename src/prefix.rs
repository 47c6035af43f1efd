use crate::level::LogLevel;
use crate::style::{ColoredStyler, TextStyler};

/// One level of grouping indentation.
pub const INDENT_UNIT: &str = "    ";

struct LevelInfo {
    level: LogLevel,
    style: fn(&dyn TextStyler, &str) -> String,
    label: &'static str,
}

// Indexed by `LogLevel::rank`.
static LEVEL_INFOS: [LevelInfo; LogLevel::COUNT] = [
    LevelInfo {
        level: LogLevel::Debug,
        style: |styler, text| styler.magenta(text),
        label: "debug",
    },
    LevelInfo {
        level: LogLevel::Trace,
        style: |styler, text| styler.blue(text),
        label: "trace",
    },
    LevelInfo {
        level: LogLevel::Info,
        style: |styler, text| styler.green(text),
        label: "info",
    },
    LevelInfo {
        level: LogLevel::Warn,
        style: |styler, text| styler.yellow(text),
        label: "warn",
    },
    LevelInfo {
        level: LogLevel::Error,
        style: |styler, text| styler.red(text),
        label: "error",
    },
];

fn level_info(level: LogLevel) -> &'static LevelInfo {
    let info = &LEVEL_INFOS[level.rank()];
    debug_assert_eq!(info.level, level);
    info
}

/// Return a string with which to prefix a line of console output, reflecting
/// the logging level and how deeply the line is grouped.
///
/// The bracketed label is colored; `info` and `warn` get one space of padding
/// so labels line up, then `group_depth` indent units follow.
pub fn render_message_prefix(level: LogLevel, group_depth: usize) -> String {
    render_message_prefix_with(&ColoredStyler, level, group_depth)
}

/// Prefix for an ungrouped line, same as a `group_depth` of zero.
pub fn render_level_prefix(level: LogLevel) -> String {
    render_message_prefix(level, 0)
}

/// Like [`render_message_prefix`], but styles the label with `styler`.
pub fn render_message_prefix_with(
    styler: &dyn TextStyler,
    level: LogLevel,
    group_depth: usize,
) -> String {
    let info = level_info(level);
    let label = (info.style)(styler, &format!("[{}]", info.label));
    let padding = match level {
        LogLevel::Info | LogLevel::Warn => " ",
        _ => "",
    };
    format!("{label}{padding}{}", INDENT_UNIT.repeat(group_depth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PlainStyler;

    /// Tags each color so tests can see which transform ran.
    struct TagStyler;

    impl TextStyler for TagStyler {
        fn magenta(&self, text: &str) -> String {
            format!("<m>{text}</m>")
        }
        fn blue(&self, text: &str) -> String {
            format!("<b>{text}</b>")
        }
        fn green(&self, text: &str) -> String {
            format!("<g>{text}</g>")
        }
        fn yellow(&self, text: &str) -> String {
            format!("<y>{text}</y>")
        }
        fn red(&self, text: &str) -> String {
            format!("<r>{text}</r>")
        }
    }

    #[test]
    fn table_matches_ranks() {
        for level in LogLevel::ALL {
            let info = level_info(level);
            assert_eq!(info.level, level);
            assert_eq!(info.label, level.as_str());
        }
    }

    #[test]
    fn debug_prefix_has_no_padding_or_indent() {
        assert_eq!(
            render_message_prefix_with(&TagStyler, LogLevel::Debug, 0),
            "<m>[debug]</m>"
        );
        assert!(render_level_prefix(LogLevel::Debug).contains("[debug]"));
    }

    #[test]
    fn each_level_uses_its_color() {
        let rendered: Vec<String> = LogLevel::ALL
            .into_iter()
            .map(|level| render_message_prefix_with(&TagStyler, level, 0))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "<m>[debug]</m>",
                "<b>[trace]</b>",
                "<g>[info]</g> ",
                "<y>[warn]</y> ",
                "<r>[error]</r>",
            ]
        );
    }

    #[test]
    fn short_labels_are_padded_to_align() {
        for level in LogLevel::ALL {
            let plain = render_message_prefix_with(&PlainStyler, level, 0);
            assert_eq!(plain.len(), "[debug]".len(), "{level}");
        }
        let info = render_message_prefix_with(&TagStyler, LogLevel::Info, 0);
        let debug = render_message_prefix_with(&TagStyler, LogLevel::Debug, 0);
        assert_eq!(info.strip_suffix("</g> "), Some("<g>[info]"));
        assert!(debug.ends_with("</m>"));
    }

    #[test]
    fn group_depth_indents_after_padding() {
        let prefix = render_message_prefix_with(&TagStyler, LogLevel::Warn, 2);
        assert_eq!(prefix, format!("<y>[warn]</y> {}", " ".repeat(8)));
        let after_label = prefix.strip_prefix("<y>[warn]</y> ").unwrap();
        assert_eq!(after_label, "        ");

        let error = render_message_prefix_with(&TagStyler, LogLevel::Error, 3);
        assert_eq!(error, format!("<r>[error]</r>{}", " ".repeat(12)));
    }

    #[test]
    fn zero_depth_matches_default() {
        for level in LogLevel::ALL {
            assert_eq!(render_message_prefix(level, 0), render_level_prefix(level));
        }
    }
}
