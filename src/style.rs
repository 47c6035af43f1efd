use colored::Colorize;

/// Decorates text for terminal display, one method per color used by the
/// level table.
pub trait TextStyler {
    fn magenta(&self, text: &str) -> String;
    fn blue(&self, text: &str) -> String;
    fn green(&self, text: &str) -> String;
    fn yellow(&self, text: &str) -> String;
    fn red(&self, text: &str) -> String;
}

/// ANSI colors through `colored`. Respects `colored::control`, so
/// `NO_COLOR` and friends turn it into plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColoredStyler;

impl TextStyler for ColoredStyler {
    fn magenta(&self, text: &str) -> String {
        text.magenta().to_string()
    }

    fn blue(&self, text: &str) -> String {
        text.blue().to_string()
    }

    fn green(&self, text: &str) -> String {
        text.green().to_string()
    }

    fn yellow(&self, text: &str) -> String {
        text.yellow().to_string()
    }

    fn red(&self, text: &str) -> String {
        text.red().to_string()
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl TextStyler for PlainStyler {
    fn magenta(&self, text: &str) -> String {
        text.to_string()
    }

    fn blue(&self, text: &str) -> String {
        text.to_string()
    }

    fn green(&self, text: &str) -> String {
        text.to_string()
    }

    fn yellow(&self, text: &str) -> String {
        text.to_string()
    }

    fn red(&self, text: &str) -> String {
        text.to_string()
    }
}
