//! Terminal styling for royals and report headings

use owo_colors::{OwoColorize, Style};

/// Whether stdout accepts ANSI colours
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn paint(text: &str, style: Style) -> String {
    if supports_color() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Extension trait styling text by the role it plays in a report
pub trait Paint {
    /// The reigning monarch (bold green)
    fn crowned(&self) -> String;
    /// A royal who has died (dimmed, struck through)
    fn deceased(&self) -> String;
    /// Section headings (light blue)
    fn heading(&self) -> String;
    /// Something the user should look at (yellow)
    fn warning(&self) -> String;
}

impl Paint for str {
    fn crowned(&self) -> String {
        paint(self, Style::new().green().bold())
    }

    fn deceased(&self) -> String {
        paint(self, Style::new().dimmed().strikethrough())
    }

    fn heading(&self) -> String {
        paint(self, Style::new().bright_blue())
    }

    fn warning(&self) -> String {
        paint(self, Style::new().yellow())
    }
}

impl Paint for String {
    fn crowned(&self) -> String {
        self.as_str().crowned()
    }

    fn deceased(&self) -> String {
        self.as_str().deceased()
    }

    fn heading(&self) -> String {
        self.as_str().heading()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }
}
