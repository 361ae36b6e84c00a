//! Colored terminal output

use owo_colors::{OwoColorize, Style, colors::css};

/// Detects whether stdout accepts colors
fn enabled() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn paint(text: &str, style: Style) -> String {
    if enabled() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Extension trait for styling report output
pub trait Colorize {
    /// A passing outcome (green)
    fn pass(&self) -> String;
    /// A failing outcome (amber)
    fn fail(&self) -> String;
    /// A name, type or pattern (blue)
    fn label(&self) -> String;
    /// Secondary detail
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn pass(&self) -> String {
        paint(self.as_ref(), Style::new().fg::<css::Green>())
    }

    fn fail(&self) -> String {
        paint(self.as_ref(), Style::new().fg::<css::Orange>())
    }

    fn label(&self) -> String {
        paint(self.as_ref(), Style::new().fg::<css::LightBlue>())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), Style::new().dimmed())
    }
}
