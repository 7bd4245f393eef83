//! Output rendering for the terminal shell.
//!
//! This module provides a renderer trait and a plain-text implementation
//! with optional ANSI styling for the monochrome studio look.

use std::io::{self, Stdout, Write};

/// ANSI escape code for dim text (used for informational notices).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for bold text (used for section headings).
const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Trait for rendering shell output.
///
/// This abstraction allows for different rendering strategies: plain text
/// with ANSI styling, or plain text without styling for piping/redirecting.
pub trait Renderer: Send {
    /// Print one assistant reply.
    ///
    /// Sentinel strings pass through here unchanged; they are ordinary
    /// assistant text as far as rendering is concerned.
    fn print_assistant(&mut self, text: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print a rendered landing section.
    fn print_section(&mut self, section: &str);
}

/// Wraps text in an ANSI style when color is enabled.
pub fn styled(code: &str, text: &str, use_color: bool) -> String {
    if use_color {
        format!("{code}{text}{ANSI_RESET}")
    } else {
        text.to_string()
    }
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_assistant(&mut self, text: &str) {
        println!("{text}");
        self.flush();
    }

    fn print_info(&mut self, info: &str) {
        println!("{}", styled(ANSI_DIM, info, self.use_color));
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        println!("{}", styled(ANSI_RED, error, self.use_color));
        self.flush();
    }

    fn print_section(&mut self, section: &str) {
        let mut lines = section.lines();
        if let Some(heading) = lines.next() {
            println!("{}", styled(ANSI_BOLD, heading, self.use_color));
        }
        for line in lines {
            println!("{line}");
        }
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_with_color() {
        assert_eq!(styled(ANSI_DIM, "quiet", true), "\x1b[2mquiet\x1b[0m");
    }

    #[test]
    fn styled_without_color_is_verbatim() {
        assert_eq!(styled(ANSI_RED, "Err: CONNECTION_LOST.", false), "Err: CONNECTION_LOST.");
    }
}
