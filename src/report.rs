// src/report.rs

//! User-facing status lines.
//!
//! Every line has the shape `HH:MM:SS [LEVEL] message` and, when color is
//! enabled, is painted in the level's color. These lines are for humans only;
//! diagnostics for debugging devtask itself go through `tracing` on stderr.

use std::fmt;
use std::io::{self, Write};

use colored::{Color, Colorize};
use tracing::warn;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
    Warning,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
        }
    }

    fn color(self) -> Color {
        match self {
            Level::Info => Color::Cyan,
            Level::Success => Color::Green,
            Level::Error => Color::Red,
            Level::Warning => Color::Yellow,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render one status line (without trailing newline).
pub fn format_line(timestamp: &str, level: Level, message: &str, color: bool) -> String {
    let line = format!("{timestamp} [{level}] {message}");
    if color {
        line.color(level.color()).to_string()
    } else {
        line
    }
}

/// Writes status lines to a sink, stdout in production.
pub struct Reporter {
    out: Box<dyn Write + Send>,
    color: bool,
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Reporter {
    pub fn new(out: impl Write + Send + 'static, color: bool) -> Self {
        Self {
            out: Box::new(out),
            color,
        }
    }

    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }

    pub fn log(&mut self, level: Level, message: &str) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let line = format_line(&timestamp, level, message, self.color);

        // A closed stdout must not abort the pipeline.
        if let Err(e) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write status line");
        }
    }

    pub fn info(&mut self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn success(&mut self, message: &str) {
        self.log(Level::Success, message);
    }

    pub fn error(&mut self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn warning(&mut self, message: &str) {
        self.log(Level::Warning, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_layout() {
        let line = format_line("09:05:01", Level::Success, "Build all crates completed", false);
        assert_eq!(line, "09:05:01 [SUCCESS] Build all crates completed");
    }

    #[test]
    fn colored_line_keeps_text() {
        colored::control::set_override(true);
        let line = format_line("12:00:00", Level::Error, "boom", true);
        assert!(line.contains("12:00:00 [ERROR] boom"));
        assert!(line.starts_with("\u{1b}["));
    }
}
