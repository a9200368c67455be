//! Console writer implementation

use crate::core::{Level, Record, Result, Writer};
use colored::Colorize;
use std::io::{self, Write as _};

/// Writes records to stdout, optionally colorized per level.
///
/// The console never buffers, so this writer exposes neither flush nor
/// rotate capability.
pub struct ConsoleWriter {
    level: Level,
    color: bool,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            color: false,
        }
    }

    /// Set this writer's severity threshold.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable ANSI color output.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn format_colored(&self, record: &Record) -> String {
        format!(
            "{} [{}] <{}> {}\n",
            record.timestamp.as_str().cyan(),
            record.level.as_str().color(record.level.color()),
            record.source.as_str().bold(),
            record.message
        )
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for ConsoleWriter {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn write(&mut self, record: &Record) -> Result<()> {
        if record.level < self.level {
            return Ok(());
        }

        let line = if self.color {
            self.format_colored(record)
        } else {
            record.render()
        };

        let mut stdout = io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
