//! File writer with strftime path patterns and pattern-driven rotation
//!
//! The destination path is a strftime pattern rendered against the current
//! wall clock, e.g. `logs/app-%Y%m%d.log`. A rotate sweep re-renders the
//! pattern and rolls over to a new segment whenever the rendered path
//! changes; a pattern without time specifiers therefore never rotates.

use crate::core::{Flusher, Level, LogError, Record, Result, Rotater, Writer};
use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

pub struct FileWriter {
    level: Level,
    pattern: String,
    current_path: PathBuf,
    out: Option<BufWriter<File>>,
}

impl FileWriter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            level: Level::Debug,
            pattern: pattern.into(),
            current_path: PathBuf::new(),
            out: None,
        }
    }

    /// Set this writer's severity threshold.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Path the writer is currently appending to.
    pub fn current_path(&self) -> &PathBuf {
        &self.current_path
    }

    /// Render the pattern against the current wall clock.
    fn render_path(&self) -> PathBuf {
        PathBuf::from(Local::now().format(&self.pattern).to_string())
    }

    /// Open the segment the pattern currently points at.
    fn open_segment(&mut self) -> Result<()> {
        let path = self.render_path();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        self.current_path = path;
        self.out = Some(BufWriter::new(file));
        Ok(())
    }
}

impl Writer for FileWriter {
    fn init(&mut self) -> Result<()> {
        if self.pattern.is_empty() {
            return Err(LogError::config("FileWriter", "empty path pattern"));
        }
        if StrftimeItems::new(&self.pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LogError::config(
                "FileWriter",
                format!("invalid strftime pattern '{}'", self.pattern),
            ));
        }
        self.open_segment()
    }

    fn write(&mut self, record: &Record) -> Result<()> {
        if record.level < self.level {
            return Ok(());
        }
        let out = self
            .out
            .as_mut()
            .ok_or_else(|| LogError::writer("file writer not initialized"))?;
        out.write_all(record.render().as_bytes())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }

    fn as_flusher(&mut self) -> Option<&mut dyn Flusher> {
        Some(self)
    }

    fn as_rotater(&mut self) -> Option<&mut dyn Rotater> {
        Some(self)
    }
}

impl Flusher for FileWriter {
    fn flush(&mut self) -> Result<()> {
        if let Some(out) = self.out.as_mut() {
            out.flush()?;
        }
        Ok(())
    }
}

impl Rotater for FileWriter {
    fn rotate(&mut self) -> Result<()> {
        let next = self.render_path();
        if next == self.current_path {
            return Ok(());
        }
        self.flush()?;
        self.open_segment().map_err(|err| {
            LogError::rotation(next.display().to_string(), err.to_string())
        })
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
