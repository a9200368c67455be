//! Batching writer over an arbitrary byte destination
//!
//! Rendered records accumulate in a bounded in-memory batch that is pushed to
//! the destination by the flush sweep, or eagerly when the batch fills up.
//! A failed push puts the writer into a sticky error state: every subsequent
//! batch operation fails with the original cause until [`clear_error`] is
//! called. The batch is retained across failures, so nothing accepted is
//! silently lost while the fault lasts.
//!
//! [`clear_error`]: BatchWriter::clear_error

use crate::core::{Flusher, Level, LogError, Record, Result, Writer};
use std::io;

const DEFAULT_BATCH_CAPACITY: usize = 64;

pub struct BatchWriter<W: io::Write + Send> {
    level: Level,
    dest: W,
    batch: Vec<String>,
    capacity: usize,
    err: Option<String>,
}

impl<W: io::Write + Send> BatchWriter<W> {
    pub fn new(dest: W) -> Self {
        Self::with_capacity(dest, DEFAULT_BATCH_CAPACITY)
    }

    pub fn with_capacity(dest: W, capacity: usize) -> Self {
        Self {
            level: Level::Debug,
            dest,
            batch: Vec::new(),
            capacity: capacity.max(1),
            err: None,
        }
    }

    /// Set this writer's severity threshold.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Records currently held in the batch.
    pub fn pending(&self) -> usize {
        self.batch.len()
    }

    /// Leave the sticky error state. The retained batch is pushed on the
    /// next flush.
    pub fn clear_error(&mut self) {
        self.err = None;
    }

    fn push_batch(&mut self) -> Result<()> {
        if let Some(cause) = &self.err {
            return Err(LogError::Sticky(cause.clone()));
        }
        if self.batch.is_empty() {
            return Ok(());
        }

        for line in &self.batch {
            if let Err(err) = self.dest.write_all(line.as_bytes()) {
                self.err = Some(err.to_string());
                return Err(err.into());
            }
        }
        if let Err(err) = self.dest.flush() {
            self.err = Some(err.to_string());
            return Err(err.into());
        }

        self.batch.clear();
        Ok(())
    }
}

impl<W: io::Write + Send> Writer for BatchWriter<W> {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn write(&mut self, record: &Record) -> Result<()> {
        if record.level < self.level {
            return Ok(());
        }
        if self.batch.len() >= self.capacity {
            self.push_batch()?;
        }
        self.batch.push(record.render());
        Ok(())
    }

    fn name(&self) -> &str {
        "batch"
    }

    fn as_flusher(&mut self) -> Option<&mut dyn Flusher> {
        Some(self)
    }
}

impl<W: io::Write + Send> Flusher for BatchWriter<W> {
    fn flush(&mut self) -> Result<()> {
        self.push_batch()
    }
}
