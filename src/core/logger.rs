//! Logger handle and the single-threaded dispatch loop

use super::{
    error::Result,
    level::Level,
    metrics::Metrics,
    record::{Record, RecordPool},
    timestamp::TimestampCache,
    writer::{Sink, Writer},
};
use crossbeam_channel::{after, bounded, select, Receiver, Sender};
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::panic::Location;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default ingestion channel capacity.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// First flush interval after startup; intentionally shorter than the
/// steady-state period so early buffer contents drain sooner.
pub const FLUSH_FIRST_INTERVAL: Duration = Duration::from_millis(500);

/// Steady-state flush sweep period.
pub const FLUSH_INTERVAL: Duration = Duration::from_millis(1000);

/// Rotate sweep period.
pub const ROTATE_INTERVAL: Duration = Duration::from_secs(10);

/// Records retained by the pool between bursts.
const POOL_RETENTION: usize = 256;

/// Caller location attached to a record.
///
/// Production call sites get one implicitly through `#[track_caller]`; tests
/// construct deterministic values and inject them via [`Logger::log_at`].
#[derive(Debug, Clone, Copy)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Callsite {
    /// Capture the logical caller of the surrounding `#[track_caller]` chain.
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Asynchronous multi-sink logger.
///
/// Producers render a [`Record`] and hand it to a bounded channel; a single
/// dispatcher thread fans each record out to every registered writer in
/// registration order, interleaved with periodic flush and rotate sweeps.
/// A full channel blocks the producer rather than dropping the record.
///
/// # Contract
///
/// `close()` must be called at most once, and no record may be emitted after
/// it returns; both violations panic. Dropping an unclosed logger performs the
/// same drain-and-sweep shutdown.
pub struct Logger {
    registry: Arc<Mutex<Vec<Sink>>>,
    sender: Option<Sender<Record>>,
    done: Receiver<()>,
    handle: Option<thread::JoinHandle<()>>,
    pool: Arc<RecordPool>,
    clock: TimestampCache,
    metrics: Arc<Metrics>,
    full_path: bool,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a logger with an explicit ingestion channel capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        let (done_tx, done_rx) = bounded(1);
        let registry: Arc<Mutex<Vec<Sink>>> = Arc::new(Mutex::new(Vec::new()));
        let pool = Arc::new(RecordPool::new(POOL_RETENTION));
        let metrics = Arc::new(Metrics::new());

        let handle = thread::spawn({
            let registry = Arc::clone(&registry);
            let pool = Arc::clone(&pool);
            let metrics = Arc::clone(&metrics);
            move || dispatch_loop(receiver, registry, pool, metrics, done_tx)
        });

        Self {
            registry,
            sender: Some(sender),
            done: done_rx,
            handle: Some(handle),
            pool,
            clock: TimestampCache::new(),
            metrics,
            full_path: false,
        }
    }

    /// Register a writer. Its `init()` runs here; an error rejects the
    /// registration and should abort startup.
    pub fn register(&mut self, writer: Box<dyn Writer>) -> Result<()> {
        let sink = Sink::new(writer)?;
        self.registry.lock().push(sink);
        Ok(())
    }

    /// Set the strftime layout used to render record timestamps.
    pub fn set_layout(&mut self, layout: &str) {
        self.clock.set_layout(layout);
    }

    /// Show the caller's full path instead of the trailing `file:line`.
    pub fn show_full_path(&mut self, on: bool) {
        self.full_path = on;
    }

    /// Pipeline health counters.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Emit a record at `level`, capturing the caller's location.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>) {
        self.log_at(level, message, Callsite::here());
    }

    /// Emit a record with an explicitly supplied caller location.
    pub fn log_at(&self, level: Level, message: impl Into<String>, callsite: Callsite) {
        let Some(sender) = self.sender.as_ref() else {
            panic!("fanlog: record emitted after Logger::close()");
        };

        let mut record = self.pool.acquire();
        record.level = level;
        record.message = message.into();
        self.clock.stamp_into(&mut record.timestamp);

        let file = if self.full_path {
            callsite.file
        } else {
            callsite.file.rsplit(['/', '\\']).next().unwrap_or(callsite.file)
        };
        record.source.clear();
        let _ = write!(record.source, "{}:{}", file, callsite.line);

        // Blocks when the channel is full: backpressure, never silent loss.
        // Err means the dispatcher is gone, which only happens mid-teardown.
        let _ = sender.send(record);
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(Level::Fatal, message);
    }

    /// Close the ingestion channel, wait for the dispatcher to drain every
    /// buffered record, then flush every flush-capable writer once.
    ///
    /// # Panics
    ///
    /// Panics if called twice.
    pub fn close(&mut self) {
        if self.sender.is_none() {
            panic!("fanlog: Logger::close() called twice");
        }
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender closes the channel; records already enqueued
        // are still delivered before the dispatcher sees the disconnect.
        drop(self.sender.take());

        let _ = self.done.recv();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                eprintln!("[fanlog] dispatch thread panicked during shutdown");
            }
        }

        let mut sinks = self.registry.lock();
        flush_sweep(&mut sinks, &self.metrics);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.sender.is_some() {
            self.shutdown();
        }
    }
}

/// The dispatch loop: one consumer thread, three wakeup sources.
///
/// Runs until the ingestion channel is both closed and drained, then signals
/// the done-channel and exits.
fn dispatch_loop(
    receiver: Receiver<Record>,
    registry: Arc<Mutex<Vec<Sink>>>,
    pool: Arc<RecordPool>,
    metrics: Arc<Metrics>,
    done: Sender<()>,
) {
    let mut flush_timer = after(FLUSH_FIRST_INTERVAL);
    let mut rotate_timer = after(ROTATE_INTERVAL);

    loop {
        select! {
            recv(receiver) -> msg => match msg {
                Ok(record) => {
                    deliver(&registry, &record, &metrics);
                    pool.release(record);
                }
                // Closed and fully drained.
                Err(_) => break,
            },
            recv(flush_timer) -> _ => {
                let mut sinks = registry.lock();
                flush_sweep(&mut sinks, &metrics);
                flush_timer = after(FLUSH_INTERVAL);
            },
            recv(rotate_timer) -> _ => {
                let mut sinks = registry.lock();
                rotate_sweep(&mut sinks, &metrics);
                rotate_timer = after(ROTATE_INTERVAL);
            },
        }
    }

    let _ = done.send(());
}

/// Fan one record out to every writer in registration order. A writer's
/// failure is reported and never hides the record from subsequent writers.
fn deliver(registry: &Mutex<Vec<Sink>>, record: &Record, metrics: &Metrics) {
    let mut sinks = registry.lock();
    for sink in sinks.iter_mut() {
        if let Err(err) = sink.writer.write(record) {
            metrics.record_write_error();
            eprintln!(
                "[fanlog] writer '{}' write failed: {}",
                sink.writer.name(),
                err
            );
        }
    }
    metrics.record_delivered();
}

fn flush_sweep(sinks: &mut [Sink], metrics: &Metrics) {
    for sink in sinks.iter_mut().filter(|s| s.can_flush) {
        let result = match sink.writer.as_flusher() {
            Some(flusher) => flusher.flush(),
            None => Ok(()),
        };
        if let Err(err) = result {
            metrics.record_flush_error();
            eprintln!(
                "[fanlog] writer '{}' flush failed: {}",
                sink.writer.name(),
                err
            );
        }
    }
}

fn rotate_sweep(sinks: &mut [Sink], metrics: &Metrics) {
    for sink in sinks.iter_mut().filter(|s| s.can_rotate) {
        let result = match sink.writer.as_rotater() {
            Some(rotater) => rotater.rotate(),
            None => Ok(()),
        };
        if let Err(err) = result {
            metrics.record_rotate_error();
            eprintln!(
                "[fanlog] writer '{}' rotate failed: {}",
                sink.writer.name(),
                err
            );
        }
    }
}
