//! Process-wide default logger
//!
//! An explicit [`Logger`] handle is the primary API; this module holds the
//! single well-documented global instance for applications that want
//! free-function ergonomics. Install it once at process entry with [`init`],
//! then the free functions forward to it.
//!
//! ```no_run
//! use fanlog::{global, ConsoleWriter, Logger};
//!
//! let mut logger = Logger::new();
//! logger.register(Box::new(ConsoleWriter::new())).unwrap();
//! global::init(logger);
//!
//! global::info("service started");
//! global::close();
//! ```

use crate::core::{Level, Logger, Result, Writer};
use parking_lot::RwLock;

static DEFAULT: RwLock<Option<Logger>> = RwLock::new(None);

/// Install the process-wide logger.
///
/// # Panics
///
/// Panics if a global logger is already installed.
pub fn init(logger: Logger) {
    let mut slot = DEFAULT.write();
    if slot.is_some() {
        panic!("fanlog: global logger already installed");
    }
    *slot = Some(logger);
}

/// Whether a global logger is currently installed.
pub fn is_installed() -> bool {
    DEFAULT.read().is_some()
}

/// Register a writer on the global logger.
pub fn register(writer: Box<dyn Writer>) -> Result<()> {
    with_mut(|logger| logger.register(writer))
}

/// Set the timestamp layout on the global logger.
pub fn set_layout(layout: &str) {
    with_mut(|logger| logger.set_layout(layout));
}

/// Toggle full-path caller locations on the global logger.
pub fn show_full_path(on: bool) {
    with_mut(|logger| logger.show_full_path(on));
}

/// Emit a record on the global logger at `level`.
#[track_caller]
pub fn log(level: Level, message: impl Into<String>) {
    let guard = DEFAULT.read();
    let Some(logger) = guard.as_ref() else {
        panic!("fanlog: global logger not installed, call global::init first");
    };
    logger.log(level, message);
}

#[track_caller]
pub fn debug(message: impl Into<String>) {
    log(Level::Debug, message);
}

#[track_caller]
pub fn info(message: impl Into<String>) {
    log(Level::Info, message);
}

#[track_caller]
pub fn warn(message: impl Into<String>) {
    log(Level::Warn, message);
}

#[track_caller]
pub fn error(message: impl Into<String>) {
    log(Level::Error, message);
}

#[track_caller]
pub fn fatal(message: impl Into<String>) {
    log(Level::Fatal, message);
}

/// Uninstall and close the global logger, draining buffered records.
///
/// # Panics
///
/// Panics if no global logger is installed.
pub fn close() {
    let taken = DEFAULT.write().take();
    let Some(mut logger) = taken else {
        panic!("fanlog: global logger not installed, call global::init first");
    };
    logger.close();
}

fn with_mut<T>(f: impl FnOnce(&mut Logger) -> T) -> T {
    let mut guard = DEFAULT.write();
    let Some(logger) = guard.as_mut() else {
        panic!("fanlog: global logger not installed, call global::init first");
    };
    f(logger)
}
