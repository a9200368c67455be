//! # fanlog
//!
//! Asynchronous multi-sink logging with a single dispatch thread, record
//! pooling, and pluggable writers.
//!
//! ## Features
//!
//! - **Non-blocking call sites**: producers hand records to a bounded channel
//!   and never wait on sink I/O (a full channel applies backpressure instead
//!   of dropping records)
//! - **Multiple Writers**: console, file, TCP, and custom sinks delivered to
//!   in registration order
//! - **Maintenance timers**: flush and rotate sweeps run on independent
//!   schedules, only for writers that opt into those capabilities
//! - **Thread Safe**: designed for arbitrarily many concurrent call sites

pub mod config;
pub mod core;
pub mod global;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::config::{ConsoleConfig, FileConfig, LogConfig, TcpConfig};
    pub use crate::core::{
        Callsite, Flusher, Level, LogError, Logger, Metrics, Record, Result, Rotater, Writer,
    };
    pub use crate::writers::{BatchWriter, ConsoleWriter, FileWriter, TcpWriter};
}

pub use config::{setup, setup_from_file, LogConfig};
pub use core::{
    Callsite, Flusher, Level, LogError, Logger, Metrics, Record, RecordPool, Result, Rotater,
    TimestampCache, Writer, DEFAULT_CHANNEL_CAPACITY, DEFAULT_LAYOUT, FLUSH_FIRST_INTERVAL,
    FLUSH_INTERVAL, ROTATE_INTERVAL,
};
pub use writers::{BatchWriter, ConsoleWriter, FileWriter, TcpWriter};
