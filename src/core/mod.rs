//! Core logging types: records, levels, the writer contract, and the logger

pub mod error;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod timestamp;
pub mod writer;

pub use error::{LogError, Result};
pub use level::Level;
pub use logger::{
    Callsite, Logger, DEFAULT_CHANNEL_CAPACITY, FLUSH_FIRST_INTERVAL, FLUSH_INTERVAL,
    ROTATE_INTERVAL,
};
pub use metrics::Metrics;
pub use record::{Record, RecordPool};
pub use timestamp::{TimestampCache, DEFAULT_LAYOUT};
pub use writer::{Flusher, Rotater, Writer};
