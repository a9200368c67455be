//! Logging macros for ergonomic message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The expansion
//! calls [`Logger::log`](crate::Logger::log), so the record's source location
//! is the macro call site.
//!
//! # Examples
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::log;
/// log!(logger, Level::Info, "simple message");
/// log!(logger, Level::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Logger};

    #[test]
    fn test_log_macro() {
        let logger = Logger::new();
        log!(logger, Level::Info, "test message");
        log!(logger, Level::Info, "formatted: {}", 42);
    }

    #[test]
    fn test_level_macros() {
        let logger = Logger::new();
        debug!(logger, "count: {}", 5);
        info!(logger, "items: {}", 100);
        warn!(logger, "retry {} of {}", 1, 3);
        error!(logger, "code: {}", 500);
        fatal!(logger, "critical failure: {}", "disk full");
    }
}
