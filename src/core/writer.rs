//! Writer capability contract for output sinks
//!
//! The dispatcher knows sinks only through these traits. Flush and rotate are
//! opt-in capabilities: a sink exposes them by overriding the `as_flusher` /
//! `as_rotater` queries, and the answer is resolved once at registration, not
//! re-queried on every timer tick.

use super::{error::Result, record::Record};

/// Base contract every sink must satisfy.
///
/// `write` must not block on unrelated writers; it may block on the sink's own
/// I/O. Severity filtering is the writer's own responsibility: records below
/// its threshold are a no-op, not an error.
pub trait Writer: Send {
    /// Acquire and validate destination resources. A failure here is fatal to
    /// registration.
    fn init(&mut self) -> Result<()>;

    /// Accept one record for delivery or local buffering.
    fn write(&mut self, record: &Record) -> Result<()>;

    /// Stable identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Flush capability query. Sinks that buffer locally override this.
    fn as_flusher(&mut self) -> Option<&mut dyn Flusher> {
        None
    }

    /// Rotate capability query. Sinks with segmented destinations override this.
    fn as_rotater(&mut self) -> Option<&mut dyn Rotater> {
        None
    }
}

/// Push locally buffered data to the destination now.
pub trait Flusher {
    fn flush(&mut self) -> Result<()>;
}

/// Roll the destination over to a new segment now.
pub trait Rotater {
    fn rotate(&mut self) -> Result<()>;
}

/// Registry entry: a registered writer with its capabilities resolved.
pub(crate) struct Sink {
    pub writer: Box<dyn Writer>,
    pub can_flush: bool,
    pub can_rotate: bool,
}

impl Sink {
    /// Initialize the writer and capture its capability answers.
    pub fn new(mut writer: Box<dyn Writer>) -> Result<Self> {
        writer.init()?;
        let can_flush = writer.as_flusher().is_some();
        let can_rotate = writer.as_rotater().is_some();
        Ok(Self {
            writer,
            can_flush,
            can_rotate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Writer for Plain {
        fn init(&mut self) -> Result<()> {
            Ok(())
        }
        fn write(&mut self, _record: &Record) -> Result<()> {
            Ok(())
        }
        fn name(&self) -> &str {
            "plain"
        }
    }

    struct Buffered;

    impl Writer for Buffered {
        fn init(&mut self) -> Result<()> {
            Ok(())
        }
        fn write(&mut self, _record: &Record) -> Result<()> {
            Ok(())
        }
        fn name(&self) -> &str {
            "buffered"
        }
        fn as_flusher(&mut self) -> Option<&mut dyn Flusher> {
            Some(self)
        }
    }

    impl Flusher for Buffered {
        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_capabilities_resolved_at_registration() {
        let plain = Sink::new(Box::new(Plain)).unwrap();
        assert!(!plain.can_flush);
        assert!(!plain.can_rotate);

        let buffered = Sink::new(Box::new(Buffered)).unwrap();
        assert!(buffered.can_flush);
        assert!(!buffered.can_rotate);
    }

    #[test]
    fn test_failing_init_rejects_registration() {
        struct Broken;
        impl Writer for Broken {
            fn init(&mut self) -> Result<()> {
                Err(crate::core::LogError::writer("no destination"))
            }
            fn write(&mut self, _record: &Record) -> Result<()> {
                Ok(())
            }
            fn name(&self) -> &str {
                "broken"
            }
        }

        assert!(Sink::new(Box::new(Broken)).is_err());
    }
}
