//! Per-second timestamp rendering cache
//!
//! Formatting a timestamp through a strftime layout costs far more than the
//! rest of the producer-side hot path, so the rendered string is memoized per
//! whole second. Concurrent producers within the same second all observe the
//! same cached string.

use chrono::Local;
use parking_lot::Mutex;

/// Default output layout, `2026/08/07 10:30:45`.
pub const DEFAULT_LAYOUT: &str = "%Y/%m/%d %H:%M:%S";

struct Cached {
    layout: String,
    last_second: i64,
    rendered: String,
}

/// Caches the formatted wall-clock timestamp for the current second.
///
/// The lock is held only for the compare-and-update plus the copy out.
pub struct TimestampCache {
    inner: Mutex<Cached>,
}

impl TimestampCache {
    pub fn new() -> Self {
        Self::with_layout(DEFAULT_LAYOUT)
    }

    pub fn with_layout(layout: &str) -> Self {
        Self {
            inner: Mutex::new(Cached {
                layout: layout.to_string(),
                last_second: i64::MIN,
                rendered: String::new(),
            }),
        }
    }

    /// Replace the strftime layout. Invalidates the cached rendering.
    pub fn set_layout(&self, layout: &str) {
        let mut cached = self.inner.lock();
        cached.layout = layout.to_string();
        cached.last_second = i64::MIN;
    }

    /// Write the current timestamp into `buf`, reusing its capacity.
    ///
    /// Re-formats at most once per distinct whole-second value.
    pub fn stamp_into(&self, buf: &mut String) {
        let now = Local::now();
        let second = now.timestamp();

        let mut cached = self.inner.lock();
        if second != cached.last_second {
            let rendered = now.format(&cached.layout).to_string();
            cached.rendered = rendered;
            cached.last_second = second;
        }
        buf.clear();
        buf.push_str(&cached.rendered);
    }

    /// Render the current timestamp into a fresh string.
    pub fn stamp(&self) -> String {
        let mut out = String::new();
        self.stamp_into(&mut out);
        out
    }
}

impl Default for TimestampCache {
    fn default() -> Self {
        Self::new()
    }
}
