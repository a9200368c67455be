//! Log record and the reuse pool it cycles through
//!
//! A record is owned by exactly one thread at any time: the producer that
//! populates it, then the ingestion channel, then the dispatcher, and finally
//! the pool again once every writer has seen it.

use super::level::Level;
use parking_lot::Mutex;
use std::fmt;

/// One formatted, severity-tagged log event.
///
/// All fields are pre-rendered strings by the time the record enters the
/// ingestion channel; writers only ever read them.
#[derive(Debug, Clone, Default)]
pub struct Record {
    /// Wall-clock timestamp, rendered under the logger's layout
    pub timestamp: String,
    /// Caller location as `file:line`
    pub source: String,
    /// Pre-formatted message text
    pub message: String,
    pub level: Level,
}

impl Record {
    /// Render the record as a single output line.
    pub fn render(&self) -> String {
        format!(
            "{} [{}] <{}> {}\n",
            self.timestamp, self.level, self.source, self.message
        )
    }

    /// Clear all fields, keeping the string buffers' capacity for reuse.
    fn reset(&mut self) {
        self.timestamp.clear();
        self.source.clear();
        self.message.clear();
        self.level = Level::Debug;
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] <{}> {}",
            self.timestamp, self.level, self.source, self.message
        )
    }
}

/// Free list of reusable records.
///
/// Safe for concurrent acquire/release from any number of producer threads
/// plus the dispatcher. Retention is capped so a burst does not pin memory
/// forever.
pub struct RecordPool {
    free: Mutex<Vec<Record>>,
    retain: usize,
}

impl RecordPool {
    pub fn new(retain: usize) -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            retain,
        }
    }

    /// Take a cleared record from the pool, or allocate a fresh one.
    pub fn acquire(&self) -> Record {
        self.free.lock().pop().unwrap_or_default()
    }

    /// Return a fully consumed record for reuse.
    pub fn release(&self, mut record: Record) {
        record.reset();
        let mut free = self.free.lock();
        if free.len() < self.retain {
            free.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_render_line_shape() {
        let record = Record {
            timestamp: "2026/08/07 10:30:45".to_string(),
            source: "main.rs:12".to_string(),
            message: "service started".to_string(),
            level: Level::Info,
        };
        assert_eq!(
            record.render(),
            "2026/08/07 10:30:45 [INFO] <main.rs:12> service started\n"
        );
    }

    #[test]
    fn test_pool_reuses_released_records() {
        let pool = RecordPool::new(4);
        let mut record = pool.acquire();
        record.message.push_str("hello");
        record.level = Level::Error;
        pool.release(record);

        let reused = pool.acquire();
        assert!(reused.message.is_empty());
        assert_eq!(reused.level, Level::Debug);
        // The released buffer kept its capacity
        assert!(reused.message.capacity() >= 5);
    }

    #[test]
    fn test_pool_retention_cap() {
        let pool = RecordPool::new(2);
        for _ in 0..5 {
            pool.release(Record::default());
        }
        assert_eq!(pool.free.lock().len(), 2);
    }

    #[test]
    fn test_pool_concurrent_acquire_release() {
        let pool = Arc::new(RecordPool::new(64));
        let mut handles = Vec::new();
        for _ in 0..4 {
            let pool = Arc::clone(&pool);
            handles.push(std::thread::spawn(move || {
                for i in 0..200 {
                    let mut record = pool.acquire();
                    record.message.push_str("msg");
                    record.source.push_str("t.rs:");
                    record.message.push_str(&i.to_string());
                    pool.release(record);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(pool.free.lock().len() <= 64);
    }
}
