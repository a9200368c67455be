//! TCP writer with a private background sender thread
//!
//! `write()` only renders the record and places it on the writer's own
//! bounded queue; a daemon thread owns the socket and absorbs send latency,
//! so a slow peer delays this sink without stalling the dispatcher for long.
//! A full queue blocks `write()` until the daemon drains room.

use crate::core::{Level, LogError, Record, Result, Writer};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::io::Write as _;
use std::net::TcpStream;
use std::thread;
use std::time::Duration;

const DEFAULT_QUEUE_SIZE: usize = 1024;
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

pub struct TcpWriter {
    level: Level,
    addr: String,
    queue_size: usize,
    queue: Option<Sender<String>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl TcpWriter {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            level: Level::Debug,
            addr: addr.into(),
            queue_size: DEFAULT_QUEUE_SIZE,
            queue: None,
            handle: None,
        }
    }

    /// Set this writer's severity threshold.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the capacity of the private send queue.
    #[must_use]
    pub fn with_queue_size(mut self, size: usize) -> Self {
        self.queue_size = size.max(1);
        self
    }

    fn connect(addr: &str) -> std::io::Result<TcpStream> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;
        stream.set_write_timeout(Some(SEND_TIMEOUT))?;
        Ok(stream)
    }
}

impl Writer for TcpWriter {
    fn init(&mut self) -> Result<()> {
        let stream = Self::connect(&self.addr)?;
        let (tx, rx) = bounded(self.queue_size);
        let addr = self.addr.clone();
        self.handle = Some(thread::spawn(move || daemon(stream, rx, addr)));
        self.queue = Some(tx);
        Ok(())
    }

    fn write(&mut self, record: &Record) -> Result<()> {
        if record.level < self.level {
            return Ok(());
        }
        let queue = self
            .queue
            .as_ref()
            .ok_or_else(|| LogError::writer("tcp writer not initialized"))?;
        queue
            .send(record.render())
            .map_err(|_| LogError::writer("tcp sender daemon terminated"))
    }

    fn name(&self) -> &str {
        "tcp"
    }
}

impl Drop for TcpWriter {
    fn drop(&mut self) {
        // Closing the queue lets the daemon drain what is buffered and exit.
        drop(self.queue.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Owns the socket: drains the queue, reconnecting once per failed line.
fn daemon(mut stream: TcpStream, lines: Receiver<String>, addr: String) {
    for line in lines.iter() {
        if stream.write_all(line.as_bytes()).is_ok() {
            continue;
        }
        match TcpWriter::connect(&addr) {
            Ok(fresh) => {
                stream = fresh;
                if let Err(err) = stream.write_all(line.as_bytes()) {
                    eprintln!("[fanlog] tcp writer: resend to {} failed: {}", addr, err);
                }
            }
            Err(err) => {
                eprintln!(
                    "[fanlog] tcp writer: reconnect to {} failed, dropping record: {}",
                    addr, err
                );
            }
        }
    }
}
