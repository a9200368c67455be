//! Configuration layer: build and register writers from serde data
//!
//! Mirrors the shape an embedding application deserializes from its own
//! config file: one global level plus one optional section per writer, each
//! carrying `enable` and its own threshold override.

use crate::core::{Level, LogError, Logger, Result};
use crate::writers::{ConsoleWriter, FileWriter, TcpWriter};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_queue_size() -> usize {
    1024
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enable: bool,
    pub level: String,
    pub color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enable: bool,
    pub level: String,
    /// strftime path pattern, e.g. `logs/app-%Y%m%d.log`
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpConfig {
    pub enable: bool,
    pub level: String,
    pub addr: String,
    #[serde(default = "default_queue_size")]
    pub queue_size: usize,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            enable: false,
            level: String::new(),
            addr: String::new(),
            queue_size: default_queue_size(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Fallback threshold for writers without their own `level`
    pub level: String,
    pub full_path: bool,
    pub console: ConsoleConfig,
    pub file: FileConfig,
    pub tcp: TcpConfig,
}

/// Parse a level string, falling back to `default` with a diagnostic when
/// the value is empty or unknown.
fn parse_level(flag: &str, default: Level) -> Level {
    if flag.trim().is_empty() {
        return default;
    }
    match flag.parse() {
        Ok(level) => level,
        Err(_) => {
            eprintln!(
                "[fanlog] unknown log level '{}', using {}",
                flag, default
            );
            default
        }
    }
}

/// Register every enabled writer from `config` on `logger`.
///
/// A writer that fails to initialize aborts the whole setup; startup should
/// treat that as fatal.
pub fn setup(logger: &mut Logger, config: LogConfig) -> Result<()> {
    let global_level = parse_level(&config.level, Level::Debug);
    logger.show_full_path(config.full_path);

    if config.console.enable {
        let writer = ConsoleWriter::new()
            .with_level(parse_level(&config.console.level, global_level))
            .with_color(config.console.color);
        logger.register(Box::new(writer))?;
    }

    if config.file.enable {
        if config.file.path.is_empty() {
            return Err(LogError::config("FileWriter", "missing path"));
        }
        let writer = FileWriter::new(config.file.path.as_str())
            .with_level(parse_level(&config.file.level, global_level));
        logger.register(Box::new(writer))?;
    }

    if config.tcp.enable {
        if config.tcp.addr.is_empty() {
            return Err(LogError::config("TcpWriter", "missing addr"));
        }
        let writer = TcpWriter::new(config.tcp.addr.as_str())
            .with_level(parse_level(&config.tcp.level, global_level))
            .with_queue_size(config.tcp.queue_size);
        logger.register(Box::new(writer))?;
    }

    Ok(())
}

/// Deserialize a JSON [`LogConfig`] from `path` and apply it.
pub fn setup_from_file(logger: &mut Logger, path: impl AsRef<Path>) -> Result<()> {
    let text = std::fs::read_to_string(path)?;
    let config: LogConfig = serde_json::from_str(&text)?;
    setup(logger, config)
}
