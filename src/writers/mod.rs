//! Writer implementations

pub mod batch;
pub mod console;
pub mod file;
pub mod tcp;

pub use batch::BatchWriter;
pub use console::ConsoleWriter;
pub use file::FileWriter;
pub use tcp::TcpWriter;

// Re-export the contract traits alongside the implementations
pub use crate::core::{Flusher, Rotater, Writer};
