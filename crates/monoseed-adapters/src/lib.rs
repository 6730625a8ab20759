//! Infrastructure adapters for Monoseed.
//!
//! This crate implements the ports defined in `monoseed-core::application::ports`.
//! It contains all process spawning and I/O operations, plus in-memory
//! doubles used by the test suites.

pub mod catalog;
pub mod confirmation;
pub mod filesystem;
pub mod runner;

// Re-export commonly used adapters
pub use catalog::BuiltinCatalog;
pub use confirmation::FixedConfirmation;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use runner::{RecordedCommand, RecordingRunner, ShellCommandRunner};
