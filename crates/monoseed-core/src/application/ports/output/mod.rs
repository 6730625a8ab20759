//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `monoseed-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{CommandResult, CommandSpec, RenderContext, Stage, Step, TemplateKey};
use crate::error::MonoseedResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `monoseed_adapters::filesystem::LocalFilesystem` (production)
/// - `monoseed_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All paths handed to the port are absolute; services join them onto the
/// project root.
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> MonoseedResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> MonoseedResult<()>;

    /// Read a UTF-8 file.
    fn read_file(&self, path: &Path) -> MonoseedResult<String>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> MonoseedResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> MonoseedResult<()>;
}

/// Port for running external tools.
///
/// Implemented by:
/// - `monoseed_adapters::runner::ShellCommandRunner` (production)
/// - `monoseed_adapters::runner::RecordingRunner` (testing)
///
/// A non-zero exit is a successful call returning a failed
/// [`CommandResult`]; `Err` is reserved for a process that never started.
/// Calls block until the child exits.
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> MonoseedResult<CommandResult>;
}

/// Port for template bodies.
///
/// Implemented by:
/// - `monoseed_adapters::catalog::BuiltinCatalog` (bodies compiled into the binary)
#[cfg_attr(test, automock)]
pub trait TemplateCatalog: Send + Sync {
    /// Render the body for `key` with `context`.
    fn render(&self, key: TemplateKey, context: &RenderContext) -> MonoseedResult<String>;
}

/// Port for the overwrite question asked when the project directory exists.
#[cfg_attr(test, automock)]
pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &str) -> MonoseedResult<bool>;
}

/// Progress notifications. Every method defaults to doing nothing.
pub trait ProgressReporter: Send + Sync {
    fn stage_started(&self, _stage: &Stage) {}

    fn step_started(&self, _step: &Step) {}

    fn step_finished(&self, _step: &Step) {}

    /// A soft-fail command failed and the run continues.
    fn soft_failure(&self, _step: &Step, _result: &CommandResult) {}

    /// A step was skipped, e.g. a file to patch was not generated.
    fn step_skipped(&self, _step: &Step, _reason: &str) {}
}

/// Reporter that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {}
