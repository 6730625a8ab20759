//! Command runner adapters.

mod recording;
mod shell;

pub use recording::{RecordedCommand, RecordingRunner};
pub use shell::ShellCommandRunner;
