//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving a setup.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A hard-fail command exited non-zero or could not be started.
    #[error("{label} failed: `{command}` {}", describe_exit(.exit_code))]
    CommandFailed {
        label: String,
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The platform shell could not be started for a command.
    #[error("Could not start `{command}`: {reason}")]
    SpawnFailed { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Reading the user's answer failed.
    #[error("Could not read confirmation: {reason}")]
    ConfirmationFailed { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("In-memory store lock poisoned")]
    StoreLockError,
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "did not exit normally".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandFailed { command, .. } => {
                let tool = command.split_whitespace().next().unwrap_or_default();
                vec![
                    format!("Check that `{}` is installed and on your PATH", tool),
                    format!("Re-run the command by hand to inspect it: {}", command),
                    "The partially created project was left on disk".into(),
                ]
            }
            Self::SpawnFailed { command, .. } => vec![
                format!("Could not launch: {}", command),
                "Check that a system shell is available".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ConfirmationFailed { .. } => {
                vec!["Pass --yes to replace the directory without prompting".into()]
            }
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } | Self::SpawnFailed { .. } => {
                ErrorCategory::ExternalCommand
            }
            Self::FilesystemError { .. } | Self::ConfirmationFailed { .. } => {
                ErrorCategory::Filesystem
            }
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_message_names_command_and_status() {
        let err = ApplicationError::CommandFailed {
            label: "Create virtual environment".into(),
            command: "uv venv".into(),
            exit_code: Some(2),
            stderr: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "Create virtual environment failed: `uv venv` exited with status 2"
        );
        assert!(err.suggestions()[0].contains("`uv`"));
    }

    #[test]
    fn signal_termination_is_described() {
        let err = ApplicationError::CommandFailed {
            label: "Sync".into(),
            command: "uv sync".into(),
            exit_code: None,
            stderr: String::new(),
        };
        assert!(err.to_string().ends_with("did not exit normally"));
    }
}
