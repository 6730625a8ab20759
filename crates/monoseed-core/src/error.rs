//! Unified error handling for Monoseed Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Monoseed Core operations.
///
/// This enum wraps all possible errors that can occur when using monoseed-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum MonoseedError {
    /// Errors from the domain layer (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl MonoseedError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Captured stderr of a failed external command, if this error carries one.
    pub fn command_stderr(&self) -> Option<&str> {
        match self {
            Self::Application(ApplicationError::CommandFailed { stderr, .. }) => {
                Some(stderr.as_str())
            }
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    ExternalCommand,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type MonoseedResult<T> = Result<T, MonoseedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_exposes_stderr() {
        let err: MonoseedError = ApplicationError::CommandFailed {
            label: "Install backend tooling".into(),
            command: "uv add --dev ruff".into(),
            exit_code: Some(2),
            stderr: "error: network unreachable".into(),
        }
        .into();

        assert_eq!(err.command_stderr(), Some("error: network unreachable"));
        assert_eq!(err.category(), ErrorCategory::ExternalCommand);
    }

    #[test]
    fn invalid_name_is_validation() {
        let err: MonoseedError = DomainError::InvalidProjectName {
            name: "my app".into(),
            reason: "contains ' '".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.command_stderr().is_none());
    }
}
