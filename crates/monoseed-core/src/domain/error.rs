// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use super::state::SetupState;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported by value through every layer)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Invalid compiler configuration: {reason}")]
    InvalidCompilerConfig { reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Illegal setup transition: {from} -> {to}")]
    IllegalTransition { from: SetupState, to: SetupState },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Project name should only contain letters, numbers, hyphens, and underscores"
                    .into(),
                "Example: monoseed my-app".into(),
            ],
            Self::InvalidCompilerConfig { reason } => vec![
                "frontend/tsconfig.json could not be patched".into(),
                format!("Details: {}", reason),
                "Check the file generated by create-next-app".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the project root", path),
            ],
            Self::IllegalTransition { .. } => {
                vec!["This appears to be a bug in the setup sequence".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::InvalidCompilerConfig { .. } => ErrorCategory::Validation,
            Self::IllegalTransition { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
