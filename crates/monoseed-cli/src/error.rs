//! Error handling for the Monoseed CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Captured output of the external command that failed
//! - Exit code mapping

use std::error::Error;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use monoseed_core::error::MonoseedError;

pub use monoseed_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `monoseed-core`.
    #[error("{0}")]
    Core(#[from] MonoseedError),

    /// An I/O operation of the CLI itself failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Override single values with MONOSEED__<SECTION>__<KEY> variables".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Check that the terminal is still attached".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::ExternalCommand => ErrorCategory::ExternalCommand,
                CoreCategory::Filesystem | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category         | Code |
    /// |------------------|------|
    /// | User error       |  1   |
    /// | External command |  1   |
    /// | Internal         |  1   |
    /// | Configuration    |  4   |
    ///
    /// Argument errors exit with 2 before a `CliError` ever exists.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::ExternalCommand | ErrorCategory::Internal => 1,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Standard error of the failed external command, if any.
    fn command_output(&self) -> Option<&str> {
        match self {
            Self::Core(core) => core
                .command_stderr()
                .map(str::trim_end)
                .filter(|s| !s.is_empty()),
            _ => None,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        let _ = write!(
            output,
            "\n{} {}\n\n",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        );
        let _ = writeln!(output, "  {}", self.to_string().red());

        if let Some(stderr) = self.command_output() {
            let _ = writeln!(output, "\n{}", "Command output:".bold());
            for line in stderr.lines() {
                let _ = writeln!(output, "  {}", line.dimmed());
            }
        }

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = write!(
                    output,
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                );
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(output, "\n{}", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {suggestion}");
            }
        }

        if !verbose {
            let _ = write!(
                output,
                "\n{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`].
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nError: {self}");

        if let Some(stderr) = self.command_output() {
            out.push_str("\nCommand output:\n");
            for line in stderr.lines() {
                let _ = writeln!(out, "  {line}");
            }
        }

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::ExternalCommand => tracing::error!("Command failed: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input (project name).
    UserError,
    /// A hard-fail external tool exited unsuccessfully.
    ExternalCommand,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use monoseed_core::{application::ApplicationError, domain::ProjectName};

    fn invalid_name() -> CliError {
        let err = ProjectName::parse("bad name").unwrap_err();
        CliError::Core(err.into())
    }

    fn command_failed(stderr: &str) -> CliError {
        CliError::Core(
            ApplicationError::CommandFailed {
                label: "Install backend tooling".into(),
                command: "uv add --dev ruff".into(),
                exit_code: Some(2),
                stderr: stderr.into(),
            }
            .into(),
        )
    }

    #[test]
    fn invalid_name_exits_with_one() {
        let err = invalid_name();
        assert_eq!(err.category(), ErrorCategory::UserError);
        assert_eq!(err.exit_code(), 1);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn command_failure_exits_with_one() {
        let err = command_failed("boom");
        assert_eq!(err.category(), ErrorCategory::ExternalCommand);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn config_error_exits_with_four() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn format_plain_shows_command_stderr() {
        let s = command_failed("error: No `pyproject.toml` found\n").format_plain(false);
        assert!(s.contains("Error: Install backend tooling failed"));
        assert!(s.contains("Command output:\n  error: No `pyproject.toml` found\n"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn blank_stderr_is_not_shown() {
        let s = command_failed("  \n").format_plain(false);
        assert!(!s.contains("Command output:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = invalid_name().format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "resolving base path");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
