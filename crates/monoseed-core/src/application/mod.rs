//! Application layer for Monoseed.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SetupService, ProjectTree, FileEmitter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. The plan, the state machine and the tsconfig
//! transform live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{FileEmitter, ProjectTree, SetupReport, SetupService};

// Re-export port traits (for adapter implementation)
pub use ports::{
    CommandRunner, Confirmation, Filesystem, NoopReporter, ProgressReporter, TemplateCatalog,
};

pub use error::ApplicationError;
