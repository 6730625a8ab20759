//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `monoseed-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File and directory operations
//!   - `CommandRunner`: External tool invocation through the platform shell
//!   - `TemplateCatalog`: Template bodies by key
//!   - `Confirmation`: Yes/no answer for replacing an existing directory
//!   - `ProgressReporter`: Stage and step notifications for the user
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `SetupService::run`, called by the CLI

pub mod output;

pub use output::{
    CommandRunner, Confirmation, Filesystem, NoopReporter, ProgressReporter, TemplateCatalog,
};

#[cfg(test)]
pub use output::{MockCommandRunner, MockConfirmation, MockFilesystem, MockTemplateCatalog};
