//! Monoseed Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Monoseed
//! monorepo bootstrapper, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          monoseed-cli (CLI)             │
//! │   (parses input, wires the adapters)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (SetupService, ProjectTree, FileEmitter)│
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Catalog,    │
//! │  Confirmation, ProgressReporter)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     monoseed-adapters (Infrastructure)  │
//! │ (LocalFilesystem, ShellCommandRunner,   │
//! │  BuiltinCatalog, RecordingRunner, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectSpec, Step, SetupPlan, states)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use monoseed_core::{
//!     application::SetupService,
//!     domain::{ProjectName, ProjectSpec, Toolchain},
//! };
//!
//! // 1. Validate the name and build the immutable project spec
//! let name = ProjectName::parse("my-app").unwrap();
//! let spec = ProjectSpec::new(name, "/home/me/Projects");
//!
//! // 2. Run the setup with injected adapters
//! let service = SetupService::new(filesystem, runner, catalog, confirmation, Toolchain::default());
//! service.run(&spec).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FileEmitter, ProjectTree, SetupReport, SetupService,
        ports::{CommandRunner, Confirmation, Filesystem, ProgressReporter, TemplateCatalog},
    };
    pub use crate::domain::{
        CommandResult, CommandSpec, FailurePolicy, PrepareOutcome, ProjectName, ProjectSpec,
        RenderContext, SetupPlan, SetupState, Stage, Step, StepAction, TemplateKey, Toolchain,
    };
    pub use crate::error::{MonoseedError, MonoseedResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
