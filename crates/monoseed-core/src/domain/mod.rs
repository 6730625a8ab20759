//! Core domain layer for Monoseed.
//!
//! Pure data and rules: no filesystem, no processes, no terminal. Everything
//! that touches the outside world goes through the ports in
//! `crate::application::ports`.
//!
//! - `project`: validated name, location, base-path precedence
//! - `step` / `plan`: the declarative setup pipeline
//! - `state`: run-level state machine
//! - `template`: template keys and render context
//! - `tsconfig`: compiler-option overrides as a JSON transform

pub mod common;
pub mod error;
pub mod plan;
pub mod project;
pub mod state;
pub mod step;
pub mod template;
pub mod tsconfig;

pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use plan::{SetupPlan, Stage};
pub use project::{
    BASE_PATH_ENV, DEFAULT_PROJECTS_DIR, PrepareOutcome, ProjectName, ProjectSpec,
    resolve_base_path,
};
pub use state::SetupState;
pub use step::{CommandResult, CommandSpec, FailurePolicy, Step, StepAction, Toolchain};
pub use template::{RenderContext, TemplateKey};
pub use tsconfig::{apply_compiler_overrides, patch_compiler_config};
