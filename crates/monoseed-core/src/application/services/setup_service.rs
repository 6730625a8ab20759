//! Setup Service - main application orchestrator.
//!
//! This service drives the whole bootstrap:
//! 1. Prepare the project directory (with overwrite confirmation)
//! 2. Walk the fixed `SetupPlan` stage by stage
//! 3. Apply each step's failure policy to external commands
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{
            CommandRunner, Confirmation, Filesystem, NoopReporter, ProgressReporter,
            TemplateCatalog,
        },
        services::{FileEmitter, ProjectTree},
    },
    domain::{
        CommandResult, CommandSpec, FailurePolicy, PrepareOutcome, ProjectSpec, RelativePath,
        RenderContext, SetupPlan, SetupState, Step, StepAction, Toolchain, patch_compiler_config,
    },
    error::MonoseedResult,
};

/// What a finished (or cancelled) run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub project_path: PathBuf,
    /// `Done` on success, `Cancelled` when the user kept an existing directory.
    pub state: SetupState,
    /// External commands attempted, in order.
    pub commands_run: Vec<String>,
    /// Labels of soft-fail steps whose command failed.
    pub soft_failures: Vec<String>,
    pub files_written: Vec<PathBuf>,
    pub skipped: Vec<String>,
}

impl SetupReport {
    fn new(project_path: &Path, state: SetupState) -> Self {
        Self {
            project_path: project_path.to_path_buf(),
            state,
            commands_run: Vec::new(),
            soft_failures: Vec::new(),
            files_written: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == SetupState::Cancelled
    }
}

/// Main setup service.
///
/// Sequential and blocking: one step at a time, each command waited on
/// until it exits.
pub struct SetupService {
    filesystem: Arc<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    catalog: Box<dyn TemplateCatalog>,
    confirmation: Box<dyn Confirmation>,
    reporter: Box<dyn ProgressReporter>,
    tools: Toolchain,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use monoseed_core::application::SetupService;
    /// use monoseed_core::domain::Toolchain;
    ///
    /// let service = SetupService::new(
    ///     filesystem,   // Arc<dyn Filesystem>
    ///     runner,       // Box<dyn CommandRunner>
    ///     catalog,      // Box<dyn TemplateCatalog>
    ///     confirmation, // Box<dyn Confirmation>
    ///     Toolchain::default(),
    /// );
    /// ```
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        catalog: Box<dyn TemplateCatalog>,
        confirmation: Box<dyn Confirmation>,
        tools: Toolchain,
    ) -> Self {
        Self {
            filesystem,
            runner,
            catalog,
            confirmation,
            reporter: Box::new(NoopReporter),
            tools,
        }
    }

    pub fn with_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// The plan `run` will execute.
    pub fn plan(&self) -> SetupPlan {
        SetupPlan::new(&self.tools)
    }

    /// Bootstrap the project described by `spec`.
    ///
    /// Returns a cancelled report (not an error) when the user declines to
    /// replace an existing directory. A hard-fail command aborts with
    /// `ApplicationError::CommandFailed`; whatever was created stays on disk.
    #[instrument(
        skip_all,
        fields(
            project = %spec.name(),
            path = %spec.project_path().display()
        )
    )]
    pub fn run(&self, spec: &ProjectSpec) -> MonoseedResult<SetupReport> {
        info!("Setting up monorepo");

        let state = SetupState::Init;
        let tree = ProjectTree::new(self.filesystem.as_ref(), self.confirmation.as_ref());

        match tree.prepare(spec)? {
            PrepareOutcome::Cancelled => {
                let state = state.transition(SetupState::Cancelled)?;
                return Ok(SetupReport::new(spec.project_path(), state));
            }
            PrepareOutcome::Ready => {
                state.transition(SetupState::StructureReady)?;
            }
        }

        self.execute(&self.plan(), spec)
    }

    /// Run `plan` against an already prepared project directory.
    pub fn execute(&self, plan: &SetupPlan, spec: &ProjectSpec) -> MonoseedResult<SetupReport> {
        let root = spec.project_path();
        let emitter = FileEmitter::new(self.filesystem.as_ref(), root);
        let context = RenderContext::new(spec.name().as_str());

        let mut state = SetupState::StructureReady;
        let mut report = SetupReport::new(root, state);

        for stage in plan.stages() {
            info!(stage = stage.name, "Starting stage");
            self.reporter.stage_started(stage);

            for step in &stage.steps {
                debug!(step = %step.label, "Running step");
                self.reporter.step_started(step);
                self.execute_step(step, root, &emitter, &context, &mut report)?;
                self.reporter.step_finished(step);
            }

            state = state.transition(stage.reaches)?;
            report.state = state;
        }

        info!(
            commands = report.commands_run.len(),
            files = report.files_written.len(),
            soft_failures = report.soft_failures.len(),
            "Setup completed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn execute_step(
        &self,
        step: &Step,
        root: &Path,
        emitter: &FileEmitter<'_>,
        context: &RenderContext,
        report: &mut SetupReport,
    ) -> MonoseedResult<()> {
        match &step.action {
            StepAction::Run(command) => self.run_command(step, command, root, report),
            StepAction::Emit(key) => {
                let body = self.catalog.render(*key, context)?;
                let path = RelativePath::from(key.path());
                emitter.write(&path, &body)?;
                report.files_written.push(path.into_path_buf());
                Ok(())
            }
            StepAction::Remove(path) => {
                emitter.remove(path)?;
                Ok(())
            }
            StepAction::PatchCompilerConfig(path) => {
                let Some(source) = emitter.read_existing(path)? else {
                    warn!(path = %path, "Compiler config not found, skipping patch");
                    self.reporter.step_skipped(step, "file not found");
                    report.skipped.push(step.label.clone());
                    return Ok(());
                };

                let patched = patch_compiler_config(&source)?;
                emitter.write(path, &patched)?;
                Ok(())
            }
        }
    }

    fn run_command(
        &self,
        step: &Step,
        command: &CommandSpec,
        root: &Path,
        report: &mut SetupReport,
    ) -> MonoseedResult<()> {
        let cwd = command.cwd.under(root);
        info!(command = %command, cwd = %cwd.display(), "Running command");
        report.commands_run.push(command.line.clone());

        let result = match self.runner.run(command, &cwd) {
            Ok(result) => result,
            Err(e) => CommandResult {
                exit_code: None,
                stdout: String::new(),
                stderr: e.to_string(),
            },
        };

        if result.success() {
            if !result.stdout.trim().is_empty() {
                debug!(stdout = %result.stdout.trim_end(), "Command output");
            }
            return Ok(());
        }

        match step.policy {
            FailurePolicy::HardFail => Err(ApplicationError::CommandFailed {
                label: step.label.clone(),
                command: command.line.clone(),
                exit_code: result.exit_code,
                stderr: result.stderr,
            }
            .into()),
            FailurePolicy::SoftFail => {
                warn!(
                    command = %command,
                    exit_code = ?result.exit_code,
                    stderr = %result.stderr.trim_end(),
                    "Command failed, continuing"
                );
                self.reporter.soft_failure(step, &result);
                report.soft_failures.push(step.label.clone());
                Ok(())
            }
        }
    }
}
