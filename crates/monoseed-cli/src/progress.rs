//! Live progress for the setup pipeline.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use monoseed_core::{
    application::ports::ProgressReporter,
    domain::{CommandResult, Stage, Step, StepAction},
};

use crate::output::OutputManager;

const TICK: Duration = Duration::from_millis(100);

/// Prints a header per stage and a line per step, with a spinner on
/// stderr while an external command runs.
///
/// Cheap to clone; clones share the spinner so the caller can clear it
/// after the service returns an error.
#[derive(Clone)]
pub struct TerminalReporter {
    output: OutputManager,
    state: Arc<Mutex<ReporterState>>,
}

#[derive(Default)]
struct ReporterState {
    spinner: Option<ProgressBar>,
    /// The current step already printed its own outcome.
    reported: bool,
}

impl TerminalReporter {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            state: Arc::default(),
        }
    }

    /// Clear a spinner left running by a step that never finished.
    pub fn abandon(&self) {
        self.clear_spinner();
    }

    fn clear_spinner(&self) {
        let spinner = self.state.lock().ok().and_then(|mut state| state.spinner.take());
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
    }

    fn start_spinner(&self, message: String) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("  {spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(TICK);

        if let Ok(mut state) = self.state.lock() {
            state.spinner = Some(spinner);
        }
    }

    fn mark_reported(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.reported = true;
        }
    }

    fn take_reported(&self) -> bool {
        self.state
            .lock()
            .map(|mut state| std::mem::take(&mut state.reported))
            .unwrap_or(false)
    }
}

impl ProgressReporter for TerminalReporter {
    fn stage_started(&self, stage: &Stage) {
        let _ = self.output.print("");
        let _ = self.output.header(&format!("==> {}", stage.name));
    }

    fn step_started(&self, step: &Step) {
        if self.output.is_quiet() {
            return;
        }
        if let StepAction::Run(command) = &step.action {
            self.start_spinner(format!("{} ({})", step.label, command.line));
        }
    }

    fn step_finished(&self, step: &Step) {
        self.clear_spinner();
        if !self.take_reported() {
            let _ = self.output.success(&step.label);
        }
    }

    fn soft_failure(&self, step: &Step, result: &CommandResult) {
        self.clear_spinner();
        self.mark_reported();

        let reason = result
            .stderr
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("no error output");
        let _ = self
            .output
            .warning(&format!("{} failed, continuing: {reason}", step.label));
    }

    fn step_skipped(&self, step: &Step, reason: &str) {
        self.mark_reported();
        let _ = self
            .output
            .warning(&format!("{} skipped: {reason}", step.label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use monoseed_core::domain::CommandSpec;

    use crate::{cli::GlobalArgs, config::AppConfig};

    fn reporter() -> TerminalReporter {
        let args = GlobalArgs {
            quiet: true,
            ..GlobalArgs::default()
        };
        TerminalReporter::new(OutputManager::new(&args, &AppConfig::default()))
    }

    #[test]
    fn soft_failure_suppresses_success_line_once() {
        let reporter = reporter();
        let step = Step::run("Initialize git repository", CommandSpec::at_root("git init")).soft();

        reporter.step_started(&step);
        reporter.soft_failure(&step, &CommandResult::failed(127, "\ngit: not found\n"));
        assert!(reporter.take_reported());
        assert!(!reporter.take_reported());
    }

    #[test]
    fn quiet_mode_never_starts_a_spinner() {
        let reporter = reporter();
        let step = Step::run("Create virtual environment", CommandSpec::new("uv venv", "backend"));

        reporter.step_started(&step);
        assert!(reporter.state.lock().unwrap().spinner.is_none());
        reporter.step_finished(&step);
    }

    #[test]
    fn abandon_clears_the_shared_spinner() {
        let reporter = reporter();
        let clone = reporter.clone();
        clone.start_spinner("running".into());

        reporter.abandon();
        assert!(clone.state.lock().unwrap().spinner.is_none());
    }
}
