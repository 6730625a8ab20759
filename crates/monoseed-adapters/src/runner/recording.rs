//! In-memory command runner for testing.
//!
//! Records every invocation instead of spawning a process. Failures can be
//! injected by position or by substring, and hooks can fake what a tool
//! would have written (e.g. `uv init` leaving `hello.py` behind).

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use monoseed_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandResult, CommandSpec},
    error::MonoseedResult,
};

type Hook = Arc<dyn Fn(&Path) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub line: String,
    pub cwd: PathBuf,
    pub stdin: Option<String>,
}

#[derive(Clone, Default)]
pub struct RecordingRunner {
    state: Arc<Mutex<RecordingState>>,
}

#[derive(Default)]
struct RecordingState {
    calls: Vec<RecordedCommand>,
    fail_at: Option<usize>,
    fail_when: Vec<(String, CommandResult)>,
    hooks: Vec<(String, Hook)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `n`-th attempted command (1-based) exits with status 1.
    pub fn fail_at(self, n: usize) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.fail_at = Some(n);
        }
        self
    }

    /// Any command whose line contains `needle` returns `result`.
    pub fn fail_when(self, needle: impl Into<String>, result: CommandResult) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.fail_when.push((needle.into(), result));
        }
        self
    }

    /// After a successful command containing `needle`, call `hook` with its
    /// working directory.
    pub fn on_command(
        self,
        needle: impl Into<String>,
        hook: impl Fn(&Path) + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.hooks.push((needle.into(), Arc::new(hook)));
        }
        self
    }

    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.state
            .lock()
            .map(|s| s.calls.clone())
            .unwrap_or_default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.line).collect()
    }
}

impl fmt::Debug for RecordingRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingRunner")
            .field("calls", &self.calls().len())
            .finish_non_exhaustive()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> MonoseedResult<CommandResult> {
        let (result, hooks) = {
            let mut state = self
                .state
                .lock()
                .map_err(|_| ApplicationError::StoreLockError)?;

            state.calls.push(RecordedCommand {
                line: command.line.clone(),
                cwd: cwd.to_path_buf(),
                stdin: command.stdin.clone(),
            });
            let attempt = state.calls.len();

            let result = if state.fail_at == Some(attempt) {
                CommandResult::failed(1, format!("injected failure at command {}", attempt))
            } else {
                state
                    .fail_when
                    .iter()
                    .find(|(needle, _)| command.line.contains(needle.as_str()))
                    .map(|(_, result)| result.clone())
                    .unwrap_or_else(CommandResult::ok)
            };

            let hooks: Vec<Hook> = state
                .hooks
                .iter()
                .filter(|(needle, _)| command.line.contains(needle.as_str()))
                .map(|(_, hook)| Arc::clone(hook))
                .collect();

            (result, hooks)
        };

        if result.success() {
            for hook in hooks {
                hook(cwd);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn records_in_order() {
        let runner = RecordingRunner::new();
        runner
            .run(&CommandSpec::at_root("git init"), Path::new("/p"))
            .unwrap();
        runner
            .run(
                &CommandSpec::new("uv venv", "backend").with_stdin("y\n"),
                Path::new("/p/backend"),
            )
            .unwrap();

        let calls = runner.calls();
        assert_eq!(runner.lines(), vec!["git init", "uv venv"]);
        assert_eq!(calls[1].cwd, PathBuf::from("/p/backend"));
        assert_eq!(calls[1].stdin.as_deref(), Some("y\n"));
    }

    #[test]
    fn fail_at_hits_only_that_attempt() {
        let runner = RecordingRunner::new().fail_at(2);
        let cmd = CommandSpec::at_root("x");
        assert!(runner.run(&cmd, Path::new("/")).unwrap().success());
        assert_eq!(runner.run(&cmd, Path::new("/")).unwrap().exit_code, Some(1));
        assert!(runner.run(&cmd, Path::new("/")).unwrap().success());
    }

    #[test]
    fn hooks_fire_on_success_only() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let runner = RecordingRunner::new()
            .fail_when("npm", CommandResult::failed(1, "E404"))
            .on_command("", move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        runner
            .run(&CommandSpec::at_root("uv init ."), Path::new("/"))
            .unwrap();
        let failed = runner
            .run(&CommandSpec::at_root("npm install"), Path::new("/"))
            .unwrap();

        assert_eq!(failed.stderr, "E404");
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
