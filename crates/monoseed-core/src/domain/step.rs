//! Steps are data: what to do, where, and how a failure is treated.

use std::fmt;

use super::{RelativePath, TemplateKey};

/// How the sequencer reacts when a step's command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole run.
    HardFail,
    /// Log, record and continue.
    SoftFail,
}

/// An external command line, executed through the platform shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub line: String,
    /// Working directory relative to the project root.
    pub cwd: RelativePath,
    /// Bytes written to the child's stdin before waiting on it.
    pub stdin: Option<String>,
}

impl CommandSpec {
    pub fn new(line: impl Into<String>, cwd: impl Into<RelativePath>) -> Self {
        Self {
            line: line.into(),
            cwd: cwd.into(),
            stdin: None,
        }
    }

    pub fn at_root(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            cwd: RelativePath::root(),
            stdin: None,
        }
    }

    pub fn with_stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Outcome of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self {
            exit_code: Some(0),
            ..Self::default()
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    Run(CommandSpec),
    Emit(TemplateKey),
    /// Delete a generator artifact; absent files are fine.
    Remove(RelativePath),
    /// Rewrite `compilerOptions` of the given tsconfig; skipped if absent.
    PatchCompilerConfig(RelativePath),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub action: StepAction,
    pub policy: FailurePolicy,
}

impl Step {
    pub fn run(label: impl Into<String>, command: CommandSpec) -> Self {
        Self {
            label: label.into(),
            action: StepAction::Run(command),
            policy: FailurePolicy::HardFail,
        }
    }

    pub fn emit(key: TemplateKey) -> Self {
        Self {
            label: format!("Create {}", key.path()),
            action: StepAction::Emit(key),
            policy: FailurePolicy::HardFail,
        }
    }

    pub fn remove(path: impl Into<RelativePath>) -> Self {
        let path = path.into();
        Self {
            label: format!("Remove {}", path),
            action: StepAction::Remove(path),
            policy: FailurePolicy::HardFail,
        }
    }

    pub fn patch_compiler_config(path: impl Into<RelativePath>) -> Self {
        let path = path.into();
        Self {
            label: format!("Patch {}", path),
            action: StepAction::PatchCompilerConfig(path),
            policy: FailurePolicy::HardFail,
        }
    }

    pub fn soft(mut self) -> Self {
        self.policy = FailurePolicy::SoftFail;
        self
    }

    pub fn command(&self) -> Option<&CommandSpec> {
        match &self.action {
            StepAction::Run(cmd) => Some(cmd),
            _ => None,
        }
    }
}

/// Executable names of the external tools the plan invokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub git: String,
    pub uv: String,
    pub npm: String,
    pub npx: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            git: "git".into(),
            uv: "uv".into(),
            npm: "npm".into(),
            npx: "npx".into(),
        }
    }
}
