//! Project identity: validated name, resolved location, and the base-path
//! precedence rules.

use std::fmt;
use std::path::{Path, PathBuf};

use super::DomainError;

/// Environment variable consulted when no explicit base path is given.
pub const BASE_PATH_ENV: &str = "MONOREPO_BASE_PATH";

/// Directory under the home directory used when nothing else is configured.
pub const DEFAULT_PROJECTS_DIR: &str = "Projects";

/// A validated project name.
///
/// Invariant: non-empty, and every character is alphanumeric, `-` or `_`.
/// Alphanumeric follows Unicode rules, so `café` is accepted while
/// `my app`, `../x` and `a.b` are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: raw,
                reason: "name cannot be empty".into(),
            });
        }

        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::InvalidProjectName {
                reason: format!("contains disallowed character {:?}", bad),
                name: raw,
            });
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the directory under which the project is created.
///
/// Precedence: `explicit`, then `env_value`, then `default`. Empty values are
/// treated as unset. Never fails.
pub fn resolve_base_path(
    explicit: Option<PathBuf>,
    env_value: Option<String>,
    default: PathBuf,
) -> PathBuf {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or(default)
}

/// Immutable description of the project being created.
///
/// Built once from validated input; `project_path` is always
/// `base_path / name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: ProjectName,
    base_path: PathBuf,
    project_path: PathBuf,
}

impl ProjectSpec {
    pub fn new(name: ProjectName, base_path: impl Into<PathBuf>) -> Self {
        let base_path = base_path.into();
        let project_path = base_path.join(name.as_str());
        Self {
            name,
            base_path,
            project_path,
        }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}

/// Result of preparing the project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepareOutcome {
    /// Directory exists and holds only `frontend/` and `backend/`.
    Ready,
    /// An existing directory was found and the user declined to replace it.
    Cancelled,
}
