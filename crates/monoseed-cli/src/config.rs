//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! core crate never sees it; it only receives the derived [`Toolchain`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `MONOSEED__*` environment variables, e.g. `MONOSEED__TOOLS__UV`
//! 3. The config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use monoseed_core::domain::{DEFAULT_PROJECTS_DIR, Toolchain};

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "MONOSEED";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Replaces `~/Projects` as the last-resort base path.
    pub default_base_path: Option<PathBuf>,
    /// Executables used by the setup pipeline.
    pub tools: ToolsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub git: String,
    pub uv: String,
    pub npm: String,
    pub npx: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let tools = Toolchain::default();
        Self {
            git: tools.git,
            uv: tools.uv,
            npm: tools.npm,
            npx: tools.npx,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let source = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        Self::from_sources(source, Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    fn from_sources(
        file: File<config::FileSourceFile, config::FileFormat>,
        env: Environment,
    ) -> CliResult<Self> {
        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.monoseed.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "monoseed", "monoseed")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".monoseed.toml"))
    }

    /// Tool names handed to the setup plan.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            git: self.tools.git.clone(),
            uv: self.tools.uv.clone(),
            npm: self.tools.npm.clone(),
            npx: self.tools.npx.clone(),
        }
    }

    /// `~/Projects`, or the configured replacement.
    pub fn default_base_path(&self) -> Option<PathBuf> {
        self.default_base_path
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| home_dir().map(|home| home.join(DEFAULT_PROJECTS_DIR)))
    }
}

fn home_dir() -> Option<PathBuf> {
    directories::UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}
