//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "monoseed",
    bin_name = "monoseed",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bootstrap a FastAPI + Next.js monorepo",
    long_about = "Monoseed creates a project directory with a uv-managed FastAPI \
                  backend and a Next.js frontend, runs the package managers, \
                  and writes the starter application code.",
    after_help = "EXAMPLES:\n\
        \x20 monoseed my-app\n\
        \x20 monoseed my-app --base-path ~/work\n\
        \x20 MONOREPO_BASE_PATH=/srv/projects monoseed my-app --yes\n\
        \x20 monoseed my-app --dry-run",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub setup: SetupArgs,
}

/// What to create and where.
#[derive(Debug, Clone, Args)]
pub struct SetupArgs {
    /// Name of the project directory to create.
    #[arg(
        value_name = "PROJECT_NAME",
        help = "Project name (letters, digits, '-' and '_')"
    )]
    pub project_name: String,

    /// Directory the project is created under.
    ///
    /// Falls back to `MONOREPO_BASE_PATH`, then the configured default,
    /// then `~/Projects`.
    #[arg(
        short = 'b',
        long = "base-path",
        value_name = "DIR",
        help = "Directory to create the project in"
    )]
    pub base_path: Option<PathBuf>,

    /// Replace an existing project directory without asking.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Answer yes to the overwrite prompt"
    )]
    pub yes: bool,

    /// Print the plan without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be done without doing it")]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_name_and_base_path() {
        let cli = Cli::parse_from(["monoseed", "shop", "--base-path", "/srv/projects"]);
        assert_eq!(cli.setup.project_name, "shop");
        assert_eq!(cli.setup.base_path, Some(PathBuf::from("/srv/projects")));
        assert!(!cli.setup.yes);
        assert!(!cli.setup.dry_run);
    }

    #[test]
    fn base_path_is_optional() {
        let cli = Cli::parse_from(["monoseed", "shop"]);
        assert_eq!(cli.setup.base_path, None);
    }

    #[test]
    fn global_flags_parse_after_name() {
        let cli = Cli::parse_from(["monoseed", "shop", "-vv", "--yes", "--dry-run"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.setup.yes);
        assert!(cli.setup.dry_run);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["monoseed", "--quiet", "--verbose", "shop"]);
        assert!(result.is_err());
    }

    #[test]
    fn project_name_is_required() {
        assert!(Cli::try_parse_from(["monoseed", "--yes"]).is_err());
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["monoseed", "shop", "extra"]).is_err());
    }
}
