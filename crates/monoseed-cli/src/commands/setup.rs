//! The one thing `monoseed` does: create a project.
//!
//! Responsibility: turn CLI arguments into a validated `ProjectSpec`, wire
//! the real adapters into `SetupService`, and display results. No business
//! logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use monoseed_adapters::{BuiltinCatalog, FixedConfirmation, LocalFilesystem, ShellCommandRunner};
use monoseed_core::{
    application::{SetupReport, SetupService, ports::Confirmation},
    domain::{
        BASE_PATH_ENV, DEFAULT_PROJECTS_DIR, ProjectName, ProjectSpec, SetupPlan, StepAction,
        resolve_base_path,
    },
    error::MonoseedError,
};

use crate::{
    cli::{GlobalArgs, SetupArgs},
    config::AppConfig,
    confirm::TerminalConfirmation,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    progress::TerminalReporter,
};

/// Execute a setup run.
///
/// 1. Validate the project name (nothing is touched on failure)
/// 2. Resolve the base path: `--base-path`, `MONOREPO_BASE_PATH`, config, `~/Projects`
/// 3. Print the plan and stop if `--dry-run`
/// 4. Run the pipeline with live progress
/// 5. Print a summary and next steps
#[instrument(skip_all, fields(project = %args.project_name))]
pub fn execute(
    args: SetupArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = ProjectName::parse(&args.project_name).map_err(MonoseedError::from)?;

    let base_path = resolve_location(
        args.base_path,
        std::env::var(BASE_PATH_ENV).ok(),
        &config,
    )?;
    let spec = ProjectSpec::new(name, base_path);
    let tools = config.toolchain();

    debug!(
        base = %spec.base_path().display(),
        project = %spec.project_path().display(),
        "Location resolved"
    );

    if args.dry_run {
        return show_plan(&spec, &SetupPlan::new(&tools), &output);
    }

    let confirmation: Box<dyn Confirmation> = if args.yes {
        Box::new(FixedConfirmation::yes())
    } else {
        Box::new(TerminalConfirmation::new())
    };

    let reporter = TerminalReporter::new(output.clone());
    let service = SetupService::new(
        Arc::new(LocalFilesystem::new()),
        Box::new(ShellCommandRunner::new()),
        Box::new(BuiltinCatalog::new()),
        confirmation,
        tools,
    )
    .with_reporter(Box::new(reporter.clone()));

    output.header(&format!(
        "Creating '{}' in {}",
        spec.name(),
        spec.base_path().display()
    ))?;

    let report = match service.run(&spec) {
        Ok(report) => report,
        Err(e) => {
            reporter.abandon();
            return Err(e.into());
        }
    };

    if report.is_cancelled() {
        info!("Setup cancelled by user");
        output.info("Setup cancelled.")?;
        return Ok(());
    }

    show_summary(&spec, &report, &output)?;
    if !global.quiet {
        show_next_steps(&spec, &output)?;
    }

    Ok(())
}

/// Pick the base directory and make it absolute.
///
/// Relative values are taken relative to the working directory.
fn resolve_location(
    explicit: Option<PathBuf>,
    env_value: Option<String>,
    config: &AppConfig,
) -> CliResult<PathBuf> {
    let default = config.default_base_path().unwrap_or_else(|| {
        warn!("Could not determine the home directory, using ./{DEFAULT_PROJECTS_DIR}");
        PathBuf::from(DEFAULT_PROJECTS_DIR)
    });

    let base = resolve_base_path(explicit, env_value, default);
    std::path::absolute(&base)
        .with_cli_context(|| format!("could not resolve base path {}", base.display()))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(spec: &ProjectSpec, plan: &SetupPlan, out: &OutputManager) -> CliResult<()> {
    out.info(&format!(
        "Dry run: would create '{}' at {}",
        spec.name(),
        spec.project_path().display()
    ))?;
    if spec.project_path().exists() {
        out.warning("The directory already exists and would be replaced after confirmation")?;
    }

    for stage in plan.stages() {
        out.print("")?;
        out.header(&format!("==> {}", stage.name))?;
        for step in &stage.steps {
            out.print(&format!("  {}", step.label))?;
            if let StepAction::Run(command) = &step.action {
                out.detail(&format!("      $ {command}  (in {})", command.cwd))?;
            }
        }
    }

    Ok(())
}

fn show_summary(spec: &ProjectSpec, report: &SetupReport, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.success(&format!(
        "Project '{}' created at {}",
        spec.name(),
        report.project_path.display()
    ))?;
    out.detail(&format!(
        "  {} commands run, {} files written",
        report.commands_run.len(),
        report.files_written.len()
    ))?;

    if !report.soft_failures.is_empty() {
        out.warning(&format!(
            "Some optional steps failed: {}",
            report.soft_failures.join(", ")
        ))?;
    }
    if !report.skipped.is_empty() {
        out.warning(&format!("Skipped: {}", report.skipped.join(", ")))?;
    }

    Ok(())
}

fn show_next_steps(spec: &ProjectSpec, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.header("Next steps:")?;
    for line in next_steps(spec.project_path()) {
        out.print(&format!("  {line}"))?;
    }
    Ok(())
}

fn next_steps(project: &Path) -> Vec<String> {
    vec![
        format!("cd {}", project.display()),
        "git add . && git commit -m \"Initial commit\"".into(),
        "cp backend/.env.example backend/.env".into(),
        "(cd backend && uv run uvicorn app.main:app --reload)".into(),
        "(cd frontend && npm run dev)".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_path_wins() {
        let base = resolve_location(
            Some(PathBuf::from("/srv/projects")),
            Some("/env/projects".into()),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(base, PathBuf::from("/srv/projects"));
    }

    #[test]
    fn environment_beats_config_default() {
        let config = AppConfig {
            default_base_path: Some(PathBuf::from("/configured")),
            ..AppConfig::default()
        };
        let base = resolve_location(None, Some("/env/projects".into()), &config).unwrap();
        assert_eq!(base, PathBuf::from("/env/projects"));
    }

    #[test]
    fn config_default_is_used_last() {
        let config = AppConfig {
            default_base_path: Some(PathBuf::from("/configured")),
            ..AppConfig::default()
        };
        let base = resolve_location(None, Some(String::new()), &config).unwrap();
        assert_eq!(base, PathBuf::from("/configured"));
    }

    #[test]
    fn relative_base_path_is_made_absolute() {
        let base = resolve_location(Some(PathBuf::from("work")), None, &AppConfig::default())
            .unwrap();
        assert!(base.is_absolute());
        assert!(base.ends_with("work"));
    }

    #[test]
    fn next_steps_start_in_the_project() {
        let steps = next_steps(Path::new("/srv/projects/shop"));
        assert_eq!(steps[0], "cd /srv/projects/shop");
        assert!(steps.iter().any(|s| s.contains("uvicorn app.main:app")));
        assert!(steps.iter().any(|s| s.contains("npm run dev")));
    }
}
