//! The fixed setup plan.
//!
//! The whole pipeline is declared here as data so it can be listed
//! (`--dry-run`), replayed against fakes, and read top to bottom in the
//! order it runs.

use super::{CommandSpec, SetupState, Step, TemplateKey, Toolchain};

/// Runtime dependencies of the backend, second install wave.
pub const BACKEND_RUNTIME_DEPS: &str = "fastapi uvicorn alembic sqlalchemy psycopg psycopg2 \
     pydantic-settings python-dotenv supabase asyncpg";

pub const FRONTEND_RUNTIME_DEPS: &str =
    "axios @supabase/supabase-js @tanstack/react-query @tanstack/react-query-devtools";

pub const FRONTEND_DEV_DEPS: &str = "@types/node prettier eslint \
     @typescript-eslint/parser @typescript-eslint/eslint-plugin";

pub const NEXT_APP_FLAGS: &str =
    "--typescript --tailwind --app --src-dir --import-alias \"@/*\" --no-eslint --turbo";

/// A named group of steps. Completing it moves the run to `reaches`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub name: &'static str,
    pub steps: Vec<Step>,
    pub reaches: SetupState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlan {
    stages: Vec<Stage>,
}

impl SetupPlan {
    pub fn new(tools: &Toolchain) -> Self {
        Self {
            stages: vec![
                repository_stage(tools),
                backend_stage(tools),
                frontend_stage(tools),
                docs_stage(),
            ],
        }
    }

    /// Build a plan from arbitrary stages. Stage targets must follow the
    /// state machine order or execution fails with an illegal transition.
    pub fn from_stages(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.stages.iter().flat_map(|s| s.steps.iter())
    }

    /// Commands in execution order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.steps().filter_map(Step::command)
    }

    pub fn emitted(&self) -> impl Iterator<Item = TemplateKey> + '_ {
        self.steps().filter_map(|s| match s.action {
            super::StepAction::Emit(key) => Some(key),
            _ => None,
        })
    }
}

fn repository_stage(tools: &Toolchain) -> Stage {
    Stage {
        name: "repository",
        steps: vec![
            Step::emit(TemplateKey::RootGitignore),
            Step::run(
                "Initialize git repository",
                CommandSpec::at_root(format!("{} init", tools.git)),
            )
            .soft(),
            Step::emit(TemplateKey::VscodeSettings),
        ],
        reaches: SetupState::VcsAttempted,
    }
}

fn backend_stage(tools: &Toolchain) -> Stage {
    let uv = &tools.uv;
    let backend = |line: String| CommandSpec::new(line, "backend");

    Stage {
        name: "backend",
        steps: vec![
            Step::run("Initialize uv project", backend(format!("{uv} init ."))),
            Step::remove("backend/.gitignore"),
            Step::remove("backend/hello.py"),
            Step::remove("backend/main.py"),
            Step::run("Create virtual environment", backend(format!("{uv} venv"))),
            Step::emit(TemplateKey::BackendAppInit),
            Step::emit(TemplateKey::BackendMain),
            Step::emit(TemplateKey::BackendPyproject),
            Step::emit(TemplateKey::BackendReadme),
            Step::run(
                "Install backend as editable package",
                backend(format!("{uv} add --editable . --dev")),
            ),
            Step::run("Add ruff", backend(format!("{uv} add --dev ruff"))),
            Step::run("Sync dev dependencies", backend(format!("{uv} sync --dev"))),
            Step::run(
                "Add backend dependencies",
                backend(format!("{uv} add {BACKEND_RUNTIME_DEPS}")),
            ),
            Step::run("Sync dependencies", backend(format!("{uv} sync --dev"))),
            Step::emit(TemplateKey::BackendCoreInit),
            Step::emit(TemplateKey::BackendConfig),
            Step::emit(TemplateKey::BackendBucket),
            Step::emit(TemplateKey::BackendEnvExample),
            Step::emit(TemplateKey::BackendDatabaseInit),
            Step::emit(TemplateKey::BackendModelsInit),
            Step::emit(TemplateKey::BackendModelBase),
            Step::emit(TemplateKey::BackendProfilesModel),
            Step::emit(TemplateKey::BackendSession),
            Step::emit(TemplateKey::BackendDatabaseReadme),
            Step::emit(TemplateKey::BackendApiInit),
            Step::emit(TemplateKey::BackendRoutersInit),
            Step::emit(TemplateKey::BackendProfilesRouter),
            Step::run(
                "Initialize alembic",
                CommandSpec::new(
                    format!("{uv} run alembic init alembic"),
                    "backend/src/app/database",
                ),
            ),
            Step::emit(TemplateKey::BackendAlembicEnv),
        ],
        reaches: SetupState::BackendReady,
    }
}

fn frontend_stage(tools: &Toolchain) -> Stage {
    let npm = &tools.npm;
    let frontend = |line: String| CommandSpec::new(line, "frontend");

    Stage {
        name: "frontend",
        steps: vec![
            Step::run(
                "Create Next.js app",
                frontend(format!(
                    "{} create-next-app@latest . {NEXT_APP_FLAGS}",
                    tools.npx
                ))
                // accepts npx's package-install prompt
                .with_stdin("y\n"),
            ),
            Step::remove("frontend/.gitignore"),
            Step::run(
                "Install frontend dependencies",
                frontend(format!("{npm} install {FRONTEND_RUNTIME_DEPS}")),
            ),
            Step::run(
                "Install frontend dev dependencies",
                frontend(format!("{npm} install -D {FRONTEND_DEV_DEPS}")),
            ),
            Step::emit(TemplateKey::FrontendPrettierrc),
            Step::emit(TemplateKey::FrontendEslintrc),
            Step::patch_compiler_config("frontend/tsconfig.json"),
            Step::emit(TemplateKey::FrontendEnvExample),
            Step::emit(TemplateKey::FrontendSupabaseClient),
            Step::emit(TemplateKey::FrontendApiIndex),
            Step::emit(TemplateKey::FrontendProfileTypes),
            Step::emit(TemplateKey::FrontendProfileApi),
            Step::emit(TemplateKey::FrontendUseAuth),
            Step::emit(TemplateKey::FrontendQueryProvider),
            Step::emit(TemplateKey::FrontendLoginForm),
            Step::emit(TemplateKey::FrontendLoginPage),
            Step::emit(TemplateKey::FrontendLayout),
        ],
        reaches: SetupState::FrontendReady,
    }
}

fn docs_stage() -> Stage {
    Stage {
        name: "docs",
        steps: vec![Step::emit(TemplateKey::RootReadme)],
        reaches: SetupState::Done,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FailurePolicy, StepAction};
    use std::collections::HashSet;

    fn plan() -> SetupPlan {
        SetupPlan::new(&Toolchain::default())
    }

    #[test]
    fn stages_walk_the_state_machine() {
        let mut state = SetupState::StructureReady;
        for stage in plan().stages() {
            state = state.transition(stage.reaches).unwrap();
        }
        assert_eq!(state, SetupState::Done);
    }

    #[test]
    fn only_git_init_is_soft() {
        let soft: Vec<_> = plan()
            .steps()
            .filter(|s| s.policy == FailurePolicy::SoftFail)
            .map(|s| s.command().map(|c| c.line.clone()))
            .collect();
        assert_eq!(soft, vec![Some("git init".to_string())]);
    }

    #[test]
    fn every_template_is_emitted_once() {
        let emitted: Vec<_> = plan().emitted().collect();
        let unique: HashSet<_> = emitted.iter().copied().collect();
        assert_eq!(emitted.len(), unique.len());
        assert_eq!(unique.len(), TemplateKey::ALL.len());
    }

    #[test]
    fn command_order_matches_pipeline() {
        let lines: Vec<_> = plan().commands().map(|c| c.line.clone()).collect();
        assert_eq!(lines[0], "git init");
        assert_eq!(lines[1], "uv init .");
        assert_eq!(lines[2], "uv venv");
        assert!(lines[5].starts_with("uv sync"));
        assert!(lines[6].ends_with("supabase asyncpg"));
        assert_eq!(lines[8], "uv run alembic init alembic");
        assert!(lines[9].starts_with("npx create-next-app@latest ."));
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn create_next_app_gets_confirmation_on_stdin() {
        let next = plan()
            .commands()
            .find(|c| c.line.contains("create-next-app"))
            .cloned()
            .unwrap();
        assert_eq!(next.stdin.as_deref(), Some("y\n"));
        assert_eq!(next.cwd.to_string(), "frontend");
    }

    #[test]
    fn backend_files_follow_their_commands() {
        let steps: Vec<_> = plan().steps().cloned().collect();
        let position = |pred: &dyn Fn(&Step) -> bool| steps.iter().position(pred).unwrap();

        let uv_init = position(&|s| s.command().is_some_and(|c| c.line == "uv init ."));
        let remove_main = position(&|s| {
            s.action == StepAction::Remove("backend/main.py".into())
        });
        let emit_main = position(&|s| s.action == StepAction::Emit(TemplateKey::BackendMain));
        let alembic = position(&|s| s.command().is_some_and(|c| c.line.contains("alembic init")));
        let alembic_env =
            position(&|s| s.action == StepAction::Emit(TemplateKey::BackendAlembicEnv));

        assert!(uv_init < remove_main && remove_main < emit_main);
        assert!(alembic < alembic_env);
    }

    #[test]
    fn toolchain_names_flow_into_commands() {
        let tools = Toolchain {
            git: "/opt/git".into(),
            uv: "uvx".into(),
            npm: "pnpm".into(),
            npx: "bunx".into(),
        };
        let plan = SetupPlan::new(&tools);
        let lines: Vec<_> = plan.commands().map(|c| c.line.as_str()).collect();
        assert_eq!(lines[0], "/opt/git init");
        assert_eq!(lines[1], "uvx init .");
        assert!(lines[9].starts_with("bunx create-next-app"));
        assert!(lines[10].starts_with("pnpm install"));
    }
}
