//! Template identity and rendering context.
//!
//! Template bodies are opaque to the core; it only knows which file each
//! key lands in and which variables a body may reference.

use std::collections::HashMap;
use std::fmt;

/// Every file the setup emits. The catalog must provide a body for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    // Repository root
    RootGitignore,
    VscodeSettings,
    RootReadme,

    // Backend
    BackendAppInit,
    BackendMain,
    BackendPyproject,
    BackendReadme,
    BackendCoreInit,
    BackendConfig,
    BackendBucket,
    BackendEnvExample,
    BackendDatabaseInit,
    BackendModelsInit,
    BackendModelBase,
    BackendProfilesModel,
    BackendSession,
    BackendDatabaseReadme,
    BackendApiInit,
    BackendRoutersInit,
    BackendProfilesRouter,
    BackendAlembicEnv,

    // Frontend
    FrontendPrettierrc,
    FrontendEslintrc,
    FrontendEnvExample,
    FrontendSupabaseClient,
    FrontendApiIndex,
    FrontendProfileTypes,
    FrontendProfileApi,
    FrontendUseAuth,
    FrontendQueryProvider,
    FrontendLoginForm,
    FrontendLoginPage,
    FrontendLayout,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 33] = [
        Self::RootGitignore,
        Self::VscodeSettings,
        Self::RootReadme,
        Self::BackendAppInit,
        Self::BackendMain,
        Self::BackendPyproject,
        Self::BackendReadme,
        Self::BackendCoreInit,
        Self::BackendConfig,
        Self::BackendBucket,
        Self::BackendEnvExample,
        Self::BackendDatabaseInit,
        Self::BackendModelsInit,
        Self::BackendModelBase,
        Self::BackendProfilesModel,
        Self::BackendSession,
        Self::BackendDatabaseReadme,
        Self::BackendApiInit,
        Self::BackendRoutersInit,
        Self::BackendProfilesRouter,
        Self::BackendAlembicEnv,
        Self::FrontendPrettierrc,
        Self::FrontendEslintrc,
        Self::FrontendEnvExample,
        Self::FrontendSupabaseClient,
        Self::FrontendApiIndex,
        Self::FrontendProfileTypes,
        Self::FrontendProfileApi,
        Self::FrontendUseAuth,
        Self::FrontendQueryProvider,
        Self::FrontendLoginForm,
        Self::FrontendLoginPage,
        Self::FrontendLayout,
    ];

    /// Destination, relative to the project root.
    pub const fn path(self) -> &'static str {
        match self {
            Self::RootGitignore => ".gitignore",
            Self::VscodeSettings => ".vscode/settings.json",
            Self::RootReadme => "README.md",

            Self::BackendAppInit => "backend/src/app/__init__.py",
            Self::BackendMain => "backend/src/app/main.py",
            Self::BackendPyproject => "backend/pyproject.toml",
            Self::BackendReadme => "backend/README.md",
            Self::BackendCoreInit => "backend/src/app/core/__init__.py",
            Self::BackendConfig => "backend/src/app/core/config.py",
            Self::BackendBucket => "backend/src/app/core/bucket.py",
            Self::BackendEnvExample => "backend/.env.example",
            Self::BackendDatabaseInit => "backend/src/app/database/__init__.py",
            Self::BackendModelsInit => "backend/src/app/database/models/__init__.py",
            Self::BackendModelBase => "backend/src/app/database/models/base.py",
            Self::BackendProfilesModel => "backend/src/app/database/models/profiles.py",
            Self::BackendSession => "backend/src/app/database/session.py",
            Self::BackendDatabaseReadme => "backend/src/app/database/README.md",
            Self::BackendApiInit => "backend/src/app/api/__init__.py",
            Self::BackendRoutersInit => "backend/src/app/api/routers/__init__.py",
            Self::BackendProfilesRouter => "backend/src/app/api/routers/profiles.py",
            Self::BackendAlembicEnv => "backend/src/app/database/alembic/env.py",

            Self::FrontendPrettierrc => "frontend/.prettierrc",
            Self::FrontendEslintrc => "frontend/.eslintrc.json",
            Self::FrontendEnvExample => "frontend/.env.local.example",
            Self::FrontendSupabaseClient => "frontend/src/lib/supabase.ts",
            Self::FrontendApiIndex => "frontend/src/api/index.ts",
            Self::FrontendProfileTypes => "frontend/src/api/profiles/profileApiTypes.ts",
            Self::FrontendProfileApi => "frontend/src/api/profiles/profileApi.ts",
            Self::FrontendUseAuth => "frontend/src/hooks/useAuth.ts",
            Self::FrontendQueryProvider => "frontend/src/providers/ReactQueryProvider.tsx",
            Self::FrontendLoginForm => "frontend/src/components/LoginForm.tsx",
            Self::FrontendLoginPage => "frontend/src/app/login/page.tsx",
            Self::FrontendLayout => "frontend/src/app/layout.tsx",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Variables available to template bodies as `{{NAME}}`.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        let mut variables = HashMap::new();
        variables.insert("PROJECT_NAME".into(), project_name);
        Self { variables }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every known `{{KEY}}`. Unknown placeholders are left as-is
    /// so bodies may carry their own brace syntax (JSX, f-strings).
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }
}
