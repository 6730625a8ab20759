//! Template bodies compiled into the binary.
//!
//! Bodies live under `templates/`, mirroring their destination path with a
//! `.tmpl` suffix so files like `.gitignore` stay inert in this repository.

use monoseed_core::{
    application::ports::TemplateCatalog,
    domain::{RenderContext, TemplateKey},
    error::MonoseedResult,
};

macro_rules! body {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path, ".tmpl"))
    };
}

/// Catalog backed by the bundled template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Unrendered body for `key`.
    pub fn raw(key: TemplateKey) -> &'static str {
        use TemplateKey::*;

        match key {
            RootGitignore => body!(".gitignore"),
            VscodeSettings => body!(".vscode/settings.json"),
            RootReadme => body!("README.md"),

            BackendAppInit => body!("backend/src/app/__init__.py"),
            BackendMain => body!("backend/src/app/main.py"),
            BackendPyproject => body!("backend/pyproject.toml"),
            BackendReadme => body!("backend/README.md"),
            BackendCoreInit => body!("backend/src/app/core/__init__.py"),
            BackendConfig => body!("backend/src/app/core/config.py"),
            BackendBucket => body!("backend/src/app/core/bucket.py"),
            BackendEnvExample => body!("backend/.env.example"),
            BackendDatabaseInit => body!("backend/src/app/database/__init__.py"),
            BackendModelsInit => body!("backend/src/app/database/models/__init__.py"),
            BackendModelBase => body!("backend/src/app/database/models/base.py"),
            BackendProfilesModel => body!("backend/src/app/database/models/profiles.py"),
            BackendSession => body!("backend/src/app/database/session.py"),
            BackendDatabaseReadme => body!("backend/src/app/database/README.md"),
            BackendApiInit => body!("backend/src/app/api/__init__.py"),
            BackendRoutersInit => body!("backend/src/app/api/routers/__init__.py"),
            BackendProfilesRouter => body!("backend/src/app/api/routers/profiles.py"),
            BackendAlembicEnv => body!("backend/src/app/database/alembic/env.py"),

            FrontendPrettierrc => body!("frontend/.prettierrc"),
            FrontendEslintrc => body!("frontend/.eslintrc.json"),
            FrontendEnvExample => body!("frontend/.env.local.example"),
            FrontendSupabaseClient => body!("frontend/src/lib/supabase.ts"),
            FrontendApiIndex => body!("frontend/src/api/index.ts"),
            FrontendProfileTypes => body!("frontend/src/api/profiles/profileApiTypes.ts"),
            FrontendProfileApi => body!("frontend/src/api/profiles/profileApi.ts"),
            FrontendUseAuth => body!("frontend/src/hooks/useAuth.ts"),
            FrontendQueryProvider => body!("frontend/src/providers/ReactQueryProvider.tsx"),
            FrontendLoginForm => body!("frontend/src/components/LoginForm.tsx"),
            FrontendLoginPage => body!("frontend/src/app/login/page.tsx"),
            FrontendLayout => body!("frontend/src/app/layout.tsx"),
        }
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn render(&self, key: TemplateKey, context: &RenderContext) -> MonoseedResult<String> {
        Ok(context.render(Self::raw(key)))
    }
}
