//! Project directory preparation.

use tracing::{info, instrument};

use crate::{
    application::ports::{Confirmation, Filesystem},
    domain::{PrepareOutcome, ProjectSpec},
    error::MonoseedResult,
};

/// Subdirectories every prepared project starts with.
pub const SERVICE_DIRS: [&str; 2] = ["frontend", "backend"];

/// Creates the top-level layout, asking before replacing an existing
/// directory.
pub struct ProjectTree<'a> {
    filesystem: &'a dyn Filesystem,
    confirmation: &'a dyn Confirmation,
}

impl<'a> ProjectTree<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, confirmation: &'a dyn Confirmation) -> Self {
        Self {
            filesystem,
            confirmation,
        }
    }

    /// Ensure `spec.project_path()` exists holding only `frontend/` and
    /// `backend/`.
    ///
    /// An existing directory is removed only after the user agrees; on a
    /// "no" nothing on disk changes and `Cancelled` is returned.
    #[instrument(skip_all, fields(path = %spec.project_path().display()))]
    pub fn prepare(&self, spec: &ProjectSpec) -> MonoseedResult<PrepareOutcome> {
        let root = spec.project_path();

        if self.filesystem.exists(root) {
            let prompt = format!("Directory {} already exists. Remove it?", root.display());
            if !self.confirmation.confirm(&prompt)? {
                info!("Existing directory kept, setup cancelled");
                return Ok(PrepareOutcome::Cancelled);
            }

            info!("Removing existing directory");
            self.filesystem.remove_dir_all(root)?;
        }

        if !self.filesystem.exists(spec.base_path()) {
            info!(base = %spec.base_path().display(), "Creating base directory");
        }

        self.filesystem.create_dir_all(root)?;
        for dir in SERVICE_DIRS {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }

        Ok(PrepareOutcome::Ready)
    }
}
