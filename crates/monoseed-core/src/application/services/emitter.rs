use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{application::ports::Filesystem, domain::RelativePath, error::MonoseedResult};

/// Writes and removes files relative to a project root.
pub struct FileEmitter<'a> {
    filesystem: &'a dyn Filesystem,
    root: &'a Path,
}

impl<'a> FileEmitter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, root: &'a Path) -> Self {
        Self { filesystem, root }
    }

    /// Create parent directories and write `content`, overwriting any
    /// existing file.
    pub fn write(&self, relative: &RelativePath, content: &str) -> MonoseedResult<PathBuf> {
        let path = relative.under(self.root);

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        debug!(path = %relative, bytes = content.len(), "Writing file");
        self.filesystem.write_file(&path, content)?;
        Ok(path)
    }

    /// Delete the file if present. Returns whether anything was removed.
    pub fn remove(&self, relative: &RelativePath) -> MonoseedResult<bool> {
        let path = relative.under(self.root);
        if !self.filesystem.exists(&path) {
            return Ok(false);
        }

        debug!(path = %relative, "Removing file");
        self.filesystem.remove_file(&path)?;
        Ok(true)
    }

    /// Contents of the file, or `None` if it was never created.
    pub fn read_existing(&self, relative: &RelativePath) -> MonoseedResult<Option<String>> {
        let path = relative.under(self.root);
        if !self.filesystem.exists(&path) {
            return Ok(None);
        }
        self.filesystem.read_file(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    #[test]
    fn write_creates_parent_first() {
        let mut seq = mockall::Sequence::new();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p: &Path| p == Path::new("/p/frontend/src/lib"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/p/frontend/src/lib/supabase.ts") && content == "x"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let emitter = FileEmitter::new(&fs, Path::new("/p"));
        let written = emitter
            .write(&"frontend/src/lib/supabase.ts".into(), "x")
            .unwrap();
        assert_eq!(written, PathBuf::from("/p/frontend/src/lib/supabase.ts"));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_remove_file().never();

        let emitter = FileEmitter::new(&fs, Path::new("/p"));
        assert!(!emitter.remove(&"backend/hello.py".into()).unwrap());
    }

    #[test]
    fn remove_present_deletes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_remove_file()
            .withf(|p: &Path| p == Path::new("/p/backend/main.py"))
            .times(1)
            .returning(|_| Ok(()));

        let emitter = FileEmitter::new(&fs, Path::new("/p"));
        assert!(emitter.remove(&"backend/main.py".into()).unwrap());
    }

    #[test]
    fn read_existing_reports_missing_as_none() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_file().never();

        let emitter = FileEmitter::new(&fs, Path::new("/p"));
        assert_eq!(
            emitter.read_existing(&"frontend/tsconfig.json".into()).unwrap(),
            None
        );
    }
}
