//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use monoseed_core::{
    application::{ApplicationError, ports::Filesystem},
    error::MonoseedResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can keep a handle while the
/// service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> MonoseedResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write_guard(&self) -> MonoseedResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    /// Seed a file, creating its parents (testing helper).
    pub fn insert_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.add_dir_chain(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
    }

    /// A file's content, if present (testing helper).
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Names of the direct children (files and directories) of `dir`, sorted.
    pub fn children(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let dir = dir.as_ref();
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };

        let files = inner.files.keys();
        let dirs = inner.directories.iter();
        let names: BTreeSet<String> = files
            .chain(dirs)
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names.into_iter().collect()
    }
}

impl MemoryFilesystemInner {
    fn add_dir_chain(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> MonoseedResult<()> {
        self.write_guard()?.add_dir_chain(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> MonoseedResult<()> {
        let mut inner = self.write_guard()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> MonoseedResult<String> {
        self.read_guard()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "File not found".into(),
                }
                .into()
            })
    }

    fn remove_file(&self, path: &Path) -> MonoseedResult<()> {
        match self.write_guard()?.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File not found".into(),
            }
            .into()),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> MonoseedResult<()> {
        let mut inner = self.write_guard()?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), "x").unwrap();
        assert_eq!(fs.contents("/a/b.txt").as_deref(), Some("x"));
    }

    #[test]
    fn remove_dir_all_drops_nested_entries() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("/p/demo/backend/src/app/main.py", "app");
        fs.insert_file("/p/demo-other/keep.txt", "keep");

        fs.remove_dir_all(Path::new("/p/demo")).unwrap();

        assert!(!fs.exists(Path::new("/p/demo")));
        assert!(!fs.exists(Path::new("/p/demo/backend/src")));
        assert!(fs.exists(Path::new("/p/demo-other/keep.txt")));
    }

    #[test]
    fn children_lists_direct_entries_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/demo/frontend")).unwrap();
        fs.create_dir_all(Path::new("/p/demo/backend/src")).unwrap();
        fs.insert_file("/p/demo/README.md", "# demo");

        assert_eq!(fs.children("/p/demo"), vec!["README.md", "backend", "frontend"]);
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.insert_file("/x/y", "z");
        assert!(handle.exists(Path::new("/x/y")));
    }
}
