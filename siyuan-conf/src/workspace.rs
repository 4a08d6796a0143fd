//! Swappable workspace root.
//!
//! The host sets the workspace root at start-up and may switch it later.
//! Every clone of a [`WorkspaceDir`] observes the latest `set`, so paths
//! derived from it (such as [`Repo::save_dir`](crate::Repo::save_dir)) follow
//! a workspace switch without being rebuilt.

use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone)]
pub struct WorkspaceDir {
    root: Arc<ArcSwap<PathBuf>>,
}

impl WorkspaceDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(ArcSwap::from_pointee(root.into())),
        }
    }

    /// Current workspace root.
    pub fn get(&self) -> Arc<PathBuf> {
        self.root.load_full()
    }

    /// Switch to another workspace root.
    pub fn set(&self, root: impl Into<PathBuf>) {
        let root = root.into();
        log::debug!("Workspace root switched to {:?}", root);
        self.root.store(Arc::new(root));
    }

    /// Join `rel` onto the current root.
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.load().join(rel)
    }
}

impl std::fmt::Debug for WorkspaceDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("WorkspaceDir").field(&*self.root.load()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_see_switch() {
        let workspace = WorkspaceDir::new("/a/b");
        let handle = workspace.clone();

        workspace.set("/x/y");
        assert_eq!(*handle.get(), PathBuf::from("/x/y"));
        assert_eq!(handle.join("data"), PathBuf::from("/x/y/data"));
    }
}
