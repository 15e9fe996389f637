use std::path::{Path, PathBuf};

use crate::error::LayoutError;
use crate::layout::ProjectLayout;

pub struct LinterConfig {
    pub root_dir: PathBuf,
    pub layout: ProjectLayout,
}

impl LinterConfig {
    /// Built-in Flutter layout rooted at `root`.
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            layout: ProjectLayout::flutter_default(),
        }
    }

    /// Custom layout rooted at `root`. Rejects layouts whose paths would
    /// resolve to the root itself or outside it.
    pub fn with_layout(root: &Path, layout: ProjectLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        Ok(Self {
            root_dir: root.to_path_buf(),
            layout,
        })
    }

    /// Root at the current working directory. No upward search: the project
    /// root is wherever the tool is invoked.
    pub fn current() -> Result<Self, LayoutError> {
        let dir = std::env::current_dir().map_err(LayoutError::WorkingDir)?;
        Ok(Self::from_root(&dir))
    }

    /// Resolve a root-relative layout path.
    pub fn resolve(&self, rel: &str) -> PathBuf {
        self.root_dir.join(rel)
    }
}
