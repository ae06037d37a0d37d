use std::path::{Path, PathBuf};

use crate::domain::ports::PathProbe;

/// Existence checks against the local filesystem
#[derive(Debug, Clone)]
pub struct LocalPathProbe {
    root: PathBuf,
}

impl LocalPathProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PathProbe for LocalPathProbe {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, relative: &Path) -> bool {
        self.resolve(relative).exists()
    }
}
