use std::path::{Path, PathBuf};

use taskmaster_verify::VerifyError;

/// Directory the filesystem checks run against.
///
/// An explicit `--project-root` must be an existing directory; otherwise the
/// current working directory is used as-is, without walking upward.
pub(crate) fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf, VerifyError> {
    match explicit {
        Some(path) if path.is_dir() => Ok(path.to_path_buf()),
        Some(path) => Err(VerifyError::ProjectRootNotFound {
            path: path.to_path_buf(),
        }),
        None => Ok(std::env::current_dir()?),
    }
}
