//! Working-directory lifecycle. Every run starts from a clean slate, so the
//! previous run's clone and output never leak into the next one.

use crate::error::{Result, TagsmithError};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Remove `dir` and everything under it. A directory that does not exist is
/// already clean.
pub fn reset(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("{} does not exist, nothing to remove", dir.display());
        return Ok(());
    }

    info!("removing {}", dir.display());
    fs::remove_dir_all(dir).map_err(|e| {
        TagsmithError::Workspace(format!("could not remove {}: {}", dir.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_removes_a_populated_tree() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("work");
        fs::create_dir_all(target.join("nested/deeper")).unwrap();
        fs::write(target.join("nested/file.json"), "{}").unwrap();

        reset(&target).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn reset_of_a_missing_directory_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        reset(&dir.path().join("never-created")).unwrap();
    }
}
