//! Source-tree acquisition. The pipeline only needs a directory of
//! descriptor files to exist; where it comes from sits behind [`Fetcher`],
//! so tests and offline runs never touch the network.

use crate::error::{Result, TagsmithError};
use crate::workspace;
use log::info;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Makes the descriptor directory available for a run.
pub trait Fetcher {
    /// Return the directory holding the descriptor files. An implementation
    /// that populates `workspace` owns its lifecycle, including clearing the
    /// previous run's leftovers; one that does not must leave it untouched.
    fn fetch(&self, workspace: &Path) -> Result<PathBuf>;
}

/// Shallow-clones an upstream repository and points at the metadata
/// directory inside the clone.
pub struct GitFetcher {
    pub url: String,
    /// Path of the descriptor directory relative to the repository root.
    pub metadata_subdir: PathBuf,
}

impl Fetcher for GitFetcher {
    fn fetch(&self, workspace: &Path) -> Result<PathBuf> {
        // The previous run's clone must not leak into this one, and git
        // refuses to clone into a non-empty destination.
        workspace::reset(workspace)?;

        info!("cloning {} into {}", self.url, workspace.display());
        let status = Command::new("git")
            .args(["clone", "--depth", "1"])
            .arg(&self.url)
            .arg(workspace)
            .status()
            .map_err(|e| TagsmithError::Fetch {
                url: self.url.clone(),
                detail: e.to_string(),
            })?;

        if !status.success() {
            return Err(TagsmithError::Fetch {
                url: self.url.clone(),
                detail: format!("git clone exited with {}", status),
            });
        }

        info!("repository cloned");
        Ok(workspace.join(&self.metadata_subdir))
    }
}

/// Reads descriptors straight out of an existing local directory.
pub struct LocalFetcher {
    pub source: PathBuf,
}

impl Fetcher for LocalFetcher {
    fn fetch(&self, _workspace: &Path) -> Result<PathBuf> {
        if !self.source.is_dir() {
            return Err(TagsmithError::Fetch {
                url: self.source.display().to_string(),
                detail: "not a directory".to_string(),
            });
        }
        Ok(self.source.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_fetcher_returns_the_source_directory() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalFetcher {
            source: dir.path().to_path_buf(),
        };
        let resolved = fetcher.fetch(&dir.path().join("unused-workspace")).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn local_fetcher_rejects_a_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalFetcher {
            source: dir.path().join("absent"),
        };
        let err = fetcher.fetch(dir.path()).unwrap_err();
        assert!(matches!(err, TagsmithError::Fetch { .. }));
    }

    #[test]
    fn git_fetcher_clears_the_workspace_before_cloning() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = dir.path().join("clone");
        std::fs::create_dir_all(&workspace).unwrap();
        std::fs::write(workspace.join("stale.txt"), "left over").unwrap();

        let fetcher = GitFetcher {
            url: format!("file://{}", dir.path().join("no-such-repo").display()),
            metadata_subdir: PathBuf::from("metadata"),
        };

        // The clone itself fails, but the stale workspace is already gone.
        assert!(fetcher.fetch(&workspace).is_err());
        assert!(!workspace.exists());
    }

    #[test]
    fn git_fetcher_surfaces_clone_failures() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = GitFetcher {
            // file:// clone of a path that does not exist fails fast and
            // never leaves the machine.
            url: format!("file://{}", dir.path().join("no-such-repo").display()),
            metadata_subdir: PathBuf::from("metadata"),
        };
        let err = fetcher.fetch(&dir.path().join("clone")).unwrap_err();
        assert!(matches!(err, TagsmithError::Fetch { .. }));
    }
}
