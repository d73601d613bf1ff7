//! Run configuration. Every path and URL the pipeline touches lives here
//! and is passed in explicitly; there is no ambient global state.

use std::path::PathBuf;

/// Upstream repository the descriptor tree is cloned from by default.
pub const DEFAULT_REPO_URL: &str = "https://github.com/oracle/oraclejet";

/// Where the descriptor files sit inside the cloned repository.
pub const METADATA_SUBDIR: &str = "dist/metadata/components";

const DEFAULT_WORK_DIR: &str = "tmp";
const DEFAULT_OUT_DIR: &str = "dist";
const TARGET_FILENAME: &str = "tags.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scratch directory the source tree is fetched into. Reset by fetchers
    /// that populate it; untouched in local-source runs.
    pub work_dir: PathBuf,
    /// Directory the final document is written into. Reset on every run.
    pub out_dir: PathBuf,
    /// File name of the generated document inside `out_dir`.
    pub target_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            target_filename: TARGET_FILENAME.to_string(),
        }
    }
}

impl Config {
    /// Full path of the generated document.
    pub fn target_path(&self) -> PathBuf {
        self.out_dir.join(&self.target_filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_path_is_dist_tags_json() {
        let config = Config::default();
        assert_eq!(config.target_path(), PathBuf::from("dist/tags.json"));
    }

    #[test]
    fn target_path_follows_overrides() {
        let config = Config {
            out_dir: PathBuf::from("/srv/out"),
            ..Config::default()
        };
        assert_eq!(config.target_path(), PathBuf::from("/srv/out/tags.json"));
    }
}
