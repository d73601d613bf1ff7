use clap::Parser;
use std::path::PathBuf;

use crate::config;

/// Returns the version string, with git hash and commit date when built from
/// a checkout: "0.3.1" from a release tarball, "0.3.1@abc1234 2024-01-15 14:30"
/// otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tagsmith", bin_name = "tagsmith", version = get_version())]
#[command(
    about = "Builds a normalized tags.json from component metadata descriptors",
    long_about = None
)]
pub struct Cli {
    /// Repository to clone the metadata tree from
    #[arg(long, default_value = config::DEFAULT_REPO_URL)]
    pub repo_url: String,

    /// Read descriptors from an existing local directory instead of cloning
    #[arg(long, value_name = "DIR", conflicts_with = "repo_url")]
    pub source_dir: Option<PathBuf>,

    /// Scratch directory the repository is cloned into
    #[arg(long, value_name = "DIR", default_value = "tmp")]
    pub work_dir: PathBuf,

    /// Directory the generated document is written into
    #[arg(long, value_name = "DIR", default_value = "dist")]
    pub out_dir: PathBuf,

    /// Verbose output (debug-level logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_original_layout() {
        let cli = Cli::parse_from(["tagsmith"]);
        assert_eq!(cli.repo_url, config::DEFAULT_REPO_URL);
        assert_eq!(cli.work_dir, PathBuf::from("tmp"));
        assert_eq!(cli.out_dir, PathBuf::from("dist"));
        assert!(cli.source_dir.is_none());
    }

    #[test]
    fn source_dir_conflicts_with_repo_url() {
        let result = Cli::try_parse_from([
            "tagsmith",
            "--repo-url",
            "https://example.com/repo",
            "--source-dir",
            "descriptors",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["tagsmith", "-v", "-q"]).is_err());
    }
}
