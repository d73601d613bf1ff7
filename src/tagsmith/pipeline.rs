//! End-to-end run: clean slate, fetch, collect, assemble, persist.
//!
//! Every stage is fail-fast. The document is written only after every
//! descriptor in the directory processed cleanly; there is no partial
//! output and no per-file recovery.

use crate::collect;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::output;
use crate::workspace;
use log::info;
use std::path::PathBuf;

/// Run the whole generation pipeline and return the path of the written
/// document.
pub fn run(config: &Config, fetcher: &dyn Fetcher) -> Result<PathBuf> {
    info!("starting tags build");

    // 1. Clean slate for the output. The fetch area is the fetcher's to
    //    manage: a fetcher that populates the workspace resets it first,
    //    one that reads from an existing directory never touches it.
    workspace::reset(&config.out_dir)?;

    // 2. Obtain the descriptor directory.
    let descriptor_dir = fetcher.fetch(&config.work_dir)?;

    // 3. Transform every descriptor, then wrap and persist.
    let tags = collect::collect_tags(&descriptor_dir)?;
    let document = output::assemble(tags);

    let target = config.target_path();
    output::write_document(&config.out_dir, &target, &document)?;

    info!("definition file is {}", target.display());
    Ok(target)
}
