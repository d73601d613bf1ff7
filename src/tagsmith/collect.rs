//! Descriptor discovery: walks one directory, keeps the `.json` files,
//! parses and transforms each one.

use crate::error::{Result, TagsmithError};
use crate::model::{ComponentDescriptor, ComponentTag};
use crate::transform;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Case-insensitive `.json` suffix filter, mirroring the descriptor layout
/// of the upstream metadata tree.
fn is_descriptor_file(name: &str) -> bool {
    name.to_lowercase().ends_with(".json")
}

/// Collect the component tag for every descriptor file in `directory`.
///
/// Results are sorted by file name so the generated document is
/// reproducible regardless of filesystem enumeration order. The first
/// unreadable or malformed file fails the whole collection; there is no
/// partial result.
pub fn collect_tags(directory: &Path) -> Result<Vec<ComponentTag>> {
    info!("collecting metadata from {}", directory.display());

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if entry.file_type()?.is_file() && is_descriptor_file(name) {
            files.push(entry.path());
        }
    }
    files.sort();

    let mut tags = Vec::with_capacity(files.len());
    for file in &files {
        tags.push(process_descriptor_file(file)?);
    }

    info!("metadata collected for {} component(s)", tags.len());
    Ok(tags)
}

fn process_descriptor_file(file: &Path) -> Result<ComponentTag> {
    debug!("processing descriptor {}", file.display());

    let data = fs::read_to_string(file)?;
    let descriptor: ComponentDescriptor =
        serde_json::from_str(&data).map_err(|source| TagsmithError::MalformedDescriptor {
            file: file.to_path_buf(),
            detail: source.to_string(),
        })?;

    transform::component_tag(file, &descriptor)
}
