use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagsmithError {
    #[error("Workspace error: {0}")]
    Workspace(String),

    #[error("Fetch of {url} failed: {detail}")]
    Fetch { url: String, detail: String },

    #[error("Malformed descriptor {}: {detail}", .file.display())]
    MalformedDescriptor { file: PathBuf, detail: String },

    #[error("Could not write results: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TagsmithError>;
