//! Final document assembly and persistence. Assembly is purely structural;
//! all shaping happened in the transformer.

use crate::error::{Result, TagsmithError};
use crate::model::{ComponentTag, TagsDocument};
use log::info;
use std::fs;
use std::path::Path;

/// Version of the generated document format.
const DOCUMENT_VERSION: u32 = 1;

/// Wrap the collected component tags into the versioned document shape.
pub fn assemble(tags: Vec<ComponentTag>) -> TagsDocument {
    TagsDocument {
        version: DOCUMENT_VERSION,
        tags,
    }
}

/// Serialize the document and write it to `target`, creating `out_dir`
/// first. Nothing is written until serialization succeeded, so a failed run
/// never leaves a half-formed document behind.
pub fn write_document(out_dir: &Path, target: &Path, document: &TagsDocument) -> Result<()> {
    info!("writing results to {}", target.display());

    let json = serde_json::to_string_pretty(document)?;

    fs::create_dir_all(out_dir).map_err(|e| {
        TagsmithError::Persistence(format!("could not create {}: {}", out_dir.display(), e))
    })?;
    fs::write(target, json)
        .map_err(|e| TagsmithError::Persistence(format!("{}: {}", target.display(), e)))?;

    info!("results written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn empty_collection_still_yields_a_versioned_document() {
        let document = assemble(Vec::new());
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value, json!({"version": 1, "tags": []}));
    }

    #[test]
    fn absent_optional_fields_are_omitted_not_null() {
        use crate::model::{AttributeTag, ComponentTag};

        let document = assemble(vec![ComponentTag {
            name: "oj-thing".into(),
            description: None,
            attributes: vec![AttributeTag {
                name: "value".into(),
                description: None,
                values: None,
            }],
        }]);

        let value = serde_json::to_value(&document).unwrap();
        let tag = &value["tags"][0];
        assert!(tag.get("description").is_none());
        let attribute = &tag["attributes"][0];
        assert!(attribute.get("description").is_none());
        assert!(attribute.get("values").is_none());
    }

    #[test]
    fn write_document_creates_the_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("dist");
        let target = out_dir.join("tags.json");

        write_document(&out_dir, &target, &assemble(Vec::new())).unwrap();

        let written = fs::read_to_string(&target).unwrap();
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["tags"], json!([]));
    }
}
