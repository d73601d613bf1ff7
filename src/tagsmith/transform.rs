//! # Descriptor Transformation
//!
//! The heart of the tool: mapping one parsed [`ComponentDescriptor`] to one
//! [`ComponentTag`]. Three attribute passes run over the descriptor, and
//! their concatenation order is a contract of the output format:
//!
//! 1. **Plain attributes** — one per property, walking nested groups
//!    depth-first. A property that carries a nested `properties` group emits
//!    nothing itself; its children are emitted under the dotted path
//!    (`item.text` -> attribute `item-text`), after every direct attribute
//!    of the level that contains the group.
//! 2. **Change-listener attributes** — one `on-<key>-changed` per *direct*
//!    top-level property key, group or not, mirroring the flat key rather
//!    than any nested path. The description is synthesized, not copied.
//! 3. **Event attributes** — one `on-<event>` per event key.
//!
//! No pass recovers from a bad entry: a property or event value that is not
//! the expected object shape fails the whole file with
//! [`TagsmithError::MalformedDescriptor`].

use crate::error::{Result, TagsmithError};
use crate::model::{
    AttributeTag, AttributeValue, ComponentDescriptor, ComponentTag, EventDescriptor,
    PropertyDescriptor,
};
use crate::naming::normalize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;

/// Map one parsed component descriptor to its normalized tag record.
///
/// `file` is only used as error context; the transformation itself is pure.
pub fn component_tag(file: &Path, descriptor: &ComponentDescriptor) -> Result<ComponentTag> {
    let mut attributes = property_attributes(file, "", &descriptor.properties)?;
    attributes.extend(listener_attributes(&descriptor.properties));
    attributes.extend(event_attributes(file, &descriptor.events)?);

    Ok(ComponentTag {
        name: descriptor.name.clone(),
        description: descriptor.description.clone(),
        attributes,
    })
}

/// Depth-first plain-attribute walk. `prefix` is the dotted path of the
/// enclosing groups, empty at the top level.
fn property_attributes(
    file: &Path,
    prefix: &str,
    properties: &Map<String, Value>,
) -> Result<Vec<AttributeTag>> {
    let mut attributes = Vec::new();
    let mut groups: Vec<(String, Map<String, Value>)> = Vec::new();

    for (key, value) in properties {
        let property: PropertyDescriptor = parse_entry(file, "property", key, value)?;
        let qualified = qualify(prefix, key);

        if property.is_group() {
            groups.push((qualified, property.properties));
            continue;
        }

        attributes.push(AttributeTag {
            name: normalize(&qualified),
            description: property.description,
            values: property.enum_values.map(|values| {
                values
                    .into_iter()
                    .map(|name| AttributeValue { name })
                    .collect()
            }),
        });
    }

    // Children of a group land after every direct attribute of its level.
    for (path, children) in groups {
        attributes.extend(property_attributes(file, &path, &children)?);
    }

    Ok(attributes)
}

/// One synthesized `on-<key>-changed` listener per direct property key.
fn listener_attributes(properties: &Map<String, Value>) -> Vec<AttributeTag> {
    properties
        .keys()
        .map(|key| AttributeTag {
            name: format!("on-{}-changed", normalize(key)),
            description: Some(format!(
                "Property change listener function for '{}' attribute",
                key
            )),
            values: None,
        })
        .collect()
}

/// One `on-<event>` attribute per event key, description copied if present.
fn event_attributes(file: &Path, events: &Map<String, Value>) -> Result<Vec<AttributeTag>> {
    events
        .iter()
        .map(|(key, value)| {
            let event: EventDescriptor = parse_entry(file, "event", key, value)?;
            Ok(AttributeTag {
                name: format!("on-{}", normalize(key)),
                description: event.description,
                values: None,
            })
        })
        .collect()
}

fn qualify(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn parse_entry<T: DeserializeOwned>(
    file: &Path,
    kind: &str,
    key: &str,
    value: &Value,
) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|source| TagsmithError::MalformedDescriptor {
        file: file.to_path_buf(),
        detail: format!("{} '{}': {}", kind, key, source),
    })
}
