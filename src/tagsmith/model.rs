//! Descriptor input types and tag output types.
//!
//! Descriptors are duck-typed JSON: every field besides `name` may be
//! missing, and unknown fields are ignored. Property and event maps keep
//! their values as raw [`serde_json::Value`] so that a single bad entry can
//! be reported as a malformed descriptor with context, and key order is the
//! file's order (serde_json is built with `preserve_order`), which carries
//! through to the generated document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One component metadata file, as parsed from the source tree.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// camelCase property key -> property descriptor object.
    #[serde(default)]
    pub properties: Map<String, Value>,
    /// camelCase event key -> event descriptor object.
    #[serde(default)]
    pub events: Map<String, Value>,
}

/// One entry of a descriptor's `properties` map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyDescriptor {
    #[serde(default)]
    pub description: Option<String>,
    /// Allowed literal values, in source order.
    #[serde(default, rename = "enumValues")]
    pub enum_values: Option<Vec<String>>,
    /// Nested property group. A property carrying one of these contributes
    /// no attribute of its own; its children do, under a dotted path prefix.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl PropertyDescriptor {
    pub fn is_group(&self) -> bool {
        !self.properties.is_empty()
    }
}

/// One entry of a descriptor's `events` map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDescriptor {
    #[serde(default)]
    pub description: Option<String>,
}

/// One allowed value of an enumerated attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeValue {
    pub name: String,
}

/// A normalized attribute of a component: a plain property attribute, a
/// synthesized `on-*-changed` listener, or an `on-*` event hook.
///
/// Optional fields are omitted from the document when absent, never
/// serialized as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeTag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<AttributeValue>>,
}

/// The normalized record for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentTag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub attributes: Vec<AttributeTag>,
}

/// The final artifact: built once per run, written once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagsDocument {
    pub version: u32,
    pub tags: Vec<ComponentTag>,
}
