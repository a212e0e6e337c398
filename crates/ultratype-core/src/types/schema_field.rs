use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

use super::field_name::FieldName;
use super::field_type::Type;
use super::tag::Tag;

/// One declared field: name, type tree, and its tags in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: FieldName,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl SchemaField {
    /// Creates a new field with no tags.
    pub fn new(name: FieldName, ty: Type) -> Self {
        Self {
            name,
            ty,
            tags: Vec::new(),
        }
    }

    /// Creates a new field with tags, validating that no target repeats.
    pub fn with_tags(name: FieldName, ty: Type, tags: Vec<Tag>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(tags.len());
        for tag in &tags {
            if !seen.insert(tag.target.as_str()) {
                return Err(SchemaError::DuplicateTagTarget {
                    field: name.to_string(),
                    target: tag.target.to_string(),
                });
            }
        }
        Ok(Self { name, ty, tags })
    }

    /// Looks up this field's tag for a target.
    pub fn tag(&self, target: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.target.as_str() == target)
    }
}

impl std::fmt::Display for SchemaField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.ty)?;
        for tag in &self.tags {
            let marker = if tag.nullable { "?" } else { "" };
            write!(f, " {}{marker}:\"{}\"", tag.target, tag.joined_values())?;
        }
        Ok(())
    }
}
