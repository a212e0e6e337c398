use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

use super::class_name::ClassName;
use super::schema_field::SchemaField;
use super::tag::TagTarget;

/// A parsed schema: the class name and its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
    pub name: ClassName,
    pub fields: Vec<SchemaField>,
}

impl SchemaModel {
    /// Creates a new `SchemaModel`, validating that no field name repeats.
    ///
    /// A model with no fields is valid and renders as an empty declaration.
    pub fn new(name: ClassName, fields: Vec<SchemaField>) -> Result<Self, SchemaError> {
        let mut field_names = HashSet::with_capacity(fields.len());
        for f in &fields {
            if !field_names.insert(f.name.as_str()) {
                return Err(SchemaError::DuplicateFieldName(f.name.to_string()));
            }
        }

        Ok(Self { name, fields })
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name.as_str() == name)
    }

    /// Every tag target used by any field, deduplicated and sorted.
    pub fn tag_targets(&self) -> Vec<&TagTarget> {
        self.fields
            .iter()
            .flat_map(|f| f.tags.iter().map(|t| &t.target))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// True if some field marks its tag for `target` as nullable.
    pub fn has_nullable_tag(&self, target: &TagTarget) -> bool {
        self.fields
            .iter()
            .filter_map(|f| f.tag(target.as_str()))
            .any(|t| t.nullable)
    }
}

impl std::fmt::Display for SchemaModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for field in &self.fields {
            writeln!(f, "  {field}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::field_name::FieldName;
    use crate::types::field_type::Type;
    use crate::types::tag::Tag;

    fn tag(target: &str, nullable: bool) -> Tag {
        Tag::new(TagTarget::new(target).unwrap(), nullable, vec!["k".into()]).unwrap()
    }

    fn make_field(name: &str, tags: Vec<Tag>) -> SchemaField {
        SchemaField::with_tags(FieldName::new(name).unwrap(), Type::string(), tags).unwrap()
    }

    #[test]
    fn valid_model() {
        let model = SchemaModel::new(
            ClassName::new("User").unwrap(),
            vec![make_field("id", vec![]), make_field("name", vec![])],
        )
        .unwrap();
        assert_eq!(model.name.as_str(), "User");
        assert_eq!(model.fields.len(), 2);
        assert!(model.field("name").is_some());
        assert!(model.field("missing").is_none());
    }

    #[test]
    fn empty_model_is_valid() {
        let model = SchemaModel::new(ClassName::new("Empty").unwrap(), vec![]).unwrap();
        assert!(model.fields.is_empty());
        assert!(model.tag_targets().is_empty());
    }

    #[test]
    fn duplicate_field_names() {
        let result = SchemaModel::new(
            ClassName::new("Dup").unwrap(),
            vec![make_field("name", vec![]), make_field("name", vec![])],
        );
        assert!(matches!(result, Err(SchemaError::DuplicateFieldName(_))));
    }

    #[test]
    fn tag_targets_sorted_and_deduplicated() {
        let model = SchemaModel::new(
            ClassName::new("User").unwrap(),
            vec![
                make_field("id", vec![tag("xml", false), tag("json", false)]),
                make_field("name", vec![tag("json", true), tag("bson", false)]),
            ],
        )
        .unwrap();
        let targets: Vec<&str> = model.tag_targets().iter().map(|t| t.as_str()).collect();
        assert_eq!(targets, vec!["bson", "json", "xml"]);
    }

    #[test]
    fn nullable_variant_detection() {
        let model = SchemaModel::new(
            ClassName::new("User").unwrap(),
            vec![
                make_field("id", vec![tag("json", false), tag("xml", false)]),
                make_field("name", vec![tag("json", true)]),
            ],
        )
        .unwrap();
        assert!(model.has_nullable_tag(&TagTarget::new("json").unwrap()));
        assert!(!model.has_nullable_tag(&TagTarget::new("xml").unwrap()));
    }

    #[test]
    fn display() {
        let model = SchemaModel::new(
            ClassName::new("User").unwrap(),
            vec![make_field("name", vec![tag("json", true)])],
        )
        .unwrap();
        assert_eq!(model.to_string(), "User:\n  name string json?:\"k\"\n");
    }

    #[test]
    fn serde_roundtrip() {
        let model = SchemaModel::new(
            ClassName::new("Task").unwrap(),
            vec![make_field("title", vec![tag("json", false)])],
        )
        .unwrap();
        let json = serde_json::to_string(&model).unwrap();
        let back: SchemaModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, back);
    }
}
