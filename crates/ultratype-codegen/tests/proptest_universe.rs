use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use ultratype_codegen::{CodegenError, Language, TagUniverse};
use ultratype_core::types::{ClassName, FieldName, SchemaField, SchemaModel, Tag, TagTarget, Type};

fn model() -> impl Strategy<Value = SchemaModel> {
    let tags = prop::collection::btree_map(
        "[a-z][a-z0-9_-]{0,5}",
        (any::<bool>(), "[a-z_]{1,5}"),
        0..4,
    );
    prop::collection::btree_map("[a-z][a-z0-9_]{0,8}", (any::<bool>(), tags), 0..8).prop_map(
        |fields: BTreeMap<String, (bool, BTreeMap<String, (bool, String)>)>| {
            let fields = fields
                .into_iter()
                .map(|(name, (nullable, tags))| {
                    let tags = tags
                        .into_iter()
                        .map(|(target, (tag_nullable, key))| {
                            Tag::new(TagTarget::new(target).unwrap(), tag_nullable, vec![key])
                                .unwrap()
                        })
                        .collect();
                    SchemaField::with_tags(
                        FieldName::new(name).unwrap(),
                        Type::string().with_nullable(nullable),
                        tags,
                    )
                    .unwrap()
                })
                .collect();
            SchemaModel::new(ClassName::new("Model").unwrap(), fields).unwrap()
        },
    )
}

/// Target names mentioned in an annotation such as `json:"id" xml:"-"`.
fn mentioned_targets(annotation: &str) -> Vec<String> {
    annotation
        .trim_matches('`')
        .split_whitespace()
        .filter_map(|entry| entry.split_once(':').map(|(t, _)| t.to_string()))
        .collect()
}

proptest! {
    /// Every field's annotation names every universe target exactly once.
    #[test]
    fn tag_universe_completeness(m in model()) {
        let universe = TagUniverse::of(&m);
        let mut expected: Vec<String> =
            universe.targets().iter().map(|t| t.to_string()).collect();
        expected.sort();

        for language in Language::ALL {
            let generator = language.generator();
            for field in &m.fields {
                let mut mentioned = mentioned_targets(&generator.render_tags(&field.tags, &universe));
                mentioned.sort();
                prop_assert_eq!(&mentioned, &expected, "{} field {}", language, field.name);
            }
        }
    }

    /// Own tags come first, in source order, before the `-` fillers.
    #[test]
    fn own_tags_lead_the_annotation(m in model()) {
        let universe = TagUniverse::of(&m);
        for field in &m.fields {
            let entries = universe.annotate(&field.tags);
            for (entry, tag) in entries.iter().zip(&field.tags) {
                let prefix = format!("{}:", tag.target);
                prop_assert!(entry.starts_with(&prefix));
            }
            for entry in entries.iter().skip(field.tags.len()) {
                prop_assert!(entry.ends_with(":\"-\""));
            }
        }
    }

    /// Go output has one line per field plus the declaration and closing brace.
    #[test]
    fn go_line_count(m in model()) {
        // Lowercase-initial names never collide once exported.
        let out = Language::Go.generator().generate(&m).unwrap();
        prop_assert_eq!(out.lines().count(), m.fields.len() + 2);
        for line in out.lines() {
            prop_assert_eq!(line, line.trim_end());
        }
    }

    /// TypeScript output has one To/From pair per universe target, each
    /// with its own method name, or the model is rejected.
    #[test]
    fn typescript_method_pairs(m in model()) {
        let universe = TagUniverse::of(&m);
        match Language::TypeScript.generator().generate(&m) {
            Ok(out) => {
                prop_assert_eq!(out.matches("public To").count(), universe.len());
                prop_assert_eq!(out.matches("public static From").count(), universe.len());
                let names: BTreeSet<&str> = out
                    .lines()
                    .filter_map(|l| l.trim().strip_prefix("public To"))
                    .collect();
                prop_assert_eq!(names.len(), universe.len());
            }
            Err(CodegenError::IdentifierCollision { first, second, .. }) => {
                prop_assert_ne!(&first, &second);
                let targets: Vec<&str> = universe.targets().iter().map(|t| t.as_str()).collect();
                prop_assert!(targets.contains(&first.as_str()));
                prop_assert!(targets.contains(&second.as_str()));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
