use ultratype_core::types::{SchemaModel, Tag, TagTarget, SKIP_KEY};

/// Modifier appended to the values of a nullable tag.
pub const OMIT_EMPTY: &str = "omitempty";

/// Every tag target used anywhere in a model, deduplicated and sorted.
///
/// Computed once per render and passed to the per-field renderers so that
/// each field can mention the targets it does not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUniverse<'a> {
    targets: Vec<&'a TagTarget>,
}

impl<'a> TagUniverse<'a> {
    /// Collects the universe of `model`.
    pub fn of(model: &'a SchemaModel) -> Self {
        Self {
            targets: model.tag_targets(),
        }
    }

    pub fn targets(&self) -> &[&'a TagTarget] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Annotation entries for one field: its own tags in source order, then
    /// `target:"-"` for each universe target it lacks, in universe order.
    pub fn annotate(&self, tags: &[Tag]) -> Vec<String> {
        let mut entries: Vec<String> = tags.iter().map(tag_entry).collect();
        for target in &self.targets {
            if !tags.iter().any(|t| &t.target == *target) {
                entries.push(format!("{target}:\"{SKIP_KEY}\""));
            }
        }
        entries
    }
}

/// `target:"v1,v2"`, with `omitempty` appended when the tag is nullable.
pub fn tag_entry(tag: &Tag) -> String {
    let mut values = tag.joined_values();
    if tag.nullable {
        values.push(',');
        values.push_str(OMIT_EMPTY);
    }
    format!("{}:\"{values}\"", tag.target)
}
