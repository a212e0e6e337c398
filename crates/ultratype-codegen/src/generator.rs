use std::collections::HashMap;

use ultratype_core::types::{SchemaField, SchemaModel, Tag, Type};

use crate::error::CodegenError;
use crate::registry::Language;
use crate::universe::TagUniverse;

/// A backend that renders a schema model as source text in one language.
///
/// Rendering is a two-pass process: `generate` first collects the model's
/// [`TagUniverse`], then renders each field against it. Generators hold no
/// state between calls and may be shared freely.
pub trait Generator: Send + Sync {
    /// The language this generator emits.
    fn language(&self) -> Language;

    /// Render the whole model as a single source file.
    ///
    /// # Errors
    ///
    /// Returns `CodegenError::IdentifierCollision` when two distinct names
    /// in the model map to the same identifier in the target language.
    fn generate(&self, model: &SchemaModel) -> Result<String, CodegenError>;

    /// Render a type expression in the target language.
    fn render_type(&self, ty: &Type) -> String;

    /// Render a field's tag annotation against the model's universe.
    ///
    /// Empty when the universe is empty.
    fn render_tags(&self, tags: &[Tag], universe: &TagUniverse<'_>) -> String;

    /// Render one field declaration, without column alignment.
    fn render_field(&self, field: &SchemaField, universe: &TagUniverse<'_>) -> String;
}

/// Fails on the first rendered identifier produced by two source names.
///
/// `names` pairs each source name with its rendering, in model order.
pub(crate) fn ensure_distinct<'a, I>(language: Language, names: I) -> Result<(), CodegenError>
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let mut seen: HashMap<String, &'a str> = HashMap::new();
    for (source, identifier) in names {
        if let Some(first) = seen.insert(identifier.clone(), source) {
            return Err(CodegenError::IdentifierCollision {
                language,
                first: first.to_string(),
                second: source.to_string(),
                identifier,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_renderings_pass() {
        let names = [("a", "A".to_string()), ("b", "B".to_string())];
        assert!(ensure_distinct(Language::Go, names).is_ok());
    }

    #[test]
    fn first_collision_names_both_sources() {
        let names = [
            ("id", "Id".to_string()),
            ("name", "Name".to_string()),
            ("Id", "Id".to_string()),
            ("Name", "Name".to_string()),
        ];
        assert_eq!(
            ensure_distinct(Language::Go, names),
            Err(CodegenError::IdentifierCollision {
                language: Language::Go,
                first: "id".into(),
                second: "Id".into(),
                identifier: "Id".into(),
            })
        );
    }
}
