use ultratype_core::types::{SchemaField, SchemaModel, Tag, Type, TypeKind};

use crate::error::CodegenError;
use crate::generator::{ensure_distinct, Generator};
use crate::registry::Language;
use crate::universe::TagUniverse;

const INDENT: &str = "    ";

/// Emits a Go struct declaration with one exported field per schema field.
///
/// Field names are capitalized so `encoding/json` can see them; the
/// original spelling survives through the tags. Two fields that capitalize
/// to the same name (`id` and `Id`) are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoGenerator;

impl Generator for GoGenerator {
    fn language(&self) -> Language {
        Language::Go
    }

    fn generate(&self, model: &SchemaModel) -> Result<String, CodegenError> {
        ensure_distinct(
            self.language(),
            model
                .fields
                .iter()
                .map(|f| (f.name.as_str(), exported(f.name.as_str()))),
        )?;

        let universe = TagUniverse::of(model);
        tracing::debug!(
            language = %self.language(),
            class = %model.name,
            universe = universe.len(),
            "rendering model"
        );

        let rows: Vec<(String, String, String)> = model
            .fields
            .iter()
            .map(|f| {
                (
                    exported(f.name.as_str()),
                    self.render_type(&f.ty),
                    self.render_tags(&f.tags, &universe),
                )
            })
            .collect();
        let name_width = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(0);
        let type_width = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(0);

        let mut output = format!("type {} struct {{\n", model.name);
        for (name, ty, tags) in &rows {
            output.push_str(INDENT);
            output.push_str(&field_line(name, ty, tags, name_width, type_width));
            output.push('\n');
        }
        output.push_str("}\n");
        Ok(output)
    }

    fn render_type(&self, ty: &Type) -> String {
        let base = match &ty.kind {
            TypeKind::Integer => "int".to_string(),
            TypeKind::Long => "int64".to_string(),
            TypeKind::Float => "float32".to_string(),
            TypeKind::Double => "float64".to_string(),
            TypeKind::Bool => "bool".to_string(),
            TypeKind::String => "string".to_string(),
            TypeKind::List(element) => format!("[]{}", self.render_type(element)),
            TypeKind::Map { key, value } => {
                format!("map[{}]{}", self.render_type(key), self.render_type(value))
            }
            TypeKind::Custom { name, generics } if generics.is_empty() => name.to_string(),
            TypeKind::Custom { name, generics } => {
                let params: Vec<String> = generics.iter().map(|g| self.render_type(g)).collect();
                format!("{name}[{}]", params.join(", "))
            }
        };

        // Slices and maps are already nilable.
        let nilable = matches!(ty.kind, TypeKind::List(_) | TypeKind::Map { .. });
        if ty.nullable && !nilable {
            format!("*{base}")
        } else {
            base
        }
    }

    fn render_tags(&self, tags: &[Tag], universe: &TagUniverse<'_>) -> String {
        if universe.is_empty() {
            return String::new();
        }
        format!("`{}`", universe.annotate(tags).join(" "))
    }

    fn render_field(&self, field: &SchemaField, universe: &TagUniverse<'_>) -> String {
        field_line(
            &exported(field.name.as_str()),
            &self.render_type(&field.ty),
            &self.render_tags(&field.tags, universe),
            0,
            0,
        )
    }
}

fn field_line(name: &str, ty: &str, tags: &str, name_width: usize, type_width: usize) -> String {
    let line = format!("{name:<name_width$} {ty:<type_width$} {tags}");
    line.trim_end().to_string()
}

/// Upper-cases the first character.
fn exported(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
