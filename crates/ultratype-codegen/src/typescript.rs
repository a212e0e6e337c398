use ultratype_core::types::{SchemaField, SchemaModel, Tag, TagTarget, Type, TypeKind};

use crate::error::CodegenError;
use crate::generator::{ensure_distinct, Generator};
use crate::registry::Language;
use crate::universe::TagUniverse;

const INDENT: &str = "    ";

/// Emits a TypeScript class with a constructor and, per tag target, a
/// `To<Target>` / `From<Target>` conversion pair keyed by the tag values.
///
/// All numeric kinds collapse to `number`. Targets whose method names
/// coincide (`db-col` and `db_col` both give `ToDbCol`) are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptGenerator;

impl Generator for TypeScriptGenerator {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn generate(&self, model: &SchemaModel) -> Result<String, CodegenError> {
        let universe = TagUniverse::of(model);
        ensure_distinct(
            self.language(),
            universe
                .targets()
                .iter()
                .map(|t| (t.as_str(), method_suffix(t))),
        )?;

        tracing::debug!(
            language = %self.language(),
            class = %model.name,
            universe = universe.len(),
            "rendering model"
        );

        let mut sections: Vec<Vec<String>> = Vec::new();
        if !model.fields.is_empty() {
            sections.push(
                model
                    .fields
                    .iter()
                    .map(|f| format!("{INDENT}{}", self.render_field(f, &universe)))
                    .collect(),
            );
        }
        sections.push(self.constructor(model));
        for target in universe.targets() {
            sections.push(self.to_method(model, target));
            sections.push(self.from_method(model, target));
        }

        let body: Vec<String> = sections.into_iter().map(|s| s.join("\n")).collect();
        Ok(format!(
            "export default class {} {{\n{}\n}}\n",
            model.name,
            body.join("\n\n")
        ))
    }

    fn render_type(&self, ty: &Type) -> String {
        let base = match &ty.kind {
            TypeKind::Integer | TypeKind::Long | TypeKind::Float | TypeKind::Double => {
                "number".to_string()
            }
            TypeKind::Bool => "boolean".to_string(),
            TypeKind::String => "string".to_string(),
            TypeKind::List(element) if element.nullable => {
                format!("({})[]", self.render_type(element))
            }
            TypeKind::List(element) => format!("{}[]", self.render_type(element)),
            TypeKind::Map { key, value } => {
                format!("Map<{}, {}>", self.render_type(key), self.render_type(value))
            }
            TypeKind::Custom { name, generics } if generics.is_empty() => name.to_string(),
            TypeKind::Custom { name, generics } => {
                let params: Vec<String> = generics.iter().map(|g| self.render_type(g)).collect();
                format!("{name}<{}>", params.join(", "))
            }
        };

        if ty.nullable {
            format!("{base} | null")
        } else {
            base
        }
    }

    fn render_tags(&self, tags: &[Tag], universe: &TagUniverse<'_>) -> String {
        universe.annotate(tags).join(" ")
    }

    fn render_field(&self, field: &SchemaField, universe: &TagUniverse<'_>) -> String {
        let declaration = format!("{}: {};", field.name, self.render_type(&field.ty));
        if universe.is_empty() {
            declaration
        } else {
            format!("{declaration} // {}", self.render_tags(&field.tags, universe))
        }
    }
}

impl TypeScriptGenerator {
    fn constructor(&self, model: &SchemaModel) -> Vec<String> {
        let params: Vec<String> = model
            .fields
            .iter()
            .map(|f| format!("{}: {}", f.name, self.render_type(&f.ty)))
            .collect();

        let mut lines = vec![format!("{INDENT}constructor({}) {{", params.join(", "))];
        for f in &model.fields {
            lines.push(format!("{INDENT}{INDENT}this.{0} = {0};", f.name));
        }
        lines.push(format!("{INDENT}}}"));
        lines
    }

    fn to_method(&self, model: &SchemaModel, target: &TagTarget) -> Vec<String> {
        let mut lines = vec![
            format!("{INDENT}public To{}(): Object {{", method_suffix(target)),
            format!("{INDENT}{INDENT}const out: any = {{}};"),
        ];
        for f in &model.fields {
            let Some(tag) = f.tag(target.as_str()).filter(|t| !t.is_skipped()) else {
                continue;
            };
            let guard = if tag.nullable {
                format!("if (this.{}) ", f.name)
            } else {
                String::new()
            };
            lines.push(format!(
                "{INDENT}{INDENT}{guard}out[\"{}\"] = this.{};",
                tag.key(),
                f.name
            ));
        }
        lines.push(format!("{INDENT}{INDENT}return out;"));
        lines.push(format!("{INDENT}}}"));
        lines
    }

    fn from_method(&self, model: &SchemaModel, target: &TagTarget) -> Vec<String> {
        let mut lines = vec![
            format!(
                "{INDENT}public static From{}(data: any): {} {{",
                method_suffix(target),
                model.name
            ),
            format!("{INDENT}{INDENT}return new {}(", model.name),
        ];
        for f in &model.fields {
            let arg = match f.tag(target.as_str()).filter(|t| !t.is_skipped()) {
                Some(tag) if f.ty.nullable => format!("data[\"{}\"] ?? null", tag.key()),
                Some(tag) if tag.nullable => {
                    format!("data[\"{}\"] ?? {}", tag.key(), self.default_value(&f.ty))
                }
                Some(tag) => format!("data[\"{}\"]", tag.key()),
                None => self.default_value(&f.ty),
            };
            lines.push(format!("{INDENT}{INDENT}{INDENT}{arg},"));
        }
        lines.push(format!("{INDENT}{INDENT});"));
        lines.push(format!("{INDENT}}}"));
        lines
    }

    /// Zero value used when the input object does not provide a field.
    fn default_value(&self, ty: &Type) -> String {
        if ty.nullable {
            return "null".to_string();
        }
        match &ty.kind {
            TypeKind::Integer | TypeKind::Long | TypeKind::Float | TypeKind::Double => {
                "0".to_string()
            }
            TypeKind::Bool => "false".to_string(),
            TypeKind::String => "\"\"".to_string(),
            TypeKind::List(_) => "[]".to_string(),
            TypeKind::Map { key, value } => format!(
                "new Map<{}, {}>()",
                self.render_type(key),
                self.render_type(value)
            ),
            TypeKind::Custom { .. } => format!("{{}} as {}", self.render_type(ty)),
        }
    }
}

/// PascalCase form of a tag target: `json` → `Json`, `db-col` → `DbCol`.
fn method_suffix(target: &TagTarget) -> String {
    target
        .as_str()
        .split(|c: char| c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
