use ultratype_core::types::{SchemaField, SchemaModel, Tag, TagTarget};

use crate::error::DslError;
use crate::parser::parse_file;

const INDENT: &str = "  ";
const COLUMN_GAP: &str = "  ";
const EMPTY_CELL: &str = "-";

/// Print a schema model as canonical DSL text.
///
/// Names and types are left-aligned in columns. Each distinct tag target
/// gets its own column in sorted order; fields without that tag show `-`.
/// Trailing whitespace is trimmed from every line.
pub fn print(model: &SchemaModel) -> String {
    let mut output = String::new();
    output.push_str(model.name.as_str());
    output.push_str(":\n");

    let columns: Vec<TagColumn<'_>> = model
        .tag_targets()
        .into_iter()
        .map(|target| TagColumn::new(model, target))
        .collect();

    let types: Vec<String> = model.fields.iter().map(|f| f.ty.to_string()).collect();
    let name_width = max_width(model.fields.iter().map(|f| f.name.as_str()));
    let type_width = max_width(types.iter().map(String::as_str));

    for (field, ty) in model.fields.iter().zip(&types) {
        let mut line = String::new();
        line.push_str(INDENT);
        line.push_str(&format!("{:<name_width$} {:<type_width$}", field.name.as_str(), ty));
        for column in &columns {
            line.push_str(COLUMN_GAP);
            line.push_str(&format!("{:<width$}", column.cell(field), width = column.width));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Parse `source` and print it back canonically.
///
/// # Errors
///
/// Returns the parse errors when `source` is not a valid schema.
pub fn tidy(source: &str) -> Result<String, Vec<DslError>> {
    parse_file(source).map(|model| print(&model))
}

/// One aligned tag column of the canonical layout.
struct TagColumn<'a> {
    target: &'a TagTarget,
    /// Present non-nullable tags reserve a space where `?` would go.
    pad_marker: bool,
    width: usize,
}

impl<'a> TagColumn<'a> {
    fn new(model: &'a SchemaModel, target: &'a TagTarget) -> Self {
        let mut column = Self {
            target,
            pad_marker: model.has_nullable_tag(target),
            width: 0,
        };
        column.width = model
            .fields
            .iter()
            .map(|f| column.cell(f).chars().count())
            .max()
            .unwrap_or(0);
        column
    }

    fn cell(&self, field: &SchemaField) -> String {
        match field.tag(self.target.as_str()) {
            Some(tag) => render_tag(tag, self.pad_marker),
            None => EMPTY_CELL.to_string(),
        }
    }
}

fn render_tag(tag: &Tag, pad_marker: bool) -> String {
    let marker = if tag.nullable {
        "?"
    } else if pad_marker {
        " "
    } else {
        ""
    };
    format!("{}{marker}:\"{}\"", tag.target, tag.joined_values())
}

fn max_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(|c| c.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use ultratype_core::types::{ClassName, FieldName, Type};

    use super::*;

    fn tag(target: &str, nullable: bool, values: &[&str]) -> Tag {
        Tag::new(
            TagTarget::new(target).unwrap(),
            nullable,
            values.iter().map(|v| v.to_string()).collect(),
        )
        .unwrap()
    }

    fn field(name: &str, ty: Type, tags: Vec<Tag>) -> SchemaField {
        SchemaField::with_tags(FieldName::new(name).unwrap(), ty, tags).unwrap()
    }

    fn model(name: &str, fields: Vec<SchemaField>) -> SchemaModel {
        SchemaModel::new(ClassName::new(name).unwrap(), fields).unwrap()
    }

    #[test]
    fn print_empty_model() {
        assert_eq!(print(&model("Empty", vec![])), "Empty:\n");
    }

    #[test]
    fn print_untagged_fields_aligned() {
        let m = model(
            "Point",
            vec![
                field("x", Type::double(), vec![]),
                field("label", Type::string().nullable(), vec![]),
            ],
        );
        assert_eq!(print(&m), "Point:\n  x     double\n  label string?\n");
    }

    #[test]
    fn print_tag_columns_with_nullable_padding() {
        let m = model(
            "User",
            vec![
                field("id", Type::integer(), vec![tag("json", false, &["id"])]),
                field(
                    "name",
                    Type::string().nullable(),
                    vec![tag("json", true, &["name"])],
                ),
            ],
        );
        let expected = "User:\n\
                        \x20 id   int      json :\"id\"\n\
                        \x20 name string?  json?:\"name\"\n";
        assert_eq!(print(&m), expected);
    }

    #[test]
    fn print_missing_tags_as_filler_in_sorted_columns() {
        let m = model(
            "Item",
            vec![
                field(
                    "id",
                    Type::integer(),
                    vec![tag("xml", false, &["ID"]), tag("json", false, &["id"])],
                ),
                field("note", Type::string(), vec![tag("xml", false, &["Note", "attr"])]),
            ],
        );
        let expected = "Item:\n\
                        \x20 id   int     json:\"id\"  xml:\"ID\"\n\
                        \x20 note string  -          xml:\"Note,attr\"\n";
        assert_eq!(print(&m), expected);
    }

    #[test]
    fn tidy_normalizes_spacing() {
        let source = "User:\n   id    int   json:\"id\"\n\n\n name string? json?:\"name\"   \n";
        let expected = "User:\n  id   int      json :\"id\"\n  name string?  json?:\"name\"\n";
        assert_eq!(tidy(source).unwrap(), expected);
    }

    #[test]
    fn tidy_canonicalizes_types() {
        let source = "Box:\nitems map[string]int[]\n";
        assert_eq!(tidy(source).unwrap(), "Box:\n  items map[string]int[]\n");
    }

    #[test]
    fn tidy_reports_parse_errors() {
        assert!(tidy("").is_err());
        assert!(tidy("User:\nid\n").is_err());
    }
}
