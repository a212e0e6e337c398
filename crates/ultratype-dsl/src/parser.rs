use std::collections::HashSet;

use ultratype_core::error::SchemaError;
use ultratype_core::types::{ClassName, FieldName, SchemaField, SchemaModel, Tag, TagTarget};

use crate::error::{DslError, Span};
use crate::tags::{scan_tags, RawTag};
use crate::type_expr::parse_type;

/// Knobs for the field and file parsers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject text after the last tag instead of ignoring it.
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// The three regions of a field line, as byte ranges into the line.
struct FieldLine<'a> {
    name: (&'a str, usize),
    ty: (&'a str, usize),
    tags: (&'a str, usize),
}

impl<'a> FieldLine<'a> {
    fn split(line: &'a str) -> Option<Self> {
        let (name_start, name_end) = next_word(line, 0)?;
        let (ty_start, ty_end) = next_word(line, name_end)?;
        Some(Self {
            name: (&line[name_start..name_end], name_start),
            ty: (&line[ty_start..ty_end], ty_start),
            tags: (&line[ty_end..], ty_end),
        })
    }
}

/// Bounds of the next whitespace-delimited word at or after `from`.
fn next_word(line: &str, from: usize) -> Option<(usize, usize)> {
    let start = from + line[from..].find(|c: char| !c.is_whitespace())?;
    let end = line[start..]
        .find(char::is_whitespace)
        .map_or(line.len(), |len| start + len);
    Some((start, end))
}

/// Splits a field line into raw tokens:
/// `[name, type, target1, value1, target2, value2, ...]`.
///
/// Targets have their `?` marker stripped; values are the unsplit quoted
/// contents. A line with fewer than two words yields only the words found.
pub fn field_tokens(line: &str) -> Vec<String> {
    let Some(parts) = FieldLine::split(line) else {
        return line.split_whitespace().map(String::from).collect();
    };

    let mut tokens = vec![parts.name.0.to_string(), parts.ty.0.to_string()];
    for tag in scan_tags(parts.tags.0).tags {
        tokens.push(tag.target.to_string());
        tokens.push(tag.values.to_string());
    }
    tokens
}

/// Parses a single field line with default options.
///
/// # Errors
///
/// See [`parse_field_with`].
pub fn parse_field(line: &str) -> Result<SchemaField, DslError> {
    parse_field_with(line, ParseOptions::default())
}

/// Parses a single field line.
///
/// Error spans are relative to `line`.
///
/// # Errors
///
/// Returns `MalformedField` when the line lacks a name or a type,
/// `MalformedType` for a bad type expression, `DuplicateTag` when a target
/// repeats, and `TrailingTagText` for unparsed text in strict mode.
pub fn parse_field_with(line: &str, options: ParseOptions) -> Result<SchemaField, DslError> {
    let parts = FieldLine::split(line).ok_or_else(|| {
        let trimmed = line.trim();
        let start = line.len() - line.trim_start().len();
        DslError::MalformedField {
            line: trimmed.to_string(),
            span: Span::new(start, start + trimmed.len()),
        }
    })?;

    let (name_text, name_offset) = parts.name;
    let name = FieldName::new(name_text).map_err(|source| DslError::CoreSchemaError {
        source,
        span: Span::new(name_offset, name_offset + name_text.len()),
    })?;

    let (ty_text, ty_offset) = parts.ty;
    let ty = parse_type(ty_text).map_err(|e| e.shifted(ty_offset))?;

    let (region, region_offset) = parts.tags;
    let scan = scan_tags(region);
    if let Some(trailing) = scan.trailing {
        if options.strict {
            return Err(DslError::TrailingTagText {
                text: trailing.text.to_string(),
                span: trailing.span.shifted(region_offset),
            });
        }
        tracing::warn!(
            field = %name,
            ignored = trailing.text,
            "ignoring text after tags"
        );
    }

    let mut seen = HashSet::new();
    let mut tags = Vec::with_capacity(scan.tags.len());
    for raw in &scan.tags {
        let span = raw.span.shifted(region_offset);
        if !seen.insert(raw.target) {
            return Err(DslError::DuplicateTag {
                target: raw.target.to_string(),
                span,
            });
        }
        tags.push(build_tag(raw).map_err(|source| DslError::CoreSchemaError { source, span })?);
    }

    SchemaField::with_tags(name, ty, tags).map_err(|source| DslError::CoreSchemaError {
        source,
        span: Span::new(0, line.len()),
    })
}

fn build_tag(raw: &RawTag<'_>) -> Result<Tag, SchemaError> {
    let target = TagTarget::new(raw.target)?;
    let values = raw.values.split(',').map(String::from).collect();
    Tag::new(target, raw.nullable, values)
}

/// Parses a schema file with default options.
///
/// # Errors
///
/// See [`parse_file_with`].
pub fn parse_file(source: &str) -> Result<SchemaModel, Vec<DslError>> {
    parse_file_with(source, ParseOptions::default())
}

/// Parses a schema file: a class name header followed by field lines.
///
/// Blank lines are skipped. Every malformed line is reported, with spans
/// relative to `source`.
///
/// # Errors
///
/// Returns all errors found: `MissingClassName` when there is no header,
/// any field-level error, and `CoreSchemaError` for invalid class names and
/// duplicate field names.
pub fn parse_file_with(
    source: &str,
    options: ParseOptions,
) -> Result<SchemaModel, Vec<DslError>> {
    let mut lines = lines_with_offsets(source).filter(|(_, line)| !line.trim().is_empty());
    let mut errors = Vec::new();

    let name = match lines.next() {
        Some((offset, line)) => match parse_header(line) {
            Ok(name) => Some(name),
            Err(e) => {
                errors.push(e.shifted(offset));
                None
            }
        },
        None => {
            return Err(vec![DslError::MissingClassName {
                span: Span::new(source.len(), source.len()),
            }]);
        }
    };

    let mut fields: Vec<SchemaField> = Vec::new();
    let mut names = HashSet::new();
    for (offset, line) in lines {
        match parse_field_with(line, options) {
            Ok(field) => {
                if !names.insert(field.name.clone()) {
                    errors.push(DslError::CoreSchemaError {
                        source: SchemaError::DuplicateFieldName(field.name.to_string()),
                        span: Span::new(offset, offset + line.len()),
                    });
                    continue;
                }
                fields.push(field);
            }
            Err(e) => errors.push(e.shifted(offset)),
        }
    }

    let Some(name) = name else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    tracing::debug!(class = %name, fields = fields.len(), "parsed schema");
    let whole = Span::new(0, source.len());
    SchemaModel::new(name, fields).map_err(|e| {
        vec![DslError::CoreSchemaError {
            source: e,
            span: whole,
        }]
    })
}

fn parse_header(line: &str) -> Result<ClassName, DslError> {
    let trimmed = line.trim();
    let start = line.len() - line.trim_start().len();
    let name = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
    let span = Span::new(start, start + trimmed.len());
    if name.is_empty() {
        return Err(DslError::MissingClassName { span });
    }
    ClassName::new(name).map_err(|source| DslError::CoreSchemaError { source, span })
}

/// Lines of `source` with their starting byte offsets, without terminators.
fn lines_with_offsets(source: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    source.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        (start, raw.trim_end_matches(|c: char| c == '\n' || c == '\r'))
    })
}

#[cfg(test)]
mod tests {
    use ultratype_core::types::{Type, TypeName};

    use super::*;

    #[test]
    fn tokens_of_field_line() {
        let tokens = field_tokens(r#"name  string?  json?:"name"  xml:"Name,attr""#);
        assert_eq!(
            tokens,
            vec!["name", "string?", "json", "name", "xml", "Name,attr"]
        );
    }

    #[test]
    fn tokens_of_short_line() {
        assert_eq!(field_tokens("  lonely "), vec!["lonely"]);
        assert!(field_tokens("").is_empty());
    }

    #[test]
    fn parse_plain_field() {
        let field = parse_field("id int").unwrap();
        assert_eq!(field.name.as_str(), "id");
        assert_eq!(field.ty, Type::integer());
        assert!(field.tags.is_empty());
    }

    #[test]
    fn parse_tagged_field() {
        let field = parse_field(r#"  name string? json?:"name" db:"user_name,index""#).unwrap();
        assert_eq!(field.ty, Type::string().nullable());
        assert_eq!(field.tags.len(), 2);
        assert_eq!(field.tags[0].target.as_str(), "json");
        assert!(field.tags[0].nullable);
        assert_eq!(field.tags[0].values, vec!["name"]);
        assert_eq!(field.tags[1].values, vec!["user_name", "index"]);
    }

    #[test]
    fn parse_field_with_fillers() {
        let field = parse_field(r#"id int  -  xml:"ID""#).unwrap();
        assert_eq!(field.tags.len(), 1);
        assert_eq!(field.tags[0].target.as_str(), "xml");
    }

    #[test]
    fn parse_generic_field() {
        let field = parse_field("pair Pair[int,string]").unwrap();
        assert_eq!(
            field.ty,
            Type::custom(
                TypeName::new("Pair").unwrap(),
                vec![Type::integer(), Type::string()]
            )
        );
    }

    #[test]
    fn missing_type_is_malformed_field() {
        let err = parse_field("  id  ").unwrap_err();
        assert_eq!(
            err,
            DslError::MalformedField {
                line: "id".into(),
                span: Span::new(2, 4),
            }
        );
    }

    #[test]
    fn bad_type_span_points_at_type() {
        let err = parse_field("tags map[string").unwrap_err();
        assert!(matches!(err, DslError::MalformedType { .. }));
        assert_eq!(err.span(), &Span::new(5, 15));
    }

    #[test]
    fn duplicate_tag_rejected() {
        let err = parse_field(r#"id int json:"a" json:"b""#).unwrap_err();
        assert_eq!(
            err,
            DslError::DuplicateTag {
                target: "json".into(),
                span: Span::new(16, 24),
            }
        );
    }

    #[test]
    fn trailing_text_ignored_by_default() {
        let field = parse_field(r#"id int json:"id" garbage"#).unwrap();
        assert_eq!(field.tags.len(), 1);
    }

    #[test]
    fn trailing_text_rejected_in_strict_mode() {
        let err = parse_field_with(r#"id int json:"id" garbage"#, ParseOptions::strict())
            .unwrap_err();
        assert_eq!(
            err,
            DslError::TrailingTagText {
                text: "garbage".into(),
                span: Span::new(17, 24),
            }
        );
    }

    #[test]
    fn parse_simple_file() {
        let source = "User:\n  id int json:\"id\"\n\n  name string? json?:\"name\"\n";
        let model = parse_file(source).unwrap();
        assert_eq!(model.name.as_str(), "User");
        assert_eq!(model.fields.len(), 2);
        assert_eq!(model.fields[1].name.as_str(), "name");
    }

    #[test]
    fn header_colon_is_optional() {
        let model = parse_file("User\nid int\n").unwrap();
        assert_eq!(model.name.as_str(), "User");
    }

    #[test]
    fn header_only_is_empty_model() {
        let model = parse_file("\n\nEmpty:\n").unwrap();
        assert_eq!(model.name.as_str(), "Empty");
        assert!(model.fields.is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let model = parse_file("User:\r\n  id int\r\n").unwrap();
        assert_eq!(model.fields.len(), 1);
        assert_eq!(model.fields[0].ty, Type::integer());
    }

    #[test]
    fn blank_source_is_missing_class_name() {
        let errors = parse_file("  \n\n").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], DslError::MissingClassName { .. }));
    }

    #[test]
    fn colon_only_header_is_missing_class_name() {
        let errors = parse_file(":\nid int\n").unwrap_err();
        assert!(matches!(errors[0], DslError::MissingClassName { .. }));
    }

    #[test]
    fn header_with_space_is_invalid_class_name() {
        let errors = parse_file("User Profile:\nid int\n").unwrap_err();
        assert!(matches!(
            errors[0],
            DslError::CoreSchemaError {
                source: SchemaError::InvalidClassName(_),
                ..
            }
        ));
    }

    #[test]
    fn collects_every_error_with_file_spans() {
        let source = "User:\nid\nage map[int\nok string\n";
        let errors = parse_file(source).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].span(), &Span::new(6, 8));
        assert!(matches!(errors[1], DslError::MalformedType { .. }));
        assert_eq!(errors[1].span(), &Span::new(13, 20));
    }

    #[test]
    fn duplicate_field_names_rejected() {
        let errors = parse_file("User:\nid int\nid string\n").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            DslError::CoreSchemaError {
                source: SchemaError::DuplicateFieldName("id".into()),
                span: Span::new(13, 22),
            }
        );
    }

    #[test]
    fn strict_file_parse() {
        let source = "User:\nid int json:\"id\" ???\n";
        assert!(parse_file(source).is_ok());
        let errors = parse_file_with(source, ParseOptions::strict()).unwrap_err();
        assert!(matches!(errors[0], DslError::TrailingTagText { .. }));
    }
}
