use miette::{Diagnostic, NamedSource, SourceSpan};
use ultratype_core::error::SchemaError;
use ultratype_dsl::{DslError, Span};

/// A diagnostic wrapping a `DslError` for rich miette rendering.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

fn source_span(span: &Span) -> SourceSpan {
    (span.start, span.len()).into()
}

/// Convert a `DslError` into a miette `SchemaDiagnostic`.
pub fn dsl_error_to_diagnostic(error: &DslError, source: &str, filename: &str) -> SchemaDiagnostic {
    let src = NamedSource::new(filename, source.to_string());

    let (message, label, suggestion) = match error {
        DslError::MalformedType { text, reason, .. } => (
            format!("malformed type '{text}'"),
            reason.clone(),
            Some(
                "Types are a primitive, `T[]`, `map[K]V`, `Name[A, B]` or a custom name, \
                 optionally followed by `?`."
                    .to_string(),
            ),
        ),

        DslError::MalformedField { line, .. } => (
            format!("malformed field '{line}'"),
            "expected a name followed by a type".to_string(),
            Some("Write fields as `name type [target:\"value\" ...]`.".to_string()),
        ),

        DslError::MissingClassName { .. } => (
            "missing class name".to_string(),
            "expected a header line".to_string(),
            Some("Start the file with the class name, e.g. `User:`.".to_string()),
        ),

        DslError::DuplicateTag { target, .. } => (
            format!("duplicate tag '{target}'"),
            "already tagged on this field".to_string(),
            Some("Merge the values into one tag, e.g. `db:\"id,pk\"`.".to_string()),
        ),

        DslError::TrailingTagText { text, .. } => (
            format!("unexpected text '{text}' after tags"),
            "not a tag".to_string(),
            Some("Tags are written `target:\"value\"`; remove the text or quote its value.".to_string()),
        ),

        DslError::CoreSchemaError { source, .. } => (
            format!("schema validation error: {source}"),
            "validation failed".to_string(),
            core_suggestion(source),
        ),

        _ => (error.to_string(), "error".to_string(), None),
    };

    SchemaDiagnostic {
        src,
        span: source_span(error.span()),
        message,
        label,
        suggestion,
    }
}

fn core_suggestion(error: &SchemaError) -> Option<String> {
    match error {
        SchemaError::DuplicateFieldName(name) => Some(format!(
            "Remove the duplicate '{name}' or rename one of the fields."
        )),
        SchemaError::InvalidTagTarget(_) => {
            Some("Tag targets start with a letter and use letters, digits, '_' or '-'.".to_string())
        }
        _ => None,
    }
}

/// Render all parse errors for a file using miette.
pub fn render_diagnostics(
    errors: &[DslError],
    source: &str,
    filename: &str,
) -> Vec<miette::Report> {
    errors
        .iter()
        .map(|e| miette::Report::new(dsl_error_to_diagnostic(e, source, filename)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_type_diagnostic() {
        let err = DslError::MalformedType {
            text: "map[int".into(),
            reason: "unbalanced brackets in map key".into(),
            span: Span::new(9, 16),
        };
        let diag = dsl_error_to_diagnostic(&err, "User:\n  a map[int", "user.ut");
        assert!(diag.message.contains("map[int"));
        assert_eq!(diag.label, "unbalanced brackets in map key");
        assert_eq!(diag.span, SourceSpan::from((9, 7)));
        assert!(diag.suggestion.is_some());
    }

    #[test]
    fn malformed_field_diagnostic() {
        let err = DslError::MalformedField {
            line: "id".into(),
            span: Span::new(6, 8),
        };
        let diag = dsl_error_to_diagnostic(&err, "User:\nid", "user.ut");
        assert!(diag.message.contains("malformed field"));
        assert!(diag.label.contains("name followed by a type"));
    }

    #[test]
    fn missing_class_name_diagnostic() {
        let err = DslError::MissingClassName {
            span: Span::new(0, 0),
        };
        let diag = dsl_error_to_diagnostic(&err, "", "empty.ut");
        assert!(diag.suggestion.as_ref().unwrap().contains("User:"));
    }

    #[test]
    fn duplicate_tag_diagnostic() {
        let err = DslError::DuplicateTag {
            target: "json".into(),
            span: Span::new(20, 29),
        };
        let diag = dsl_error_to_diagnostic(&err, "", "user.ut");
        assert!(diag.message.contains("json"));
        assert!(diag.suggestion.as_ref().unwrap().contains("id,pk"));
    }

    #[test]
    fn duplicate_field_suggests_rename() {
        let err = DslError::CoreSchemaError {
            source: SchemaError::DuplicateFieldName("email".into()),
            span: Span::new(20, 35),
        };
        let diag = dsl_error_to_diagnostic(&err, "", "user.ut");
        assert!(diag.message.contains("duplicate field name 'email'"));
        assert!(diag.suggestion.as_ref().unwrap().contains("'email'"));
    }

    #[test]
    fn render_diagnostics_produces_reports() {
        let errors = vec![
            DslError::MissingClassName {
                span: Span::new(0, 0),
            },
            DslError::TrailingTagText {
                text: "junk".into(),
                span: Span::new(2, 6),
            },
        ];
        let reports = render_diagnostics(&errors, "  junk", "x.ut");
        assert_eq!(reports.len(), 2);
    }
}
