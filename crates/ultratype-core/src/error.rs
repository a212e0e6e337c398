use std::fmt;

/// Errors that occur when constructing or validating schema model types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// Class name was empty or contained whitespace.
    InvalidClassName(String),
    /// Field name was empty or contained whitespace.
    InvalidFieldName(String),
    /// Custom type name was empty or contained a structural character.
    InvalidTypeName(String),
    /// Tag target did not match `[A-Za-z][A-Za-z0-9_-]*`.
    InvalidTagTarget(String),
    /// A tag was built with no values.
    EmptyTagValues(String),
    /// The same tag target appears twice on one field.
    DuplicateTagTarget { field: String, target: String },
    /// Duplicate field name in a schema model.
    DuplicateFieldName(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClassName(s) => {
                write!(f, "invalid class name '{s}': must be non-empty without whitespace")
            }
            Self::InvalidFieldName(s) => {
                write!(f, "invalid field name '{s}': must be non-empty without whitespace")
            }
            Self::InvalidTypeName(s) => {
                write!(
                    f,
                    "invalid type name '{s}': must be non-empty and contain none of '[', ']', ',', '?' or whitespace"
                )
            }
            Self::InvalidTagTarget(s) => {
                write!(
                    f,
                    "invalid tag target '{s}': must match [A-Za-z][A-Za-z0-9_-]*"
                )
            }
            Self::EmptyTagValues(t) => write!(f, "tag '{t}' must have at least one value"),
            Self::DuplicateTagTarget { field, target } => {
                write!(f, "duplicate tag target '{target}' on field '{field}'")
            }
            Self::DuplicateFieldName(n) => write!(f, "duplicate field name '{n}'"),
        }
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let cases = vec![
            (
                SchemaError::InvalidClassName("".into()),
                "invalid class name ''",
            ),
            (
                SchemaError::InvalidFieldName("first name".into()),
                "invalid field name 'first name'",
            ),
            (
                SchemaError::InvalidTypeName("Box]".into()),
                "invalid type name 'Box]'",
            ),
            (
                SchemaError::InvalidTagTarget("9json".into()),
                "invalid tag target '9json'",
            ),
            (
                SchemaError::EmptyTagValues("json".into()),
                "tag 'json' must have at least one value",
            ),
            (
                SchemaError::DuplicateTagTarget {
                    field: "id".into(),
                    target: "json".into(),
                },
                "duplicate tag target 'json' on field 'id'",
            ),
            (
                SchemaError::DuplicateFieldName("name".into()),
                "duplicate field name 'name'",
            ),
        ];

        for (error, expected_prefix) in cases {
            let msg = error.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error display for {error:?} = '{msg}', expected to start with '{expected_prefix}'"
            );
        }
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SchemaError::InvalidClassName("x y".into()));
        assert!(err.to_string().contains("invalid class name"));
    }
}
