use std::fmt;

use ultratype_core::error::SchemaError;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Moves the span right by `offset` bytes.
    pub fn shifted(&self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Errors that occur while parsing schema source text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DslError {
    /// A type expression is empty, unbalanced, or otherwise ill-formed.
    /// `text` is the offending (sub-)expression.
    MalformedType {
        text: String,
        reason: String,
        span: Span,
    },

    /// A field line lacks a name or a type.
    MalformedField { line: String, span: Span },

    /// The source has no class name header line.
    MissingClassName { span: Span },

    /// A field carries two tags for the same target.
    DuplicateTag { target: String, span: Span },

    /// Text after the last tag that is not a tag (strict mode only).
    TrailingTagText { text: String, span: Span },

    /// An error propagated from ultratype-core validation.
    CoreSchemaError { source: SchemaError, span: Span },
}

impl DslError {
    /// The source span this error points at.
    pub fn span(&self) -> &Span {
        match self {
            Self::MalformedType { span, .. }
            | Self::MalformedField { span, .. }
            | Self::MissingClassName { span }
            | Self::DuplicateTag { span, .. }
            | Self::TrailingTagText { span, .. }
            | Self::CoreSchemaError { span, .. } => span,
        }
    }

    /// Re-anchors the error from a line- or token-relative span to one
    /// relative to the enclosing text.
    pub fn shifted(mut self, offset: usize) -> Self {
        let span = match &mut self {
            Self::MalformedType { span, .. }
            | Self::MalformedField { span, .. }
            | Self::MissingClassName { span }
            | Self::DuplicateTag { span, .. }
            | Self::TrailingTagText { span, .. }
            | Self::CoreSchemaError { span, .. } => span,
        };
        *span = span.shifted(offset);
        self
    }
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedType { text, reason, span } => {
                write!(f, "malformed type '{text}' at {span}: {reason}")
            }
            Self::MalformedField { line, span } => {
                write!(
                    f,
                    "malformed field '{line}' at {span}: expected a name followed by a type"
                )
            }
            Self::MissingClassName { span } => {
                write!(f, "missing class name at {span}: the first line must name the class")
            }
            Self::DuplicateTag { target, span } => {
                write!(f, "duplicate tag '{target}' at {span}")
            }
            Self::TrailingTagText { text, span } => {
                write!(f, "unexpected text '{text}' after tags at {span}")
            }
            Self::CoreSchemaError { source, span } => {
                write!(f, "schema validation error at {span}: {source}")
            }
        }
    }
}

impl std::error::Error for DslError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CoreSchemaError { source, .. } => Some(source),
            _ => None,
        }
    }
}
