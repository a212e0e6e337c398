use std::fmt;

use crate::registry::Language;

/// Errors that occur when selecting or running a code generator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodegenError {
    /// No generator is registered under the given identifier.
    UnsupportedLanguage { identifier: String },

    /// Two distinct schema names render to the same identifier in the
    /// target language, e.g. fields `id` and `Id` in Go.
    IdentifierCollision {
        language: Language,
        first: String,
        second: String,
        identifier: String,
    },
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLanguage { identifier } => {
                write!(
                    f,
                    "unsupported language '{identifier}': expected one of {}",
                    crate::registry::identifiers().join(", ")
                )
            }
            Self::IdentifierCollision {
                language,
                first,
                second,
                identifier,
            } => write!(
                f,
                "{language}: '{first}' and '{second}' both render as '{identifier}'"
            ),
        }
    }
}

impl std::error::Error for CodegenError {}
