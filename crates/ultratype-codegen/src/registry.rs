//! Closed set of generator backends and their lookup table.

use std::fmt;
use std::str::FromStr;

use crate::error::CodegenError;
use crate::generator::Generator;
use crate::go::GoGenerator;
use crate::typescript::TypeScriptGenerator;

/// A supported output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    TypeScript,
}

struct Entry {
    language: Language,
    identifiers: &'static [&'static str],
    extension: &'static str,
    generator: &'static dyn Generator,
}

static REGISTRY: [Entry; 2] = [
    Entry {
        language: Language::Go,
        identifiers: &["go", "golang"],
        extension: "go",
        generator: &GoGenerator,
    },
    Entry {
        language: Language::TypeScript,
        identifiers: &["typescript", "ts"],
        extension: "ts",
        generator: &TypeScriptGenerator,
    },
];

impl Language {
    /// Every registered language, in registry order.
    pub const ALL: [Language; 2] = [Language::Go, Language::TypeScript];

    fn entry(self) -> &'static Entry {
        match self {
            Self::Go => &REGISTRY[0],
            Self::TypeScript => &REGISTRY[1],
        }
    }

    /// Canonical identifier, e.g. `go`.
    pub fn identifier(self) -> &'static str {
        self.entry().identifiers[0]
    }

    /// Every identifier that selects this language, canonical first.
    pub fn aliases(self) -> &'static [&'static str] {
        self.entry().identifiers
    }

    /// File extension for generated sources, without the dot.
    pub fn extension(self) -> &'static str {
        self.entry().extension
    }

    pub fn generator(self) -> &'static dyn Generator {
        self.entry().generator
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Language {
    type Err = CodegenError;

    /// Identifiers match case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        REGISTRY
            .iter()
            .find(|e| e.identifiers.contains(&wanted.as_str()))
            .map(|e| e.language)
            .ok_or_else(|| CodegenError::UnsupportedLanguage {
                identifier: s.to_string(),
            })
    }
}

/// Resolves a language identifier to its generator.
///
/// # Errors
///
/// Returns `CodegenError::UnsupportedLanguage` when no generator is
/// registered under `identifier`.
pub fn lookup(identifier: &str) -> Result<&'static dyn Generator, CodegenError> {
    identifier.parse::<Language>().map(Language::generator)
}

/// All accepted identifiers, canonical names and aliases, in registry order.
pub fn identifiers() -> Vec<&'static str> {
    REGISTRY
        .iter()
        .flat_map(|e| e.identifiers.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_canonical_and_aliases() {
        assert_eq!(lookup("go").unwrap().language(), Language::Go);
        assert_eq!(lookup("golang").unwrap().language(), Language::Go);
        assert_eq!(lookup("typescript").unwrap().language(), Language::TypeScript);
        assert_eq!(lookup("ts").unwrap().language(), Language::TypeScript);
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(lookup(" Go ").unwrap().language(), Language::Go);
        assert_eq!(lookup("TS").unwrap().language(), Language::TypeScript);
    }

    #[test]
    fn lookup_unknown_language() {
        let err = lookup("cobol").err().unwrap();
        assert_eq!(
            err,
            CodegenError::UnsupportedLanguage {
                identifier: "cobol".into()
            }
        );
        assert!(lookup("").is_err());
    }

    #[test]
    fn registry_entries_match_language() {
        for language in Language::ALL {
            assert_eq!(language.generator().language(), language);
            assert_eq!(language.identifier().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn extensions() {
        assert_eq!(Language::Go.extension(), "go");
        assert_eq!(Language::TypeScript.extension(), "ts");
    }

    #[test]
    fn identifiers_list() {
        assert_eq!(identifiers(), vec!["go", "golang", "typescript", "ts"]);
        assert_eq!(Language::TypeScript.to_string(), "typescript");
    }
}
