use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Placeholder key meaning "leave this field out for this target".
pub const SKIP_KEY: &str = "-";

/// A serialization target a tag applies to, e.g. `json` or `db-column`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagTarget(String);

impl TagTarget {
    /// Creates a new `TagTarget`, validating `[A-Za-z][A-Za-z0-9_-]*`.
    pub fn new(s: impl Into<String>) -> Result<Self, SchemaError> {
        let s = s.into();
        if !is_target_identifier(&s) {
            return Err(SchemaError::InvalidTagTarget(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_target_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl fmt::Display for TagTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TagTarget> for String {
    fn from(t: TagTarget) -> String {
        t.0
    }
}

impl TryFrom<String> for TagTarget {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for TagTarget {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A per-field annotation for one serialization target.
///
/// `values[0]` is the key the field is renamed to for this target; any
/// further values are target-specific modifiers. `nullable` marks the tag as
/// omit-when-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub target: TagTarget,
    #[serde(default)]
    pub nullable: bool,
    pub values: Vec<String>,
}

impl Tag {
    /// Creates a tag; `values` must not be empty.
    pub fn new(target: TagTarget, nullable: bool, values: Vec<String>) -> Result<Self, SchemaError> {
        if values.is_empty() {
            return Err(SchemaError::EmptyTagValues(target.0));
        }
        Ok(Self {
            target,
            nullable,
            values,
        })
    }

    /// The renamed key for this target.
    pub fn key(&self) -> &str {
        self.values.first().map(String::as_str).unwrap_or(SKIP_KEY)
    }

    /// True when the key is the `-` placeholder.
    pub fn is_skipped(&self) -> bool {
        self.key() == SKIP_KEY
    }

    /// The values joined back into their quoted DSL form, without quotes.
    pub fn joined_values(&self) -> String {
        self.values.join(",")
    }
}
