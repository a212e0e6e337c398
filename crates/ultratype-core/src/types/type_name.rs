use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// The name of a user-defined (custom) type, e.g. `Address` or `time.Time`.
///
/// Names are not resolved against any symbol table; unknown names are
/// forward references. Only characters that carry meaning in the type
/// grammar are rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

const STRUCTURAL: [char; 4] = ['[', ']', ',', '?'];

impl TypeName {
    /// Creates a new `TypeName`.
    pub fn new(s: impl Into<String>) -> Result<Self, SchemaError> {
        let s = s.into();
        let valid = !s.is_empty()
            && !s
                .chars()
                .any(|c| c.is_whitespace() || STRUCTURAL.contains(&c));
        if !valid {
            return Err(SchemaError::InvalidTypeName(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TypeName> for String {
    fn from(n: TypeName) -> String {
        n.0
    }
}

impl TryFrom<String> for TypeName {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
