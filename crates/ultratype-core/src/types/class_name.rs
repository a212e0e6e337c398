use std::fmt;

use serde::{Deserialize, Serialize};

use super::field_name::is_bare_word;
use crate::error::SchemaError;

/// The name of the class a schema file declares, taken from its header line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassName(String);

impl ClassName {
    /// Creates a new `ClassName`, rejecting empty names and whitespace.
    pub fn new(s: impl Into<String>) -> Result<Self, SchemaError> {
        let s = s.into();
        if !is_bare_word(&s) {
            return Err(SchemaError::InvalidClassName(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ClassName> for String {
    fn from(n: ClassName) -> String {
        n.0
    }
}

impl TryFrom<String> for ClassName {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
