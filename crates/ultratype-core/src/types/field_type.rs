use std::fmt;

use serde::{Deserialize, Serialize};

use super::type_name::TypeName;

/// A node in a field's type tree.
///
/// Nullability is recorded per node: `int[]?` is a nullable list of
/// non-nullable integers, `int?[]` the opposite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
}

/// The variant of a type node. Child arity is fixed by the variant shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TypeKind {
    Integer,
    Long,
    Float,
    Double,
    Bool,
    String,
    List(Box<Type>),
    Map {
        key: Box<Type>,
        value: Box<Type>,
    },
    Custom {
        name: TypeName,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        generics: Vec<Type>,
    },
}

impl TypeKind {
    /// Resolves a primitive keyword (`int`, `long`, ...) to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(Self::Integer),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "bool" => Some(Self::Bool),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// The DSL keyword for primitive kinds, `None` for composite kinds.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Integer => Some("int"),
            Self::Long => Some("long"),
            Self::Float => Some("float"),
            Self::Double => Some("double"),
            Self::Bool => Some("bool"),
            Self::String => Some("string"),
            Self::List(_) | Self::Map { .. } | Self::Custom { .. } => None,
        }
    }
}

impl Type {
    /// Creates a non-nullable node of the given kind.
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    pub fn integer() -> Self {
        Self::new(TypeKind::Integer)
    }

    pub fn long() -> Self {
        Self::new(TypeKind::Long)
    }

    pub fn float() -> Self {
        Self::new(TypeKind::Float)
    }

    pub fn double() -> Self {
        Self::new(TypeKind::Double)
    }

    pub fn bool() -> Self {
        Self::new(TypeKind::Bool)
    }

    pub fn string() -> Self {
        Self::new(TypeKind::String)
    }

    /// A list of `element`.
    pub fn list(element: Type) -> Self {
        Self::new(TypeKind::List(Box::new(element)))
    }

    /// A map from `key` to `value`.
    pub fn map(key: Type, value: Type) -> Self {
        Self::new(TypeKind::Map {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// A custom type, optionally parameterized (`Box[int]`).
    pub fn custom(name: TypeName, generics: Vec<Type>) -> Self {
        Self::new(TypeKind::Custom { name, generics })
    }

    /// Marks this node nullable.
    pub fn nullable(self) -> Self {
        self.with_nullable(true)
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// True for `int`, `long`, `float` and `double`.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Integer | TypeKind::Long | TypeKind::Float | TypeKind::Double
        )
    }

    /// Direct children in grammar order: list element, map key then value,
    /// or custom generic parameters.
    pub fn children(&self) -> Vec<&Type> {
        match &self.kind {
            TypeKind::List(element) => vec![element.as_ref()],
            TypeKind::Map { key, value } => vec![key.as_ref(), value.as_ref()],
            TypeKind::Custom { generics, .. } => generics.iter().collect(),
            _ => Vec::new(),
        }
    }
}

/// Canonical DSL rendering: no whitespace, `?` directly after the node it
/// applies to.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::List(element) => write!(f, "{element}[]")?,
            TypeKind::Map { key, value } => write!(f, "map[{key}]{value}")?,
            TypeKind::Custom { name, generics } => {
                write!(f, "{name}")?;
                if !generics.is_empty() {
                    f.write_str("[")?;
                    for (i, g) in generics.iter().enumerate() {
                        if i > 0 {
                            f.write_str(",")?;
                        }
                        write!(f, "{g}")?;
                    }
                    f.write_str("]")?;
                }
            }
            primitive => {
                // Every remaining kind has a keyword.
                f.write_str(primitive.keyword().unwrap_or_default())?;
            }
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}
