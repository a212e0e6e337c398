//! # ultratype-codegen
//!
//! Source generators for ultratype schema models.
//!
//! Every backend implements [`Generator`] and is registered under one or
//! more identifiers in [`registry`]. Rendering runs in two passes: the
//! model's [`TagUniverse`] is collected first, then each field is rendered
//! against it so that every field mentions every tag target.
//!
//! # Example
//!
//! ```
//! use ultratype_codegen::registry;
//! use ultratype_core::types::{ClassName, FieldName, SchemaField, SchemaModel, Type};
//!
//! let model = SchemaModel::new(
//!     ClassName::new("Point").unwrap(),
//!     vec![SchemaField::new(FieldName::new("x").unwrap(), Type::double())],
//! )
//! .unwrap();
//!
//! let go = registry::lookup("go").unwrap();
//! assert_eq!(go.generate(&model).unwrap(), "type Point struct {\n    X float64\n}\n");
//!
//! assert!(registry::lookup("cobol").is_err());
//! ```

pub mod error;
pub mod generator;
pub mod go;
pub mod registry;
pub mod typescript;
pub mod universe;

pub use error::CodegenError;
pub use generator::Generator;
pub use registry::{lookup, Language};
pub use universe::TagUniverse;
