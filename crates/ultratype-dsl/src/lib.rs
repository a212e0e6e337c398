//! # ultratype-dsl
//!
//! Parser and canonical printer for the ultratype schema language.
//!
//! This crate provides:
//! - A type-expression parser (`int[]?`, `map[string]T`, `Pair[A,B]`)
//! - A logos-based scanner for `target[?]:"values"` tags
//! - A line-oriented field and file parser producing `SchemaModel` values
//! - A column-aligned printer; `tidy` is parse followed by print
//!
//! # Example
//!
//! ```
//! use ultratype_dsl::{parse_file, print};
//!
//! let source = "User:\n  id int json:\"id\"\n  name string? json?:\"name\"\n";
//!
//! let model = parse_file(source).expect("parse failed");
//! assert_eq!(model.name.as_str(), "User");
//! assert_eq!(model.fields.len(), 2);
//!
//! let text = print(&model);
//! assert!(text.starts_with("User:\n"));
//! ```

pub mod error;
mod lexer;
pub mod parser;
pub mod printer;
pub mod tags;
pub mod token;
pub mod type_expr;

pub use error::{DslError, Span};
pub use parser::{field_tokens, parse_field, parse_field_with, parse_file, parse_file_with, ParseOptions};
pub use printer::{print, tidy};
pub use tags::{scan_tags, TagScan};
pub use type_expr::parse_type;
