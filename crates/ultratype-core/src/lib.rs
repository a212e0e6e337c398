//! # ultratype-core
//!
//! The in-memory schema model shared by the ultratype parser, formatter and
//! code generators: a class name plus an ordered list of fields, each holding
//! a recursive [`types::Type`] tree and a set of per-target [`types::Tag`]s.

pub mod error;
pub mod types;

pub use error::SchemaError;
