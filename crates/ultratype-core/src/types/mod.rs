mod class_name;
mod field_name;
mod field_type;
mod schema_field;
mod schema_model;
mod tag;
mod type_name;

pub use class_name::ClassName;
pub use field_name::FieldName;
pub use field_type::{Type, TypeKind};
pub use schema_field::SchemaField;
pub use schema_model::SchemaModel;
pub use tag::{Tag, TagTarget, SKIP_KEY};
pub use type_name::TypeName;
