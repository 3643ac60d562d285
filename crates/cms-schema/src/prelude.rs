//! Everything needed to declare and use a schema.

pub use crate::error::{ConfigurationError, Error, ValidationError, ValidationErrors};
pub use crate::field::{
    field, schema, ArrayField, BooleanField, DateField, Field, FieldKind, FieldNode, NumberField,
    ObjectField, RelationField, RichTextField, Schema, Shape, StringField,
};
pub use crate::shape;
pub use crate::typescript::{GeneratorOptions, TypeGenerator};
pub use crate::validator::{ErrorMode, ValidateOptions};
pub use crate::value::{Value, ValueKind};
