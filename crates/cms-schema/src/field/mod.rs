//! Field kinds and the fluent builder API.
//!
//! Each kind is its own struct carrying a [`FieldBase`] and kind-specific
//! chain methods; [`FieldNode`] is the sum of all of them and is what object
//! shapes, array elements and schemas hold.

pub mod base;
pub mod builder;
pub mod classes;
pub mod schema;
pub mod shape;

use std::fmt;

pub use base::{error_message, FieldBase, ValidatorFn, ValidatorRecord};
pub use builder::{field, FieldBuilder};
pub use classes::*;
pub use schema::{schema, Schema};
pub use shape::Shape;

use crate::error::{ConfigurationError, ValidationError, ValidationErrors};
use crate::value::Value;

/// Discriminator of a field node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Date,
    Object,
    Array,
    RichText,
    Relation,
    Schema,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Object => "object",
            Self::Array => "array",
            Self::RichText => "richText",
            Self::Relation => "relation",
            Self::Schema => "schema",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities shared by every field kind.
///
/// The chain methods consume and return the concrete field so calls can be
/// strung together; the ones that can hit a duplicate-application error
/// return `Result`.
pub trait Field {
    fn base(&self) -> &FieldBase;
    fn base_mut(&mut self) -> &mut FieldBase;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn label(&self) -> &str {
        self.base().label()
    }

    fn kind(&self) -> FieldKind {
        self.base().kind()
    }

    fn relations(&self) -> &[String] {
        self.base().relations()
    }

    fn initial_value(&self) -> Option<&Value> {
        self.base().initial_value()
    }

    fn validators(&self) -> &[ValidatorRecord] {
        self.base().validators()
    }

    fn is_applied(&self, tag: &str) -> bool {
        self.base().is_applied(tag)
    }

    fn is_required(&self) -> bool {
        self.is_applied("required")
    }

    /// Fail-fast validation of this field's own validator chain.
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.base().validate(value)
    }

    /// Runs the whole chain and reports every failure.
    fn validate_all(&self, value: &Value) -> Result<(), ValidationErrors> {
        match ValidationErrors::from_vec(self.base().validate_all(value)) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }

    fn required(mut self, message: Option<&str>) -> Result<Self, ConfigurationError>
    where
        Self: Sized,
    {
        self.base_mut().required(message)?;
        Ok(self)
    }

    fn set_initial_value(mut self, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_initial_value(value.into());
        self
    }

    fn set_relations<I, S>(mut self, names: I) -> Result<Self, ConfigurationError>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_mut().set_relations(names)?;
        Ok(self)
    }

    /// Associates an editor component by name. Rendering is up to the host
    /// application.
    fn set_component(mut self, component: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_component(component);
        self
    }
}

/// Any field.
#[derive(Debug, Clone)]
pub enum FieldNode {
    String(StringField),
    Number(NumberField),
    Boolean(BooleanField),
    Date(DateField),
    Object(ObjectField),
    Array(ArrayField),
    RichText(RichTextField),
    Relation(RelationField),
    Schema(Schema),
}

impl FieldNode {
    pub fn as_object(&self) -> Option<&ObjectField> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayField> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            Self::Schema(s) => Some(s),
            _ => None,
        }
    }

    /// Nested shape of objects and schemas.
    pub fn shape(&self) -> Option<&Shape> {
        match self {
            Self::Object(o) => Some(o.shape()),
            Self::Schema(s) => Some(s.shape()),
            _ => None,
        }
    }
}

impl Field for FieldNode {
    fn base(&self) -> &FieldBase {
        match self {
            Self::String(f) => f.base(),
            Self::Number(f) => f.base(),
            Self::Boolean(f) => f.base(),
            Self::Date(f) => f.base(),
            Self::Object(f) => f.base(),
            Self::Array(f) => f.base(),
            Self::RichText(f) => f.base(),
            Self::Relation(f) => f.base(),
            Self::Schema(f) => f.base(),
        }
    }

    fn base_mut(&mut self) -> &mut FieldBase {
        match self {
            Self::String(f) => f.base_mut(),
            Self::Number(f) => f.base_mut(),
            Self::Boolean(f) => f.base_mut(),
            Self::Date(f) => f.base_mut(),
            Self::Object(f) => f.base_mut(),
            Self::Array(f) => f.base_mut(),
            Self::RichText(f) => f.base_mut(),
            Self::Relation(f) => f.base_mut(),
            Self::Schema(f) => f.base_mut(),
        }
    }
}

impl fmt::Display for FieldNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.name())
    }
}

macro_rules! impl_field_node {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldNode {
                fn from(field: $ty) -> Self {
                    FieldNode::$variant(field)
                }
            }

            impl Field for $ty {
                fn base(&self) -> &FieldBase {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut FieldBase {
                    &mut self.base
                }
            }
        )*
    };
}

impl_field_node! {
    String => StringField,
    Number => NumberField,
    Boolean => BooleanField,
    Date => DateField,
    Object => ObjectField,
    Array => ArrayField,
    RichText => RichTextField,
    Relation => RelationField,
    Schema => Schema,
}
