//! Root of a content model: named top-level object types.

use crate::error::{ConfigurationError, Error, Result};
use crate::typescript::TypeGenerator;
use crate::validator::{self, ValidateOptions};
use crate::value::Value;

use super::base::FieldBase;
use super::{Field, FieldKind, FieldNode, ObjectField, Shape};

/// A named set of object types (`post`, `author`, ...) that may refer to
/// each other through relations.
#[derive(Debug, Clone)]
pub struct Schema {
    pub(crate) base: FieldBase,
    shape: Shape,
}

/// Builds a schema from top-level types. Every entry must be an object field.
pub fn schema(shape: Shape) -> Result<Schema> {
    for (name, node) in &shape {
        if node.kind() != FieldKind::Object {
            return Err(ConfigurationError::NotAnObjectType {
                name: name.clone(),
                kind: node.kind().to_string(),
            });
        }
    }
    tracing::debug!(types = shape.len(), "schema assembled");
    Ok(Schema::new("schema", "Schema", shape))
}

impl Schema {
    fn new(name: impl Into<String>, label: impl Into<String>, shape: Shape) -> Self {
        let mut base = FieldBase::new(name, label, FieldKind::Schema);
        let label = base.label().to_string();
        base.push("schema", move |value| {
            if value.as_object().is_some() {
                None
            } else {
                Some(format!("{} must be a schema object.", label))
            }
        });
        Self { base, shape }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Looks up a top-level type.
    pub fn get(&self, name: &str) -> Option<&ObjectField> {
        self.shape.get(name).and_then(FieldNode::as_object)
    }

    /// Top-level types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = (&str, &ObjectField)> {
        self.shape
            .iter()
            .filter_map(|(name, node)| node.as_object().map(|o| (name.as_str(), o)))
    }

    /// Generated type text with default options.
    pub fn type_text(&self) -> String {
        TypeGenerator::default().generate_schema(self)
    }

    /// Validates one document of the named top-level type, descending into
    /// its nested fields.
    pub fn validate_document(
        &self,
        type_name: &str,
        value: &Value,
        opts: &ValidateOptions,
    ) -> Result<(), Error> {
        let object = self.get(type_name).ok_or_else(|| ConfigurationError::UnknownType {
            name: type_name.to_string(),
        })?;
        validator::validate_object(value, object, opts)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{field, ObjectField};
    use crate::shape;

    fn blog() -> Schema {
        schema(shape! {
            "post" => field("post", "Post").object(shape! {
                "title" => field("title", "Title").string(),
            }),
            "author" => field("author", "Author").object(Shape::new()),
        })
        .unwrap()
    }

    #[test]
    fn schema_has_conventional_identity() {
        let s = blog();
        assert_eq!(s.name(), "schema");
        assert_eq!(s.label(), "Schema");
        assert_eq!(s.kind(), FieldKind::Schema);
    }

    #[test]
    fn types_in_order() {
        let s = blog();
        let names: Vec<&str> = s.types().map(|(n, _)| n).collect();
        assert_eq!(names, ["post", "author"]);
        assert!(s.get("post").map(ObjectField::shape).unwrap().contains_key("title"));
        assert!(s.get("missing").is_none());
    }

    #[test]
    fn rejects_non_object_types() {
        let err = schema(shape! { "title" => field("title", "Title").string() }).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NotAnObjectType {
                name: "title".into(),
                kind: "string".into()
            }
        );
    }

    #[test]
    fn unknown_document_type() {
        let err = blog()
            .validate_document("comment", &Value::Null, &ValidateOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::UnknownType { .. })
        ));
    }
}
