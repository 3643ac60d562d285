use crate::error::Result;
use crate::field::base::{error_message, FieldBase};
use crate::field::{FieldKind, FieldNode, Shape};

/// An object with a declared shape of child fields.
///
/// Validating an object field checks only that the value is an object (plus
/// any chained checks); children are visited by [`crate::validator::validate`].
#[derive(Debug, Clone)]
pub struct ObjectField {
    pub(crate) base: FieldBase,
    shape: Shape,
}

impl ObjectField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, shape: Shape) -> Self {
        let mut base = FieldBase::new(name, label, FieldKind::Object);
        let label = base.label().to_string();
        base.push("object", move |value| {
            if value.as_object().is_some() {
                None
            } else {
                Some(format!("{} must be an object.", label))
            }
        });
        Self { base, shape }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn get(&self, key: &str) -> Option<&FieldNode> {
        self.shape.get(key)
    }

    /// Requires every listed key to be present on the value. Presence only:
    /// member values are not inspected.
    pub fn define_shape<I, K>(mut self, keys: I, message: Option<&str>) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let message = message.map(str::to_string);
        let default = format!(
            "{} must have a shape of {{ {} }}.",
            self.base.label(),
            keys.join(", ")
        );
        self.base.apply("shape", move |value| {
            let obj = value.as_object()?;
            if keys.iter().all(|k| obj.contains_key(k)) {
                return None;
            }
            Some(error_message(message.as_deref(), value, || default.clone()))
        })?;
        Ok(self)
    }

    /// Requires the keys of the object's own declared shape.
    pub fn define_own_shape(self, message: Option<&str>) -> Result<Self> {
        let keys: Vec<String> = self.shape.keys().cloned().collect();
        self.define_shape(keys, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Field, StringField};
    use crate::value::Value;
    use serde_json::json;

    fn post() -> ObjectField {
        ObjectField::new(
            "post",
            "Post",
            Shape::new()
                .with("title", StringField::new("title", "Title"))
                .with("body", StringField::new("body", "Body")),
        )
    }

    #[test]
    fn kind_check_rejects_arrays_and_null() {
        let f = post();
        assert!(f.validate(&Value::from(json!({}))).is_ok());
        assert!(f.validate(&Value::from(json!([]))).is_err());
        assert_eq!(f.validate(&Value::Null).unwrap_err().message, "Post must be an object.");
    }

    #[test]
    fn define_shape_checks_presence_only() {
        let f = post().define_own_shape(None).unwrap();
        assert!(f.validate(&Value::from(json!({"title": 1, "body": null}))).is_ok());
        let err = f.validate(&Value::from(json!({"title": "x"}))).unwrap_err();
        assert_eq!(err.message, "Post must have a shape of { title, body }.");
    }

    #[test]
    fn define_shape_applies_once() {
        let f = post().define_shape(["title"], None).unwrap();
        assert!(f.define_shape(["body"], None).is_err());
    }

    #[test]
    fn shape_keeps_declaration_order() {
        let post = post();
        let keys: Vec<&String> = post.shape().keys().collect();
        assert_eq!(keys, ["title", "body"]);
    }
}
