use crate::error::Result;
use crate::field::base::{error_message, FieldBase};
use crate::field::{
    BooleanField, DateField, Field, FieldKind, FieldNode, NumberField, ObjectField, Shape,
    StringField,
};
use crate::value::{Value, ValueKind};

#[derive(Debug, Clone)]
pub struct ArrayField {
    pub(crate) base: FieldBase,
    element: Option<Box<FieldNode>>,
}

impl ArrayField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let mut base = FieldBase::new(name, label, FieldKind::Array);
        let label = base.label().to_string();
        base.push("array", move |value| {
            if value.as_array().is_some() {
                None
            } else {
                Some(format!("{} must be an array.", label))
            }
        });
        Self {
            base,
            element: None,
        }
    }

    /// The declared element field, if any.
    pub fn element_field(&self) -> Option<&FieldNode> {
        self.element.as_deref()
    }

    pub fn element_kind(&self) -> Option<FieldKind> {
        self.element.as_ref().map(|e| e.kind())
    }

    fn check(
        mut self,
        tag: &str,
        message: Option<&str>,
        fails: impl Fn(&[Value]) -> bool + Send + Sync + 'static,
        default: String,
    ) -> Result<Self> {
        let message = message.map(str::to_string);
        self.base.apply(tag, move |value: &Value| {
            let items = value.as_array()?;
            if !fails(items) {
                return None;
            }
            Some(error_message(message.as_deref(), value, || default.clone()))
        })?;
        Ok(self)
    }

    pub fn min_length(self, length: usize, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must have a minimum length of {}.", self.base.label(), length);
        self.check("minLength", message, move |items| items.len() < length, default)
    }

    pub fn max_length(self, length: usize, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must have a maximum length of {}.", self.base.label(), length);
        self.check("maxLength", message, move |items| items.len() > length, default)
    }

    pub fn length(self, length: usize, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must have a length of {}.", self.base.label(), length);
        self.check("length", message, move |items| items.len() != length, default)
    }

    /// No two elements may be deeply equal.
    pub fn unique(self, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must have unique values.", self.base.label());
        self.check(
            "unique",
            message,
            |items| {
                items
                    .iter()
                    .enumerate()
                    .any(|(i, a)| items[i + 1..].iter().any(|b| a.same_value(b)))
            },
            default,
        )
    }

    /// Every element must have the given runtime kind.
    pub fn of(self, kind: ValueKind, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must be an array of {}s.", self.base.label(), kind);
        self.check(
            "of",
            message,
            move |items| items.iter().any(|v| v.kind() != kind),
            default,
        )
    }

    /// Declares the element field. One element type per array.
    pub fn element(mut self, field: impl Into<FieldNode>) -> Result<Self> {
        self.base.ensure_unapplied("element")?;
        self.element = Some(Box::new(field.into()));
        self.base.mark_applied("element");
        Ok(self)
    }

    pub fn string(self) -> Result<Self> {
        let element = StringField::new(self.base.name(), self.base.label());
        self.element(element)
    }

    pub fn number(self) -> Result<Self> {
        let element = NumberField::new(self.base.name(), self.base.label());
        self.element(element)
    }

    pub fn boolean(self) -> Result<Self> {
        let element = BooleanField::new(self.base.name(), self.base.label());
        self.element(element)
    }

    pub fn date(self, coerce: bool) -> Result<Self> {
        let element = DateField::new(self.base.name(), self.base.label(), coerce);
        self.element(element)
    }

    pub fn object(self, shape: Shape) -> Result<Self> {
        let element = ObjectField::new(self.base.name(), self.base.label(), shape);
        self.element(element)
    }

    pub fn array(self) -> Result<Self> {
        let element = ArrayField::new(self.base.name(), self.base.label());
        self.element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use serde_json::json;

    fn a() -> ArrayField {
        ArrayField::new("tags", "Tags")
    }

    fn v(j: serde_json::Value) -> Value {
        Value::from(j)
    }

    #[test]
    fn unique_elements() {
        let f = a().unique(None).unwrap();
        assert!(f.validate(&v(json!([1, 2, 3]))).is_ok());
        let err = f.validate(&v(json!([1, 2, 2]))).unwrap_err();
        assert_eq!(err.message, "Tags must have unique values.");
        assert!(f.validate(&v(json!([{"a": 1}, {"a": 1}]))).is_err());
    }

    #[test]
    fn length_bounds() {
        let f = a().min_length(1, None).unwrap().max_length(2, None).unwrap();
        assert_eq!(f.validate(&v(json!([]))).unwrap_err().validator, "minLength");
        assert!(f.validate(&v(json!(["a"]))).is_ok());
        assert_eq!(f.validate(&v(json!(["a", "b", "c"]))).unwrap_err().validator, "maxLength");
        assert!(a().length(2, None).unwrap().validate(&v(json!([1]))).is_err());
    }

    #[test]
    fn of_checks_every_element_kind() {
        let f = a().of(ValueKind::String, None).unwrap();
        assert!(f.validate(&v(json!(["a", "b"]))).is_ok());
        let err = f.validate(&v(json!(["a", 1]))).unwrap_err();
        assert_eq!(err.message, "Tags must be an array of strings.");
    }

    #[test]
    fn kind_check_precedes_caller_validators() {
        let f = a().unique(None).unwrap();
        assert_eq!(f.validate(&v(json!("abc"))).unwrap_err().validator, "array");
    }

    #[test]
    fn element_selector_is_seeded_and_single() {
        let f = a().string().unwrap();
        let element = f.element_field().unwrap();
        assert_eq!(element.kind(), FieldKind::String);
        assert_eq!(element.name(), "tags");
        assert_eq!(element.label(), "Tags");
        assert_eq!(
            f.number().unwrap_err(),
            ConfigurationError::AlreadyApplied {
                label: "Tags".into(),
                validator: "element".into()
            }
        );
    }

    #[test]
    fn custom_element_field() {
        let element = StringField::new("tag", "Tag").min_length(2, None).unwrap();
        let f = a().element(element).unwrap();
        assert_eq!(f.element_kind(), Some(FieldKind::String));
        assert_eq!(f.element_field().unwrap().validators().len(), 2);
    }
}
