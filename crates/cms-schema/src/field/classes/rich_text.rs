use crate::field::base::FieldBase;
use crate::field::FieldKind;
use crate::value::Value;

/// Structured rich-text payload (an editor document object).
#[derive(Debug, Clone)]
pub struct RichTextField {
    pub(crate) base: FieldBase,
}

impl RichTextField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let mut base = FieldBase::new(name, label, FieldKind::RichText);
        let label = base.label().to_string();
        base.push("richText", move |value| {
            if value.as_object().is_some() {
                None
            } else {
                Some(format!("{} must be an object.", label))
            }
        });
        Self { base }
    }

    /// Serializes a payload into the JSON text stored in a `jsonb` column.
    pub fn get_jsonb(&self, value: &Value) -> serde_json::Result<String> {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use serde_json::json;

    #[test]
    fn accepts_document_objects() {
        let f = RichTextField::new("body", "Body");
        let doc = Value::from(json!({"type": "doc", "content": []}));
        assert!(f.validate(&doc).is_ok());
        let err = f.validate(&Value::from("<p>hi</p>")).unwrap_err();
        assert_eq!(err.message, "Body must be an object.");
    }

    #[test]
    fn jsonb_is_compact_json() {
        let f = RichTextField::new("body", "Body");
        let doc = Value::from(json!({"type": "doc", "level": 2}));
        assert_eq!(f.get_jsonb(&doc).unwrap(), r#"{"type":"doc","level":2}"#);
    }

    #[test]
    fn jsonb_keeps_large_integers_exact() {
        let f = RichTextField::new("body", "Body");
        let doc = Value::from(json!({"n": 9223372036854775808u64}));
        assert_eq!(f.get_jsonb(&doc).unwrap(), r#"{"n":9223372036854775808}"#);
    }
}
