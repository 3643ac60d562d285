use crate::field::base::FieldBase;
use crate::field::FieldKind;

/// Carries only its kind check.
#[derive(Debug, Clone)]
pub struct BooleanField {
    pub(crate) base: FieldBase,
}

impl BooleanField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let mut base = FieldBase::new(name, label, FieldKind::Boolean);
        let label = base.label().to_string();
        base.push("boolean", move |value| {
            if value.as_bool().is_some() {
                None
            } else {
                Some(format!("{} must be a boolean.", label))
            }
        });
        Self { base }
    }
}
