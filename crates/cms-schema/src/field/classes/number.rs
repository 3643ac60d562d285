use crate::error::Result;
use crate::field::base::{error_message, FieldBase};
use crate::field::FieldKind;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct NumberField {
    pub(crate) base: FieldBase,
}

impl NumberField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let mut base = FieldBase::new(name, label, FieldKind::Number);
        let label = base.label().to_string();
        base.push("number", move |value| {
            if value.as_f64().is_some() {
                None
            } else {
                Some(format!("{} must be a number.", label))
            }
        });
        Self { base }
    }

    fn bound(
        mut self,
        tag: &str,
        message: Option<&str>,
        fails: impl Fn(f64) -> bool + Send + Sync + 'static,
        default: String,
    ) -> Result<Self> {
        let message = message.map(str::to_string);
        self.base.apply(tag, move |value: &Value| {
            let n = value.as_f64()?;
            if !fails(n) {
                return None;
            }
            Some(error_message(message.as_deref(), value, || default.clone()))
        })?;
        Ok(self)
    }

    pub fn min(self, min: f64, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must be at least {}.", self.base.label(), Value::from(min));
        self.bound("min", message, move |n| n < min, default)
    }

    pub fn max(self, max: f64, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must be at most {}.", self.base.label(), Value::from(max));
        self.bound("max", message, move |n| n > max, default)
    }

    pub fn integer(self, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must be an integer.", self.base.label());
        self.bound(
            "integer",
            message,
            |n| !n.is_finite() || n.fract() != 0.0,
            default,
        )
    }

    /// Zero counts as positive.
    pub fn positive(self, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must be positive.", self.base.label());
        self.bound("positive", message, |n| n < 0.0, default)
    }

    /// Zero counts as negative.
    pub fn negative(self, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must be negative.", self.base.label());
        self.bound("negative", message, |n| n > 0.0, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    fn n() -> NumberField {
        NumberField::new("count", "Count")
    }

    #[test]
    fn range() {
        let f = n().min(0.0, None).unwrap().max(10.0, None).unwrap();
        assert!(f.validate(&Value::from(5)).is_ok());
        assert_eq!(f.validate(&Value::from(-1)).unwrap_err().message, "Count must be at least 0.");
        assert_eq!(f.validate(&Value::from(11)).unwrap_err().message, "Count must be at most 10.");
    }

    #[test]
    fn rejects_numeric_strings() {
        let f = n();
        assert_eq!(f.validate(&Value::from("5")).unwrap_err().validator, "number");
    }

    #[test]
    fn integer_and_sign() {
        let f = n().integer(None).unwrap();
        assert!(f.validate(&Value::from(2.0)).is_ok());
        assert!(f.validate(&Value::from(2.5)).is_err());
        assert!(f.validate(&Value::Number(f64::INFINITY)).is_err());

        let p = n().positive(None).unwrap();
        assert!(p.validate(&Value::from(0)).is_ok());
        assert!(p.validate(&Value::from(-0.5)).is_err());

        let m = n().negative(Some("{value} is above zero")).unwrap();
        assert!(m.validate(&Value::from(0)).is_ok());
        assert_eq!(m.validate(&Value::from(3)).unwrap_err().message, "3 is above zero");
    }

    #[test]
    fn bounds_apply_once() {
        assert!(n().min(1.0, None).unwrap().min(2.0, None).is_err());
        assert!(n().integer(None).unwrap().integer(None).is_err());
    }
}
