use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::Result;
use crate::field::base::{error_message, FieldBase};
use crate::field::FieldKind;
use crate::value::{coerce_date, Value};

/// A date field. With `coerce`, strings and epoch-millisecond numbers that
/// parse as dates are accepted as well as genuine dates.
#[derive(Debug, Clone)]
pub struct DateField {
    pub(crate) base: FieldBase,
    coerce: bool,
}

impl DateField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, coerce: bool) -> Self {
        let mut base = FieldBase::new(name, label, FieldKind::Date);
        let label = base.label().to_string();
        if coerce {
            base.push("date", move |value| {
                if value.as_date().is_some() {
                    return None;
                }
                if !value.is_truthy() || coerce_date(value).is_none() {
                    return Some(format!("{} must be a date.", label));
                }
                None
            });
        } else {
            base.push("date", move |value| {
                if value.as_date().is_some() {
                    None
                } else {
                    Some(format!("{} must be a date.", label))
                }
            });
        }
        Self { base, coerce }
    }

    pub fn coerces(&self) -> bool {
        self.coerce
    }

    fn bound(
        mut self,
        tag: &str,
        message: Option<&str>,
        fails: impl Fn(&DateTime<Utc>) -> bool + Send + Sync + 'static,
        default: String,
    ) -> Result<Self> {
        let message = message.map(str::to_string);
        self.base.apply(tag, move |value: &Value| {
            let date = coerce_date(value)?;
            if !fails(&date) {
                return None;
            }
            Some(error_message(message.as_deref(), value, || default.clone()))
        })?;
        Ok(self)
    }

    /// Earliest accepted date, inclusive.
    pub fn min(self, min: DateTime<Utc>, message: Option<&str>) -> Result<Self> {
        let default = format!(
            "{} must be after {}.",
            self.base.label(),
            min.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        self.bound("min", message, move |d| *d < min, default)
    }

    /// Latest accepted date, inclusive.
    pub fn max(self, max: DateTime<Utc>, message: Option<&str>) -> Result<Self> {
        let default = format!(
            "{} must be before {}.",
            self.base.label(),
            max.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        self.bound("max", message, move |d| *d > max, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn strict_mode_accepts_only_dates() {
        let f = DateField::new("published", "Published", false);
        assert!(f.validate(&Value::from(day(1))).is_ok());
        let err = f.validate(&Value::from("2024-03-01")).unwrap_err();
        assert_eq!(err.message, "Published must be a date.");
    }

    #[test]
    fn coerce_mode_parses_strings() {
        let f = DateField::new("published", "Published", true);
        assert!(f.coerces());
        assert!(f.validate(&Value::from("2024-03-01")).is_ok());
        assert!(f.validate(&Value::from(day(1))).is_ok());
        assert!(f.validate(&Value::from("yesterday-ish")).is_err());
        assert!(f.validate(&Value::from("")).is_err());
        assert!(f.validate(&Value::Null).is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        let f = DateField::new("d", "D", true)
            .min(day(2), None)
            .unwrap()
            .max(day(4), None)
            .unwrap();
        assert!(f.validate(&Value::from(day(2))).is_ok());
        assert!(f.validate(&Value::from("2024-03-04")).is_ok());
        assert_eq!(f.validate(&Value::from(day(1))).unwrap_err().validator, "min");
        assert_eq!(f.validate(&Value::from(day(5))).unwrap_err().validator, "max");
    }

    #[test]
    fn bounds_apply_once() {
        let f = DateField::new("d", "D", false).min(day(1), None).unwrap();
        assert!(f.min(day(2), None).is_err());
    }
}
