use regex::Regex;

use crate::error::Result;
use crate::field::base::{error_message, FieldBase};
use crate::field::FieldKind;
use crate::formats;

#[derive(Debug, Clone)]
pub struct StringField {
    pub(crate) base: FieldBase,
}

impl StringField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let mut base = FieldBase::new(name, label, FieldKind::String);
        let label = base.label().to_string();
        base.push("string", move |value| {
            if value.as_str().is_some() {
                None
            } else {
                Some(format!("{} must be a string.", label))
            }
        });
        Self { base }
    }

    fn length_check(
        mut self,
        tag: &str,
        message: Option<&str>,
        fails: impl Fn(usize) -> bool + Send + Sync + 'static,
        default: String,
    ) -> Result<Self> {
        let message = message.map(str::to_string);
        self.base.apply(tag, move |value| {
            let len = value.as_str()?.chars().count();
            if !fails(len) {
                return None;
            }
            Some(error_message(message.as_deref(), value, || default.clone()))
        })?;
        Ok(self)
    }

    fn format_check(
        mut self,
        tag: &str,
        message: Option<&str>,
        matches: fn(&str) -> bool,
        what: &str,
        gated: bool,
    ) -> Result<Self> {
        let message = message.map(str::to_string);
        let default = format!("{} must be {}.", self.base.label(), what);
        let check = move |value: &crate::value::Value| {
            let s = value.as_str()?;
            if matches(s) {
                return None;
            }
            Some(error_message(message.as_deref(), value, || default.clone()))
        };
        if gated {
            self.base.apply(tag, check)?;
        } else {
            self.base.push(tag, check);
        }
        Ok(self)
    }

    pub fn min_length(self, length: usize, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must have a minimum length of {}.", self.base.label(), length);
        self.length_check("minLength", message, move |len| len < length, default)
    }

    pub fn max_length(self, length: usize, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must have a maximum length of {}.", self.base.label(), length);
        self.length_check("maxLength", message, move |len| len > length, default)
    }

    /// Exact length, in characters.
    pub fn length(self, length: usize, message: Option<&str>) -> Result<Self> {
        let default = format!("{} must have a length of {}.", self.base.label(), length);
        self.length_check("length", message, move |len| len != length, default)
    }

    /// Not guarded against repeated application.
    pub fn email(self, message: Option<&str>) -> Result<Self> {
        self.format_check("email", message, formats::is_email, "an email address", false)
    }

    pub fn url(self, message: Option<&str>) -> Result<Self> {
        self.format_check("url", message, formats::is_url, "a URL", true)
    }

    pub fn uuid(self, message: Option<&str>) -> Result<Self> {
        self.format_check("uuid", message, formats::is_uuid, "a UUID", true)
    }

    pub fn ipv4(self, message: Option<&str>) -> Result<Self> {
        self.format_check("ipv4", message, formats::is_ipv4, "an IPv4 address", true)
    }

    pub fn ipv6(self, message: Option<&str>) -> Result<Self> {
        self.format_check("ipv6", message, formats::is_ipv6, "an IPv6 address", true)
    }

    pub fn regex(mut self, regex: Regex, message: Option<&str>) -> Result<Self> {
        let message = message.map(str::to_string);
        let default = format!("{} must match the regex /{}/.", self.base.label(), regex.as_str());
        self.base.apply("regex", move |value| {
            let s = value.as_str()?;
            if regex.is_match(s) {
                return None;
            }
            Some(error_message(message.as_deref(), value, || default.clone()))
        })?;
        Ok(self)
    }
}
