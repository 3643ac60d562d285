//! Shared state of every field: identity, validator chain, applied tags,
//! initial value and relations.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{ConfigurationError, ValidationError};
use crate::value::Value;

use super::FieldKind;

/// Check function: `None` if the value passes, `Some(message)` otherwise.
pub type ValidatorFn = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// A named check closed over its own configuration.
#[derive(Clone)]
pub struct ValidatorRecord {
    pub name: String,
    pub check: ValidatorFn,
}

impl ValidatorRecord {
    pub fn new(
        name: impl Into<String>,
        check: impl Fn(&Value) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    pub fn run(&self, value: &Value) -> Option<String> {
        (self.check)(value)
    }
}

impl fmt::Debug for ValidatorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRecord")
            .field("name", &self.name)
            .finish()
    }
}

/// Picks the caller's message (with `{value}` substituted) or the default.
pub fn error_message(
    custom: Option<&str>,
    value: &Value,
    default: impl FnOnce() -> String,
) -> String {
    match custom {
        Some(m) if !m.is_empty() => m.replace("{value}", &value.to_string()),
        _ => default(),
    }
}

#[derive(Clone)]
pub struct FieldBase {
    name: String,
    label: String,
    kind: FieldKind,
    validators: Vec<ValidatorRecord>,
    applied: BTreeSet<String>,
    initial_value: Option<Value>,
    relations: Option<Vec<String>>,
    component: Option<String>,
}

impl fmt::Debug for FieldBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBase")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("validators", &self.validator_names())
            .field("initial_value", &self.initial_value)
            .field("relations", &self.relations)
            .finish()
    }
}

impl FieldBase {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            validators: Vec::new(),
            applied: BTreeSet::new(),
            initial_value: None,
            relations: None,
            component: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn validators(&self) -> &[ValidatorRecord] {
        &self.validators
    }

    pub fn validator_names(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn is_applied(&self, tag: &str) -> bool {
        self.applied.contains(tag)
    }

    pub fn initial_value(&self) -> Option<&Value> {
        self.initial_value.as_ref()
    }

    pub fn relations(&self) -> &[String] {
        self.relations.as_deref().unwrap_or(&[])
    }

    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }

    /// Fails if `tag` was already applied on this field.
    pub fn ensure_unapplied(&self, tag: &str) -> Result<(), ConfigurationError> {
        if self.applied.contains(tag) {
            tracing::debug!(field = %self.name, validator = tag, "validator applied twice");
            return Err(ConfigurationError::AlreadyApplied {
                label: self.label.clone(),
                validator: tag.to_string(),
            });
        }
        Ok(())
    }

    pub fn mark_applied(&mut self, tag: &str) {
        self.applied.insert(tag.to_string());
    }

    /// Registers a validator without the duplicate-application guard.
    pub fn push(
        &mut self,
        tag: &str,
        check: impl Fn(&Value) -> Option<String> + Send + Sync + 'static,
    ) {
        self.validators.push(ValidatorRecord::new(tag, check));
    }

    /// Registers a validator at most once per field.
    pub fn apply(
        &mut self,
        tag: &str,
        check: impl Fn(&Value) -> Option<String> + Send + Sync + 'static,
    ) -> Result<(), ConfigurationError> {
        self.ensure_unapplied(tag)?;
        self.push(tag, check);
        self.mark_applied(tag);
        Ok(())
    }

    pub fn required(&mut self, message: Option<&str>) -> Result<(), ConfigurationError> {
        let label = self.label.clone();
        let message = message.map(str::to_string);
        self.apply("required", move |value| {
            if value.is_truthy() {
                return None;
            }
            Some(error_message(message.as_deref(), value, || {
                format!("{} is required.", label)
            }))
        })
    }

    pub fn set_initial_value(&mut self, value: Value) {
        self.initial_value = Some(value);
    }

    /// Appends relation names. Rejects the whole call if any name is
    /// already related or repeated within `names`.
    pub fn set_relations<I, S>(&mut self, names: I) -> Result<(), ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut merged = self.relations.clone().unwrap_or_default();
        for name in names {
            let name = name.into();
            if merged.contains(&name) {
                return Err(ConfigurationError::DuplicateRelation {
                    label: self.label.clone(),
                    relation: name,
                });
            }
            merged.push(name);
        }
        self.relations = Some(merged);
        Ok(())
    }

    pub fn set_component(&mut self, component: impl Into<String>) {
        self.component = Some(component.into());
    }

    /// Runs the validator chain in declaration order; the first failure wins.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        for validator in &self.validators {
            if let Some(message) = validator.run(value) {
                tracing::trace!(
                    field = %self.name,
                    validator = %validator.name,
                    "validation failed"
                );
                return Err(ValidationError::new(&self.label, &validator.name, message));
            }
        }
        Ok(())
    }

    /// Runs every validator and returns all failures in declaration order.
    pub fn validate_all(&self, value: &Value) -> Vec<ValidationError> {
        self.validators
            .iter()
            .filter_map(|v| {
                v.run(value)
                    .map(|message| ValidationError::new(&self.label, &v.name, message))
            })
            .collect()
    }

    /// Runs a single named validator, if registered.
    pub fn run_validator(&self, tag: &str, value: &Value) -> Option<ValidationError> {
        self.validators
            .iter()
            .find(|v| v.name == tag)
            .and_then(|v| v.run(value))
            .map(|message| ValidationError::new(&self.label, tag, message))
    }
}
