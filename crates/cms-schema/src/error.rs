use std::fmt;

use thiserror::Error;

/// A step in a validation path: an object key or a stringified array index.
pub type PathStep = String;

/// Build-time errors raised while a field chain or schema is being declared.
///
/// These are always fatal to the declaring chain: the schema declaration has
/// to be fixed, there is nothing to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{label}'s {validator} validation is already set.")]
    AlreadyApplied { label: String, validator: String },

    #[error("{label} already has a relation with {relation}.")]
    DuplicateRelation { label: String, relation: String },

    #[error("The provided schema must be of type 'schema', got '{kind}'.")]
    NotASchema { kind: String },

    #[error("Schema entry '{name}' must be an object field, got '{kind}'.")]
    NotAnObjectType { name: String, kind: String },

    #[error("Schema has no type named '{name}'.")]
    UnknownType { name: String },
}

/// A single failed check, raised while validating a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Label of the field whose validator failed.
    pub label: String,
    /// Tag of the failing validator (`"string"`, `"minLength"`, ...).
    pub validator: String,
    /// Human-readable message, with `{value}` already substituted.
    pub message: String,
    /// Location of the failing value below the validated root. Empty for
    /// shallow validation.
    pub path: Vec<PathStep>,
}

impl ValidationError {
    pub fn new(
        label: impl Into<String>,
        validator: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            validator: validator.into(),
            message: message.into(),
            path: Vec::new(),
        }
    }

    pub fn at(mut self, path: &[PathStep]) -> Self {
        self.path = path.to_vec();
        self
    }

    /// The path formatted as a JSON Pointer (RFC 6901).
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for step in &self.path {
            out.push('/');
            out.push_str(&step.replace('~', "~0").replace('/', "~1"));
        }
        out
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.pointer(), self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every failure collected by a validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wraps collected errors; `None` when there is nothing to report.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Crate-level error for operations that can fail at build time or at
/// validation time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// Result alias used by chain methods.
pub type Result<T, E = ConfigurationError> = std::result::Result<T, E>;
