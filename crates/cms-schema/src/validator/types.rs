//! Options for tree validation.

/// How many errors a validation pass reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Stop at the first failing validator.
    #[default]
    FailFast,
    /// Run every validator on every reachable node.
    Collect,
}

#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    pub errors: ErrorMode,
}

impl ValidateOptions {
    pub fn fail_fast() -> Self {
        Self {
            errors: ErrorMode::FailFast,
        }
    }

    pub fn collect() -> Self {
        Self {
            errors: ErrorMode::Collect,
        }
    }
}
