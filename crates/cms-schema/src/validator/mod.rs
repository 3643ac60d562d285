pub mod types;
#[allow(clippy::module_inception)]
pub mod validator;

pub use types::{ErrorMode, ValidateOptions};
pub use validator::{validate, validate_object};
