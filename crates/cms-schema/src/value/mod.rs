pub mod date;
#[allow(clippy::module_inception)]
pub mod value;

pub use date::{coerce_date, parse_date};
pub use value::{Value, ValueKind};
