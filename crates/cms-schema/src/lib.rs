//! Fluent content-field schemas for a headless CMS.
//!
//! Fields are declared with [`field`] and a kind method, refined with chained
//! validators, collected into object shapes and finally into a [`Schema`]
//! whose top-level types can be validated against documents and projected to
//! TypeScript type text.
//!
//! ```
//! use cms_schema::prelude::*;
//!
//! let blog = schema(shape! {
//!     "post" => field("post", "Post").object(shape! {
//!         "title" => field("title", "Title").string().required(None).unwrap(),
//!     }),
//! })
//! .unwrap();
//! assert_eq!(blog.type_text(), "post: {\n  title: string;\n};\n");
//! ```

pub mod error;
pub mod field;
pub mod formats;
pub mod prelude;
pub mod typescript;
pub mod validator;
pub mod value;

// Re-export the most commonly used types at crate root
pub use error::{ConfigurationError, Error, Result, ValidationError, ValidationErrors};
pub use field::{field, schema, Field, FieldKind, FieldNode, Schema, Shape};
pub use typescript::{GeneratorOptions, TypeGenerator};
pub use validator::{validate, ErrorMode, ValidateOptions};
pub use value::{Value, ValueKind};
