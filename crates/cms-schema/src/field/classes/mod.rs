//! Concrete field kinds.

pub mod array;
pub mod boolean;
pub mod date;
pub mod number;
pub mod object;
pub mod relation;
pub mod rich_text;
pub mod string;

pub use array::ArrayField;
pub use boolean::BooleanField;
pub use date::DateField;
pub use number::NumberField;
pub use object::ObjectField;
pub use relation::RelationField;
pub use rich_text::RichTextField;
pub use string::StringField;
