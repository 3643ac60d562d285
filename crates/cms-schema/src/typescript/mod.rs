//! TypeScript type text derived from field trees.

pub mod converter;
pub mod generator;
pub mod to_text;
pub mod types;

pub use converter::{shape_members, to_typescript_ast};
pub use generator::{GeneratorOptions, TypeGenerator};
pub use to_text::{declaration_to_text, members_to_text, ts_type_to_text};
pub use types::{TsDeclaration, TsMember, TsType};
